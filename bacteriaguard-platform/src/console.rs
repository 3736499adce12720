use bacteriaguard_core::report::Toast;
use bacteriaguard_engine::session::ScanStatus;
use bacteriaguard_engine::traits::{Notifier, ScanStatusPayload, StatusSink};

const BAR_WIDTH: usize = 20;

pub fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Prints one line per status update.
#[derive(Debug, Default)]
pub struct ConsoleStatusSink;

impl StatusSink for ConsoleStatusSink {
    fn render(&self, status: &ScanStatusPayload) {
        if let Some(msg) = status.message.as_deref() {
            println!("! {msg}");
        }
        if status.status == ScanStatus::Idle {
            println!("Scanner Device: {}", status.description);
            return;
        }
        println!(
            "{} {:>3}%  {}",
            progress_bar(status.progress),
            status.progress,
            status.description
        );
    }
}

/// Emits status snapshots as JSON lines.
#[derive(Debug, Default)]
pub struct JsonStatusSink;

impl StatusSink for JsonStatusSink {
    fn render(&self, status: &ScanStatusPayload) {
        match serde_json::to_string(status) {
            Ok(line) => println!("{line}"),
            Err(e) => log::warn!("encode status failed: {e}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: &Toast) {
        println!("** {} **", toast.title);
        println!("   {}", toast.description);
    }
}

/// Sends toasts to the log only, for output modes that own stdout.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toast) {
        log::info!("{}: {}", toast.title, toast.description);
    }
}
