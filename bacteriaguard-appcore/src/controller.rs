use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::Instant;

use bacteriaguard_engine::session::{ScanSession, ScanStatus, SessionError};
use bacteriaguard_engine::simulator::ScanSimulator;
use bacteriaguard_engine::traits::{ScanStatusPayload, StatusSink};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub status: String,
    pub progress: u8,
    pub error: Option<String>,
}

#[derive(Default)]
struct Inner {
    session: ScanSession,
    session_id: u64,
    status_message: Option<String>,
    status_message_expires_at: Option<Instant>,

    // The timed phases run in a background task so commands stay responsive
    // and Cancel can abort the in-flight work.
    processing_task: Option<JoinHandle<()>>,
    processing_abort: Option<AbortHandle>,
}

/// Owns the single active scan session and publishes every change to the sink.
#[derive(Clone)]
pub struct ScanController {
    inner: Arc<Mutex<Inner>>,
    simulator: Arc<ScanSimulator>,
    sink: Arc<dyn StatusSink>,
}

impl ScanController {
    const REJECTED_MESSAGE_TTL: Duration = Duration::from_secs(1);

    pub fn new(simulator: Arc<ScanSimulator>, sink: Arc<dyn StatusSink>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            simulator,
            sink,
        }
    }

    pub fn simulator(&self) -> &ScanSimulator {
        &self.simulator
    }

    fn prune_status_message(inner: &mut Inner) {
        if let Some(expires_at) = inner.status_message_expires_at {
            if Instant::now() >= expires_at {
                inner.status_message = None;
                inner.status_message_expires_at = None;
            }
        }
    }

    fn payload(inner: &mut Inner) -> ScanStatusPayload {
        Self::prune_status_message(inner);
        ScanStatusPayload::from_session(
            &inner.session,
            inner.session_id,
            inner.status_message.clone(),
        )
    }

    pub async fn status(&self) -> ScanStatusPayload {
        let mut inner = self.inner.lock().await;
        Self::payload(&mut inner)
    }

    async fn emit_status(&self) {
        let payload = {
            let mut inner = self.inner.lock().await;
            Self::payload(&mut inner)
        };
        self.sink.render(&payload);
    }

    async fn set_status_message(&self, message: String, ttl: Duration) {
        {
            let mut inner = self.inner.lock().await;
            inner.status_message = Some(message);
            inner.status_message_expires_at = Some(Instant::now() + ttl);
        }
        self.emit_status().await;
    }

    async fn reject(&self, err: SessionError) -> CommandResult {
        log::warn!("scan command rejected: {err}");
        self.set_status_message(err.to_string(), Self::REJECTED_MESSAGE_TTL)
            .await;
        let inner = self.inner.lock().await;
        CommandResult {
            status: inner.session.status().label().into(),
            progress: inner.session.progress(),
            error: Some(err.to_string()),
        }
    }

    /// Applies a user command to the session, then publishes the new state.
    async fn apply(
        &self,
        bump_session: bool,
        command: impl FnOnce(&mut ScanSession) -> Result<(), SessionError>,
    ) -> Result<(ScanSession, u64), CommandResult> {
        let outcome = {
            let mut inner = self.inner.lock().await;
            let prev = inner.session.status();
            match command(&mut inner.session) {
                Ok(()) => {
                    if bump_session {
                        inner.session_id = inner.session_id.wrapping_add(1);
                    }
                    inner.status_message = None;
                    inner.status_message_expires_at = None;
                    log::info!("scan status: {:?} -> {:?}", prev, inner.session.status());
                    Ok((inner.session.clone(), inner.session_id))
                }
                Err(e) => Err(e),
            }
        };

        match outcome {
            Ok(ok) => {
                self.emit_status().await;
                Ok(ok)
            }
            Err(e) => Err(self.reject(e).await),
        }
    }

    fn ok(session: &ScanSession) -> CommandResult {
        CommandResult {
            status: session.status().label().into(),
            progress: session.progress(),
            error: None,
        }
    }

    /// "Start Scan": idle -> connect-prompt.
    pub async fn start_scan(&self) -> CommandResult {
        match self.apply(true, |s| s.start()).await {
            Ok((session, _)) => Self::ok(&session),
            Err(rejected) => rejected,
        }
    }

    /// "Connect Scanner": connect-prompt -> connecting, then runs the timed
    /// phases in the background. Returns as soon as the run has started.
    pub async fn connect_scanner(&self) -> CommandResult {
        let (session, session_id) = match self.apply(false, |s| s.confirm_connection()).await {
            Ok(started) => started,
            Err(rejected) => return rejected,
        };

        let controller = self.clone();
        let first = session.clone();
        let handle = tokio::spawn(async move {
            let hook_controller = controller.clone();
            let res = controller
                .simulator
                .run_timed_phases(first, move |snapshot| {
                    let c = hook_controller.clone();
                    async move { c.apply_snapshot(session_id, snapshot).await }
                })
                .await;

            {
                let mut inner = controller.inner.lock().await;
                if inner.session_id == session_id {
                    inner.processing_abort = None;
                }
            }

            if let Err(e) = res {
                log::error!("scan run {session_id} stopped: {e}");
            }
        });

        {
            let mut inner = self.inner.lock().await;
            if let Some(prev) = inner.processing_abort.take() {
                prev.abort();
            }
            inner.processing_abort = Some(handle.abort_handle());
            inner.processing_task = Some(handle);
        }

        Self::ok(&session)
    }

    async fn apply_snapshot(&self, session_id: u64, snapshot: ScanSession) {
        {
            let mut inner = self.inner.lock().await;
            // Ignore late updates from a cancelled or replaced run.
            if inner.session_id != session_id {
                return;
            }
            let prev = inner.session.status();
            if prev != snapshot.status() {
                log::info!("scan status: {:?} -> {:?}", prev, snapshot.status());
            }
            if let Some(result) = snapshot.result() {
                log::info!(
                    "scan {session_id} result: {} ({}%)",
                    result.classification,
                    result.confidence
                );
            }
            inner.session = snapshot;
        }
        self.emit_status().await;
    }

    /// "New Scan": complete -> idle.
    pub async fn new_scan(&self) -> CommandResult {
        match self.apply(false, |s| s.reset()).await {
            Ok((session, _)) => Self::ok(&session),
            Err(rejected) => rejected,
        }
    }

    /// Abandons the current run from any non-idle state.
    pub async fn cancel_scan(&self) -> CommandResult {
        let cancelled = {
            let mut inner = self.inner.lock().await;
            if inner.session.status() == ScanStatus::Idle {
                None
            } else {
                if let Some(abort) = inner.processing_abort.take() {
                    abort.abort();
                }
                inner.processing_task = None;

                // Bump the session id so any pending update from the old run can't win.
                inner.session_id = inner.session_id.wrapping_add(1);
                let prev = inner.session.status();
                inner.session.cancel();
                log::info!("scan status: {:?} -> Idle (cancelled)", prev);
                Some(inner.session.clone())
            }
        };

        match cancelled {
            Some(session) => {
                self.emit_status().await;
                Self::ok(&session)
            }
            None => {
                self.set_status_message("nothing to cancel".into(), Self::REJECTED_MESSAGE_TTL)
                    .await;
                CommandResult {
                    status: ScanStatus::Idle.label().into(),
                    progress: 0,
                    error: Some("nothing to cancel".into()),
                }
            }
        }
    }

    /// Waits for the in-flight run, if any, to finish or be cancelled.
    pub async fn wait_until_settled(&self) {
        let task = { self.inner.lock().await.processing_task.take() };
        if let Some(task) = task {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    log::error!("scan task failed: {e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bacteriaguard_core::config::PhaseDelays;
    use bacteriaguard_core::outcome::outcome_catalog;
    use bacteriaguard_platform::test::{ManualClock, RecordingSink, ScriptedRandom};
    use bacteriaguard_runtime::clock::TokioClock;

    fn controller_with(
        clock: Arc<dyn bacteriaguard_engine::traits::Clock>,
        pick: usize,
    ) -> (ScanController, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let sim = ScanSimulator::new(
            PhaseDelays::default(),
            clock,
            ScriptedRandom::always(pick).boxed(),
        );
        (ScanController::new(Arc::new(sim), sink.clone()), sink)
    }

    #[tokio::test]
    async fn full_flow_publishes_every_status_in_order() {
        let clock = Arc::new(ManualClock::default());
        let (ctl, sink) = controller_with(clock.clone(), 1);

        assert!(ctl.start_scan().await.error.is_none());
        assert!(ctl.connect_scanner().await.error.is_none());
        ctl.wait_until_settled().await;

        let status = ctl.status().await;
        assert_eq!(status.status, ScanStatus::Complete);
        assert_eq!(status.progress, 100);
        assert_eq!(status.result.as_ref(), Some(&outcome_catalog()[1]));
        assert_eq!(clock.total(), Duration::from_millis(11_000));

        let mut seen: Vec<ScanStatus> = vec![ScanStatus::Idle];
        for p in sink.snapshot() {
            if seen.last() != Some(&p.status) {
                seen.push(p.status);
            }
        }
        assert_eq!(seen, ScanStatus::SEQUENCE.to_vec());

        let reset = ctl.new_scan().await;
        assert_eq!(reset.status, "idle");
        assert_eq!(reset.progress, 0);
        assert!(ctl.status().await.result.is_none());
    }

    #[tokio::test]
    async fn out_of_order_commands_are_rejected_with_a_message() {
        let (ctl, _sink) = controller_with(Arc::new(ManualClock::default()), 0);

        let r = ctl.connect_scanner().await;
        assert_eq!(r.status, "idle");
        assert!(r.error.is_some());
        assert!(ctl.status().await.message.is_some());

        assert!(ctl.new_scan().await.error.is_some());
        assert!(ctl.cancel_scan().await.error.is_some());

        ctl.start_scan().await;
        assert!(ctl.start_scan().await.error.is_some());
        assert_eq!(ctl.status().await.status, ScanStatus::ConnectPrompt);
    }

    #[tokio::test(start_paused = true)]
    async fn only_one_run_at_a_time() {
        let (ctl, _sink) = controller_with(Arc::new(TokioClock), 0);
        ctl.start_scan().await;
        ctl.connect_scanner().await;

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(ctl.connect_scanner().await.error.is_some());
        assert!(ctl.start_scan().await.error.is_some());
        assert_eq!(ctl.status().await.status, ScanStatus::Connecting);

        ctl.wait_until_settled().await;
        assert_eq!(ctl.status().await.status, ScanStatus::Complete);
    }

    #[tokio::test(start_paused = true)]
    async fn progress_follows_simulated_time() {
        let (ctl, _sink) = controller_with(Arc::new(TokioClock), 2);
        ctl.start_scan().await;
        ctl.connect_scanner().await;

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let s = ctl.status().await;
        assert_eq!((s.status, s.progress), (ScanStatus::WaitingScan, 15));

        tokio::time::sleep(Duration::from_millis(5500)).await;
        let s = ctl.status().await;
        assert_eq!((s.status, s.progress), (ScanStatus::SendingData, 65));

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let s = ctl.status().await;
        assert_eq!((s.status, s.progress), (ScanStatus::Complete, 100));
        assert_eq!(s.result.as_ref(), Some(&outcome_catalog()[2]));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_run_returns_to_idle_and_ignores_late_updates() {
        let (ctl, sink) = controller_with(Arc::new(TokioClock), 0);
        ctl.start_scan().await;
        ctl.connect_scanner().await;

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(ctl.status().await.status, ScanStatus::WaitingScan);

        let r = ctl.cancel_scan().await;
        assert_eq!(r.status, "idle");
        assert!(r.error.is_none());
        let renders_after_cancel = sink.snapshot().len();

        tokio::time::sleep(Duration::from_secs(20)).await;
        let s = ctl.status().await;
        assert_eq!(s.status, ScanStatus::Idle);
        assert_eq!(s.progress, 0);
        assert!(s.result.is_none());
        assert_eq!(sink.snapshot().len(), renders_after_cancel);

        // A fresh scan can start straight away.
        assert!(ctl.start_scan().await.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_messages_expire() {
        let (ctl, _sink) = controller_with(Arc::new(TokioClock), 0);
        ctl.new_scan().await;
        assert!(ctl.status().await.message.is_some());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(ctl.status().await.message.is_none());
    }
}
