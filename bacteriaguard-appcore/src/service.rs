use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use bacteriaguard_core::config::AppConfig;
use bacteriaguard_core::report::{Acknowledgment, IncidentReport};
use bacteriaguard_engine::education::{EducationError, EducationPanel};
use bacteriaguard_engine::report::ReportForm;
use bacteriaguard_engine::simulator::ScanSimulator;
use bacteriaguard_engine::traits::{Clock, Notifier, RandomSource, ScanStatusPayload, StatusSink};
use bacteriaguard_runtime::clock::TokioClock;
use bacteriaguard_runtime::config_store::ConfigStore;
use bacteriaguard_runtime::random::random_source;

use crate::controller::{CommandResult, ScanController};

/// Everything a front end needs: the scan controller, the report form and
/// the education cards, built from one config.
#[derive(Clone)]
pub struct AppService {
    config: AppConfig,
    controller: ScanController,
    report: Arc<Mutex<ReportForm>>,
    education: Arc<Mutex<EducationPanel>>,
}

impl AppService {
    pub fn new(
        config: AppConfig,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        sink: Arc<dyn StatusSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let simulator = ScanSimulator::new(config.scan.clone(), clock, random);
        Self {
            config,
            controller: ScanController::new(Arc::new(simulator), sink),
            report: Arc::new(Mutex::new(ReportForm::new(notifier))),
            education: Arc::new(Mutex::new(EducationPanel::new())),
        }
    }

    /// Loads `config_path` (or defaults) and wires real-time pacing plus the
    /// configured random source.
    pub fn from_config_path(
        config_path: PathBuf,
        sink: Arc<dyn StatusSink>,
        notifier: Arc<dyn Notifier>,
    ) -> anyhow::Result<Self> {
        let config = ConfigStore::at_path(config_path).load_or_default()?;
        let random = random_source(config.random_seed);
        Ok(Self::new(config, Arc::new(TokioClock), random, sink, notifier))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn controller(&self) -> &ScanController {
        &self.controller
    }

    pub async fn scan_status(&self) -> ScanStatusPayload {
        self.controller.status().await
    }

    /// Start, connect and wait for the result in one go.
    pub async fn scan_to_completion(&self) -> anyhow::Result<ScanStatusPayload> {
        let started = self.controller.start_scan().await;
        command_ok(started)?;
        let connected = self.controller.connect_scanner().await;
        command_ok(connected)?;
        self.controller.wait_until_settled().await;
        Ok(self.controller.status().await)
    }

    pub async fn edit_report<R>(&self, edit: impl FnOnce(&mut ReportForm) -> R) -> R {
        let mut form = self.report.lock().await;
        edit(&mut form)
    }

    pub async fn submit_report(&self, report: IncidentReport) -> Acknowledgment {
        let mut form = self.report.lock().await;
        form.fill(report);
        form.submit()
    }

    pub async fn toggle_topic(&self, index: usize) -> Result<bool, EducationError> {
        self.education.lock().await.toggle(index)
    }

    pub async fn education(&self) -> EducationPanel {
        self.education.lock().await.clone()
    }
}

fn command_ok(res: CommandResult) -> anyhow::Result<()> {
    match res.error {
        Some(e) => anyhow::bail!("{e}"),
        None => Ok(()),
    }
}
