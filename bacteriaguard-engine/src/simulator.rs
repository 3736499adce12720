use crate::session::{PhaseOutcome, ScanAction, ScanSession, ScanStatus, SessionError};
use crate::traits::{Clock, RandomSource};
use bacteriaguard_core::config::PhaseDelays;
use bacteriaguard_core::outcome::outcome_catalog;
use bacteriaguard_core::types::ScanResult;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub struct ScanSimulator {
    delays: PhaseDelays,
    catalog: Vec<ScanResult>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl ScanSimulator {
    pub fn new(delays: PhaseDelays, clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            delays,
            catalog: outcome_catalog(),
            clock,
            random,
        }
    }

    pub fn delays(&self) -> &PhaseDelays {
        &self.delays
    }

    pub fn catalog(&self) -> &[ScanResult] {
        &self.catalog
    }

    /// Scripted pause for a timed phase; `None` for states that wait on the user.
    pub fn delay_for(&self, status: ScanStatus) -> Option<Duration> {
        let ms = match status {
            ScanStatus::Connecting => self.delays.connecting_ms,
            ScanStatus::WaitingScan => self.delays.waiting_scan_ms,
            ScanStatus::Scanning => self.delays.scanning_ms,
            ScanStatus::SendingData => self.delays.sending_data_ms,
            ScanStatus::Processing => self.delays.processing_ms,
            _ => return None,
        };
        Some(Duration::from_millis(ms))
    }

    pub fn pick_outcome(&self) -> ScanResult {
        let len = self.catalog.len();
        let index = self.random.pick_index(len) % len;
        log::debug!("picked outcome {index} of {len}");
        self.catalog[index].clone()
    }

    /// Runs a whole session (start -> connect -> timed phases), confirming the
    /// connection prompt immediately.
    pub async fn run_session(&self) -> Result<ScanSession, SessionError> {
        self.run_session_with_hook(|_session| async {}).await
    }

    /// Same as `run_session`, but emits a snapshot after every change.
    pub async fn run_session_with_hook<F, Fut>(&self, on_update: F) -> Result<ScanSession, SessionError>
    where
        F: Fn(ScanSession) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut session = ScanSession::new();
        on_update(session.clone()).await;

        session.start()?;
        on_update(session.clone()).await;

        session.confirm_connection()?;
        on_update(session.clone()).await;

        self.run_timed_phases(session, on_update).await
    }

    /// Drives a connected session through every timed phase to `complete`.
    ///
    /// The hook sees each phase change plus the 95% processing checkpoint. It is
    /// not called for the incoming `connecting` state; the caller already has it.
    pub async fn run_timed_phases<F, Fut>(
        &self,
        mut session: ScanSession,
        on_update: F,
    ) -> Result<ScanSession, SessionError>
    where
        F: Fn(ScanSession) -> Fut,
        Fut: Future<Output = ()>,
    {
        if session.status() != ScanStatus::Connecting {
            return Err(SessionError::InvalidTransition {
                from: session.status(),
                action: ScanAction::FinishPhase,
            });
        }

        loop {
            let delay = self
                .delay_for(session.status())
                .ok_or(SessionError::InvalidTransition {
                    from: session.status(),
                    action: ScanAction::FinishPhase,
                })?;
            self.clock.sleep(delay).await;

            match session.finish_phase()? {
                PhaseOutcome::Advanced(_) => on_update(session.clone()).await,
                PhaseOutcome::AwaitingResult => {
                    on_update(session.clone()).await;
                    session.complete(self.pick_outcome())?;
                    on_update(session.clone()).await;
                    return Ok(session);
                }
            }
        }
    }
}
