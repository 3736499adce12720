use bacteriaguard_core::types::ScanResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStatus {
    #[default]
    Idle,
    ConnectPrompt,
    Connecting,
    WaitingScan,
    Scanning,
    SendingData,
    Processing,
    Complete,
}

impl ScanStatus {
    /// Every status a full run visits, in order.
    pub const SEQUENCE: [ScanStatus; 8] = [
        ScanStatus::Idle,
        ScanStatus::ConnectPrompt,
        ScanStatus::Connecting,
        ScanStatus::WaitingScan,
        ScanStatus::Scanning,
        ScanStatus::SendingData,
        ScanStatus::Processing,
        ScanStatus::Complete,
    ];

    // A stable string label for UI display.
    // This is intentionally not derived from `Debug`.
    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::Idle => "idle",
            ScanStatus::ConnectPrompt => "connect-prompt",
            ScanStatus::Connecting => "connecting",
            ScanStatus::WaitingScan => "waiting-scan",
            ScanStatus::Scanning => "scanning",
            ScanStatus::SendingData => "sending-data",
            ScanStatus::Processing => "processing",
            ScanStatus::Complete => "complete",
        }
    }

    /// Caption shown under the scanner device card.
    pub fn description(&self) -> &'static str {
        match self {
            ScanStatus::Idle => "Ready to scan",
            ScanStatus::ConnectPrompt => "Connect your external scanner",
            ScanStatus::Connecting => "Connecting to scanner device...",
            ScanStatus::WaitingScan => "Waiting for scanner to finish...",
            ScanStatus::Scanning => "Scanner is analyzing sample...",
            ScanStatus::SendingData => "Sending data to backend...",
            ScanStatus::Processing => "AI processing results...",
            ScanStatus::Complete => "Scan complete",
        }
    }

    /// Phases that advance on a timer rather than on a user command.
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            ScanStatus::Connecting
                | ScanStatus::WaitingScan
                | ScanStatus::Scanning
                | ScanStatus::SendingData
                | ScanStatus::Processing
        )
    }

    /// Progress recorded when this timed phase's delay elapses.
    pub fn exit_progress(&self) -> Option<u8> {
        match self {
            ScanStatus::Connecting => Some(15),
            ScanStatus::WaitingScan => Some(40),
            ScanStatus::Scanning => Some(65),
            ScanStatus::SendingData => Some(85),
            ScanStatus::Processing => Some(95),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<ScanStatus> {
        let i = Self::SEQUENCE.iter().position(|s| s == self)?;
        Self::SEQUENCE.get(i + 1).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanAction {
    Start,
    ConfirmConnection,
    FinishPhase,
    Complete,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action:?} while {}", .from.label())]
    InvalidTransition { from: ScanStatus, action: ScanAction },
}

/// What happened when a timed phase's delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    Advanced(ScanStatus),
    // Processing has reached 95% and needs a result to complete.
    AwaitingResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanSession {
    status: ScanStatus,
    progress: u8,
    result: Option<ScanResult>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    fn reject(&self, action: ScanAction) -> SessionError {
        SessionError::InvalidTransition {
            from: self.status,
            action,
        }
    }

    fn clear(&mut self) {
        self.progress = 0;
        self.result = None;
    }

    /// idle -> connect-prompt.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.status != ScanStatus::Idle {
            return Err(self.reject(ScanAction::Start));
        }
        self.clear();
        self.status = ScanStatus::ConnectPrompt;
        Ok(())
    }

    /// connect-prompt -> connecting. The timed chain starts from here.
    pub fn confirm_connection(&mut self) -> Result<(), SessionError> {
        if self.status != ScanStatus::ConnectPrompt {
            return Err(self.reject(ScanAction::ConfirmConnection));
        }
        self.status = ScanStatus::Connecting;
        Ok(())
    }

    /// Applies the end of the current timed phase.
    pub fn finish_phase(&mut self) -> Result<PhaseOutcome, SessionError> {
        let Some(progress) = self.status.exit_progress() else {
            return Err(self.reject(ScanAction::FinishPhase));
        };
        // Processing only finishes once; the second call has nothing to advance to.
        if self.status == ScanStatus::Processing && self.progress >= progress {
            return Err(self.reject(ScanAction::FinishPhase));
        }

        self.progress = self.progress.max(progress);
        if self.status == ScanStatus::Processing {
            return Ok(PhaseOutcome::AwaitingResult);
        }

        let next = self
            .status
            .next()
            .ok_or_else(|| self.reject(ScanAction::FinishPhase))?;
        self.status = next;
        Ok(PhaseOutcome::Advanced(next))
    }

    /// processing (95%) -> complete with the picked result.
    pub fn complete(&mut self, result: ScanResult) -> Result<(), SessionError> {
        let ready = self.status == ScanStatus::Processing
            && Some(self.progress) == ScanStatus::Processing.exit_progress();
        if !ready {
            return Err(self.reject(ScanAction::Complete));
        }
        self.result = Some(result);
        self.progress = 100;
        self.status = ScanStatus::Complete;
        Ok(())
    }

    /// complete -> idle ("New Scan").
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.status != ScanStatus::Complete {
            return Err(self.reject(ScanAction::Reset));
        }
        self.clear();
        self.status = ScanStatus::Idle;
        Ok(())
    }

    /// Drops back to idle from any state, abandoning the run.
    pub fn cancel(&mut self) {
        self.clear();
        self.status = ScanStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bacteriaguard_core::outcome::outcome_catalog;

    fn walk_to_processing(s: &mut ScanSession) {
        s.start().unwrap();
        s.confirm_connection().unwrap();
        for _ in 0..4 {
            s.finish_phase().unwrap();
        }
        assert_eq!(s.status(), ScanStatus::Processing);
    }

    #[test]
    fn labels_match_wire_names() {
        for s in ScanStatus::SEQUENCE {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.label()));
        }
    }

    #[test]
    fn next_walks_the_sequence_and_stops_at_complete() {
        let mut s = ScanStatus::Idle;
        let mut visited = vec![s];
        while let Some(n) = s.next() {
            visited.push(n);
            s = n;
        }
        assert_eq!(visited, ScanStatus::SEQUENCE.to_vec());
    }

    #[test]
    fn timed_phases_set_fixed_progress() {
        let mut s = ScanSession::new();
        s.start().unwrap();
        s.confirm_connection().unwrap();

        let mut seen = vec![];
        loop {
            match s.finish_phase().unwrap() {
                PhaseOutcome::Advanced(next) => seen.push((next, s.progress())),
                PhaseOutcome::AwaitingResult => {
                    seen.push((s.status(), s.progress()));
                    break;
                }
            }
        }

        assert_eq!(
            seen,
            vec![
                (ScanStatus::WaitingScan, 15),
                (ScanStatus::Scanning, 40),
                (ScanStatus::SendingData, 65),
                (ScanStatus::Processing, 85),
                (ScanStatus::Processing, 95),
            ]
        );
    }

    #[test]
    fn complete_requires_processing_to_have_finished() {
        let mut s = ScanSession::new();
        walk_to_processing(&mut s);
        let result = outcome_catalog().remove(0);

        let err = s.complete(result.clone()).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                from: ScanStatus::Processing,
                action: ScanAction::Complete
            }
        );
        assert!(s.result().is_none());

        assert_eq!(s.finish_phase().unwrap(), PhaseOutcome::AwaitingResult);
        assert!(s.finish_phase().is_err());
        s.complete(result.clone()).unwrap();

        assert_eq!(s.status(), ScanStatus::Complete);
        assert_eq!(s.progress(), 100);
        assert_eq!(s.result(), Some(&result));
        assert!(s.complete(result).is_err());
    }

    #[test]
    fn user_commands_are_rejected_out_of_order() {
        let mut s = ScanSession::new();
        assert!(s.confirm_connection().is_err());
        assert!(s.reset().is_err());
        assert!(s.finish_phase().is_err());

        s.start().unwrap();
        assert!(s.start().is_err());
        assert!(s.finish_phase().is_err());
        assert_eq!(s.status(), ScanStatus::ConnectPrompt);

        s.confirm_connection().unwrap();
        assert!(s.reset().is_err());
        assert_eq!(s.status(), ScanStatus::Connecting);
    }

    #[test]
    fn reset_from_complete_clears_everything() {
        let mut s = ScanSession::new();
        walk_to_processing(&mut s);
        s.finish_phase().unwrap();
        s.complete(outcome_catalog().remove(2)).unwrap();

        s.reset().unwrap();
        assert_eq!(s, ScanSession::new());
    }

    #[test]
    fn cancel_returns_to_idle_from_anywhere() {
        let mut s = ScanSession::new();
        walk_to_processing(&mut s);
        s.cancel();
        assert_eq!(s.status(), ScanStatus::Idle);
        assert_eq!(s.progress(), 0);
        assert!(s.result().is_none());
        s.start().unwrap();
    }
}
