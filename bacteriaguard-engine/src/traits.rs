use async_trait::async_trait;
use bacteriaguard_core::report::Toast;
use bacteriaguard_core::types::ScanResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::session::{ScanSession, ScanStatus};

/// Paces the timed scan phases.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

/// Source of outcome indices.
///
/// Implementations should return a value in `0..len`; callers reduce anything
/// else modulo `len`.
pub trait RandomSource: Send + Sync {
    fn pick_index(&self, len: usize) -> usize;
}

/// Shows transient notifications (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}

/// Renders the current scan state.
///
/// Called on every status change; must be fast.
pub trait StatusSink: Send + Sync {
    fn render(&self, status: &ScanStatusPayload);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStatusPayload {
    pub status: ScanStatus,
    pub status_label: String,
    pub description: String,
    pub progress: u8,
    pub result: Option<ScanResult>,
    pub session_id: u64,
    pub message: Option<String>,
}

impl ScanStatusPayload {
    pub fn from_session(session: &ScanSession, session_id: u64, message: Option<String>) -> Self {
        let status = session.status();
        Self {
            status,
            status_label: status.label().into(),
            description: status.description().into(),
            progress: session.progress(),
            result: session.result().cloned(),
            session_id,
            message,
        }
    }
}
