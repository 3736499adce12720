use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scripted pause before each timed scan phase advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDelays {
    pub connecting_ms: u64,
    pub waiting_scan_ms: u64,
    pub scanning_ms: u64,
    pub sending_data_ms: u64,
    pub processing_ms: u64,
}

impl Default for PhaseDelays {
    fn default() -> Self {
        Self {
            connecting_ms: 2000,
            waiting_scan_ms: 3000,
            scanning_ms: 2500,
            sending_data_ms: 1500,
            processing_ms: 2000,
        }
    }
}

impl PhaseDelays {
    pub fn zero() -> Self {
        Self {
            connecting_ms: 0,
            waiting_scan_ms: 0,
            scanning_ms: 0,
            sending_data_ms: 0,
            processing_ms: 0,
        }
    }

    /// Sum of all phases. Saturates instead of overflowing on hand-edited configs.
    pub fn total(&self) -> Duration {
        [
            self.connecting_ms,
            self.waiting_scan_ms,
            self.scanning_ms,
            self.sending_data_ms,
            self.processing_ms,
        ]
        .into_iter()
        .fold(Duration::ZERO, |acc, ms| {
            acc.saturating_add(Duration::from_millis(ms))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: PhaseDelays,

    // Fixed seed makes outcome picks reproducible; None uses the thread RNG.
    #[serde(default)]
    pub random_seed: Option<u64>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan: PhaseDelays::default(),
            random_seed: None,
            log_level: default_log_level(),
        }
    }
}
