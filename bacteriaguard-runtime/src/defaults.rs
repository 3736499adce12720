use bacteriaguard_core::config::{AppConfig, PhaseDelays};

/// Stock phase pacing: 11 seconds from Connect Scanner to the result.
pub fn default_phase_delays() -> PhaseDelays {
    PhaseDelays::default()
}

pub fn default_app_config() -> AppConfig {
    AppConfig {
        scan: default_phase_delays(),
        ..AppConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_take_eleven_seconds_and_warn_level() {
        let cfg = default_app_config();
        assert_eq!(cfg.scan.total().as_millis(), 11_000);
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.random_seed, None);
    }
}
