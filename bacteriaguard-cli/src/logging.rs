/// Installs the global logger.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (from the config) applies.
/// Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    if env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("logger already installed");
    }
}
