use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// dependencies stay at warn, only this crate gets chattier
pub fn default_directive(log_level: &LogLevel) -> &'static str {
    match log_level {
        LogLevel::Chirpy => "warn,yb_usage_cli=debug",
        LogLevel::Normal => "warn,yb_usage_cli=info",
        LogLevel::Stfu => "error",
    }
}

/// RUST_LOG, when set, overrides the configured level. output goes to stderr.
pub fn init(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
