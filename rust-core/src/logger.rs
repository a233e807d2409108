//! Terminal logging setup
//!
//! Level is read from `LOG_LEVEL` (trace, debug, info, warn, error).

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Map a level name to a filter, defaulting to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Install the global terminal logger
pub fn init_logger() -> Result<(), SetLoggerError> {
    let level = std::env::var(LOG_LEVEL_VAR)
        .map(|name| parse_level(&name))
        .unwrap_or(LevelFilter::Info);

    let cfg = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, cfg, TerminalMode::Mixed, ColorChoice::Auto)
}
