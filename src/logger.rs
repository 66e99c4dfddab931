//! Structured logging to stderr.
//!
//! There is no datastore: an accepted form exists afterwards only as the
//! `info!` event its handler emits.  [`init`] runs once, after config load.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::AppError;

/// Install the process-wide subscriber.
///
/// `level` is any `EnvFilter` directive (`"info"`, `"warn,cfti_site=debug"`).
/// With `prefer_level` set it wins over `RUST_LOG`; otherwise `RUST_LOG` wins
/// and `level` is used when it is unset or unparsable.
pub fn init(level: &str, prefer_level: bool, format: LogFormat) -> Result<(), AppError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(level, prefer_level)?)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

fn filter(level: &str, prefer_level: bool) -> Result<EnvFilter, AppError> {
    if !prefer_level {
        return EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")));
    }

    EnvFilter::try_new(level).or_else(|level_err| {
        EnvFilter::try_from_default_env().map_err(|env_err| {
            AppError::Logger(format!(
                "invalid log level '{level}': {level_err}; RUST_LOG parse failed: {env_err}"
            ))
        })
    })
}

/// Strict single-level check used at config load.  `EnvFilter` would accept
/// a typo like `"verbose"` as a target name and log nothing.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
