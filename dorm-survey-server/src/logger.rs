use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::ServerError;
use crate::config::LogConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stdout, either
/// compact and colored or as JSON lines.
///
/// # Errors
/// Returns [`ServerError::LogFilter`] for an unparsable level and
/// [`ServerError::Subscriber`] if a global subscriber is already installed.
pub fn init_logging(cfg: &LogConfig) -> Result<(), ServerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)?,
    };

    let layer = if cfg.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().compact().with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()?;

    Ok(())
}
