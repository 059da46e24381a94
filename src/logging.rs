use flightpath_config::{LogFormat, LoggingConfig};
use flightpath_core::FlightPathError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Lines are written
/// to stdout through a non-blocking writer; keep the returned guard alive for
/// as long as logs should be flushed.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard, FlightPathError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            FlightPathError::Config(format!("invalid log filter '{}': {e}", config.level))
        })?;

    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().with_writer(writer)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init(),
    };
    installed
        .map_err(|e| FlightPathError::Config(format!("failed to install subscriber: {e}")))?;

    Ok(guard)
}
