use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the stderr subscriber. `RUST_LOG` wins over `logging.filter`.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Fails only when a global subscriber is already set; that one stays.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!(error = %e, "tracing subscriber already installed");
    }
}
