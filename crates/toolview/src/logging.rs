use tracing_subscriber::EnvFilter;

use crate::error::Error;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. The level comes from `RUST_LOG` and defaults
/// to `warn`; output goes to stderr so rendered views on stdout stay clean.
pub fn init_tracing() -> Result<(), Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize tracing: {e}")))
}
