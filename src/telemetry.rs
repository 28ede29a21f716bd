use crate::error::RriError;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `-q` wins, then `-v` counts, then the
/// configured level.
pub fn filter_directive(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `directive`.
pub fn init(directive: &str) -> Result<(), RriError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive).map_err(|e| {
            RriError::Telemetry(format!("invalid log filter '{directive}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| RriError::Telemetry(e.to_string()))
}
