use env_logger::{Builder, Env};
use crate::error::RiskModelError;

/// Installs the global logger. `RUST_LOG` wins over `default_level`.
pub fn init_logger(default_level: &str) -> Result<(), RiskModelError> {
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
