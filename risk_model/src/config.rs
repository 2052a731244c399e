use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use crate::error::RiskModelError;

/// Builds a settings struct from, in increasing priority: `defaults`,
/// an optional TOML file at `path`, and `{env_prefix}_*` environment
/// variables.
pub fn load_layered<T: DeserializeOwned>(
    path: &str,
    env_prefix: &str,
    defaults: &[(&str, &str)],
) -> Result<T, RiskModelError> {
    let mut builder = Config::builder();
    for (key, value) in defaults {
        builder = builder.set_default(*key, *value)?;
    }

    let cfg = builder
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
        .build()?;

    Ok(cfg.try_deserialize()?)
}
