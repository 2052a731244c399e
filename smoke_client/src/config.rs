use risk_model::RiskModelError;
use risk_model::config::load_layered;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SmokeConfig {
    pub base_url: String,
    pub log_level: String,
}

impl SmokeConfig {
    pub fn from_env() -> Result<Self, RiskModelError> {
        Self::load("smoke.toml")
    }

    pub fn load(path: &str) -> Result<Self, RiskModelError> {
        load_layered(
            path,
            "SMOKE",
            &[("base_url", "http://localhost:8080"), ("log_level", "info")],
        )
    }
}
