use risk_model::RiskModelError;
use risk_model::config::load_layered;
use serde::Deserialize;

const CONFIG_FILE: &str = "scoring.toml";
const ENV_PREFIX: &str = "SCORING";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, RiskModelError> {
        Self::load(CONFIG_FILE)
    }

    pub fn load(path: &str) -> Result<Self, RiskModelError> {
        load_layered(
            path,
            ENV_PREFIX,
            &[("host", "0.0.0.0"), ("port", "8080"), ("log_level", "info")],
        )
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
