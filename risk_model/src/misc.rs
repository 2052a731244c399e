use serde::{Deserialize, Serialize};

pub const MODEL_VERSION: &str = "v0.1";

pub const DEFAULT_RSI: f64 = 50.0;
pub const DEFAULT_PE: f64 = 20.0;
pub const DEFAULT_PEG: f64 = 1.0;
pub const DEFAULT_SENTIMENT: f64 = 0.0;
pub const DEFAULT_ATR: f64 = 1.0;

/// Inputs for a single scoring request.
///
/// `peg` and `atr` are part of the request shape callers send but do not
/// feed into the current formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Features {
    pub ticker: String,
    pub rsi: f64,
    pub pe: f64,
    pub peg: f64,
    pub sentiment: f64,
    pub atr: f64,
}

impl Features {
    /// Features for `ticker` with every numeric field at its default.
    pub fn with_defaults(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            rsi: DEFAULT_RSI,
            pe: DEFAULT_PE,
            peg: DEFAULT_PEG,
            sentiment: DEFAULT_SENTIMENT,
            atr: DEFAULT_ATR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub ticker: String,
    pub risk_score: f64,
    pub timestamp: f64,
    pub latency_ms: u32,
    pub model_version: String,
}
