use chrono::Utc;
use log::debug;
use rand::Rng;
use crate::misc::{Features, ScoreResult, MODEL_VERSION};

const JITTER_SPAN: f64 = 0.05;
const LATENCY_MIN_MS: u32 = 10;
const LATENCY_MAX_MS: u32 = 30;
const SCORE_DECIMALS: usize = 3;

/// Heuristic risk scorer. Holds no per-request state, so one instance is
/// shared by every request handler.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    model_version: String,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            model_version: MODEL_VERSION.to_string(),
        }
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn score(&self, features: Features) -> ScoreResult {
        self.score_with_rng(features, &mut rand::thread_rng())
    }

    /// Scores `features` drawing jitter and synthetic latency from `rng`.
    pub fn score_with_rng<R: Rng>(&self, features: Features, rng: &mut R) -> ScoreResult {
        let base = base_risk(&features);
        let jitter = rng.gen_range(-JITTER_SPAN..=JITTER_SPAN);
        let risk_score = finalize_score(base, jitter);
        let latency_ms = rng.gen_range(LATENCY_MIN_MS..=LATENCY_MAX_MS);

        debug!(
            "Scored {}: base_risk={:.4} jitter={:+.4} risk_score={}",
            features.ticker, base, jitter, risk_score
        );

        ScoreResult {
            ticker: features.ticker,
            risk_score,
            timestamp: epoch_seconds(),
            latency_ms,
            model_version: self.model_version.clone(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-jitter risk, capped at 1. `peg` and `atr` are not part of the formula.
pub fn base_risk(features: &Features) -> f64 {
    let rsi_term = (features.rsi - 50.0).abs() / 50.0;
    let pe_term = features.pe / 100.0;
    let sentiment_term = 1.0 - (features.sentiment + 1.0) / 2.0;

    ((rsi_term + pe_term + sentiment_term) / 3.0).min(1.0)
}

/// Applies jitter, clamps into [0, 1], then rounds. Order matters at the bounds.
pub fn finalize_score(base_risk: f64, jitter: f64) -> f64 {
    round_half_even((base_risk + jitter).clamp(0.0, 1.0), SCORE_DECIMALS)
}

// Float formatting rounds the exact binary value half-to-even.
fn round_half_even(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
