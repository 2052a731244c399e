//! Heuristic ticker risk scoring: request features, payload validation and
//! the scoring formula, plus the config and logging helpers both binaries share.

pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod misc;
pub mod validation;

pub use engine::ScoringEngine;
pub use error::{FieldError, RiskModelError, ValidationError};
pub use misc::{Features, ScoreResult, MODEL_VERSION};
