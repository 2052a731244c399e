pub mod client;
pub mod config;
pub mod error;

pub use client::{acceptance_cases, run_cases, ScoreClient, SmokeReport};
