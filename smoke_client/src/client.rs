use log::{error, info};
use reqwest::{Client, StatusCode};
use risk_model::Features;
use serde_json::Value;
use crate::error::SmokeError;

pub const REQUIRED_FIELDS: [&str; 5] = ["ticker", "risk_score", "timestamp", "latency_ms", "model_version"];

/// The fixed payloads replayed against a running service.
pub fn acceptance_cases() -> Vec<Features> {
    vec![
        Features { ticker: "AAPL".to_string(), rsi: 65.5, pe: 25.2, peg: 1.1, sentiment: 0.3, atr: 2.5 },
        Features { ticker: "MSFT".to_string(), rsi: 45.0, pe: 18.5, peg: 0.9, sentiment: -0.2, atr: 1.8 },
        Features { ticker: "NVDA".to_string(), rsi: 80.0, pe: 45.0, peg: 2.5, sentiment: 0.8, atr: 5.2 },
    ]
}

pub fn missing_fields(body: &Value) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| body.get(**field).is_none())
        .map(|field| field.to_string())
        .collect()
}

pub struct ScoreClient {
    client: Client,
    base_url: String,
}

impl ScoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Posts `features` to `/score` and checks the response shape.
    pub async fn score(&self, features: &Features) -> Result<Value, SmokeError> {
        let url = format!("{}/score", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(features)
            .send()
            .await
            .map_err(|source| {
                if source.is_connect() {
                    SmokeError::ConnectionError { url: url.clone(), source }
                } else {
                    SmokeError::ReqwestError(source)
                }
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(SmokeError::StatusError { status, body });
        }

        let body: Value = response.json().await?;
        let missing = missing_fields(&body);
        if !missing.is_empty() {
            return Err(SmokeError::MissingFieldsError(missing));
        }

        Ok(body)
    }
}

#[derive(Debug)]
pub struct CaseOutcome {
    pub ticker: String,
    pub result: Result<Value, SmokeError>,
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SmokeReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs every case in order. A failing case never stops the ones after it.
pub async fn run_cases(base_url: &str, cases: &[Features]) -> SmokeReport {
    let client = ScoreClient::new(base_url);
    let mut report = SmokeReport::default();

    for (i, case) in cases.iter().enumerate() {
        info!("📊 Case {}: {}", i + 1, case.ticker);

        let result = client.score(case).await;
        match &result {
            Ok(body) => info!("✅ {} -> {}", case.ticker, body),
            Err(e) => error!("❌ {}: {}", case.ticker, e),
        }

        report.outcomes.push(CaseOutcome {
            ticker: case.ticker.clone(),
            result,
        });
    }

    report
}
