use anyhow::{bail, Result};
use log::info;
use risk_model::logger::init_logger;
use smoke_client::config::SmokeConfig;
use smoke_client::{acceptance_cases, run_cases};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = SmokeConfig::from_env()?;
    init_logger(&config.log_level)?;

    info!("🧪 Smoke testing risk scoring service at {}", config.base_url);

    let cases = acceptance_cases();
    let report = run_cases(&config.base_url, &cases).await;

    info!("🏁 {} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        bail!("{} of {} smoke cases failed", report.failed(), cases.len());
    }

    Ok(())
}
