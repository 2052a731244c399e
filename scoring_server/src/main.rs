use anyhow::Result;
use log::info;
use risk_model::logger::init_logger;
use scoring_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_logger(&config.log_level)?;

    Server::init(config).run().await?;

    info!("Risk scoring service has been shut down gracefully");

    Ok(())
}
