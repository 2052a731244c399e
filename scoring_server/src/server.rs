use std::future::Future;
use std::sync::Arc;
use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::Uri,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{error, info, warn};
use risk_model::validation::parse_features;
use risk_model::{ScoreResult, ScoringEngine};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::signal;
use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
struct AppState {
    engine: Arc<ScoringEngine>,
}

/// POST /score validates the body and returns a fresh score.
async fn score(State(state): State<AppState>, body: Bytes) -> Result<Json<ScoreResult>, ApiError> {
    let features = parse_features(&body).inspect_err(|e| warn!("Rejected scoring request: {}", e))?;
    Ok(Json(state.engine.score(features)))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model_version": state.engine.model_version(),
    }))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

pub fn router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/score", post(score))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(AppState { engine })
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub struct Server {
    config: ServerConfig,
    engine: Arc<ScoringEngine>,
}

impl Server {
    pub fn init(config: ServerConfig) -> Self {
        Self {
            config,
            engine: Arc::new(ScoringEngine::new()),
        }
    }

    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!(
            "🚀Risk scoring service running on {} (model {})",
            listener.local_addr()?,
            self.engine.model_version()
        );

        serve(listener, router(self.engine), shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal, draining connections"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
