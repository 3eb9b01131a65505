use crate::types::ErrorBody;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lynk_core::{AgentContext, AgentInput};
use lynk_reasoning::EnrichmentEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
struct AppState {
    engine: Arc<EnrichmentEngine>,
}

/// Build the gateway routes around `engine`.
///
/// - `POST /agent/resource/enrich`: run one enrichment
/// - `GET /health`: health check
pub fn router(engine: Arc<EnrichmentEngine>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/agent/resource/enrich", post(enrich_resource))
        .layer(CorsLayer::permissive())
        .with_state(AppState { engine })
}

/// The gateway HTTP server.
pub struct GatewayServer {
    engine: Arc<EnrichmentEngine>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(engine: Arc<EnrichmentEngine>, host: &str, port: u16) -> Self {
        Self {
            engine,
            host: host.to_string(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Bind and serve until Ctrl-C or a server error.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Gateway listening on {}", addr);
        axum::serve(listener, router(self.engine))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Gateway stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

/// POST /agent/resource/enrich
///
/// The enrichment runs inside the request future, so a client that
/// disconnects cancels its run.
async fn enrich_resource(
    State(state): State<AppState>,
    Json(input): Json<AgentInput>,
) -> Result<Json<AgentContext>, (StatusCode, Json<ErrorBody>)> {
    tracing::info!("Received enrichment request for URL: {:?}", input.url);

    match state.engine.enrich(&input).await {
        Ok(context) => Ok(Json(context)),
        Err(e) => {
            tracing::error!("Error enriching resource: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::from(&e))))
        }
    }
}
