pub mod error;
pub mod handlers;
pub mod request_log;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Error;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use log::info;

use crate::models::config::Config;
use crate::services::language_detection_service::LanguageDetectionService;
use self::request_log::RequestLog;

/// Process-wide state shared across requests. Everything here is
/// read-only after startup except the request log's append sink.
pub struct AppContext {
    pub detection_service: LanguageDetectionService,
    pub request_log: RequestLog,
    pub started_at: Instant,
    pub environment: String,
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/language/detect", post(handlers::detect_single))
        .route("/api/language/detect/batch", post(handlers::detect_batch))
        .route(
            "/api/language/supported",
            get(handlers::supported_languages),
        )
        .route("/api/language/health", get(handlers::health_check))
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            request_log::log_requests,
        ))
        .with_state(ctx)
}

pub async fn serve(config: &Config, ctx: Arc<AppContext>) -> Result<(), Error> {
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let router = build_router(ctx);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "Server is running in {} mode on port {}",
        config.environment, config.port
    );

    axum::serve(listener, router).await?;

    Ok(())
}
