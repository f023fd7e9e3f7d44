//! MotoLens API Gateway
//!
//! HTTP front for the identifier engine. The scanner and manual-entry
//! clients post raw text here and forward the structured result to the
//! vehicle-decode and parts-catalog services.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::get,
    Router,
};
use motolens_utils::AppConfig;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;

use metrics::Metrics;
use middleware::*;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub metrics: Arc<Metrics>,
}

pub fn create_app(config: &AppConfig) -> Result<Router> {
    let metrics = Metrics::new(&config.monitoring.prometheus_namespace)?;

    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::create_api_routes());

    if config.monitoring.metrics_enabled {
        app = app.route("/metrics", get(handlers::metrics_handler));
    }

    let app = app
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(axum::middleware::from_fn(error_handling_middleware)),
        )
        .with_state(AppState {
            config: config.clone(),
            metrics: Arc::new(metrics),
        });

    Ok(app)
}
