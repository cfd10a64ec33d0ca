//! MindGuard service entry point.
//!
//! Wires configuration, tracing, the database pool, the predictor failover
//! chain, and the HTTP router, then serves until shutdown.

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::Router;
use http::{header, HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mindguard::adapters::auth::JwtSessionValidator;
use mindguard::adapters::http::middleware::{auth_middleware, AuthState};
use mindguard::adapters::http::{assessment_router, health_router, AssessmentHandlers};
use mindguard::adapters::postgres::{PostgresSubmissionCounter, PostgresSubmissionStore};
use mindguard::adapters::predictor::{
    EnginePredictor, FailoverPredictor, RemotePredictor, RemotePredictorConfig,
};
use mindguard::application::handlers::{
    GetHistoryHandler, GetTrendHandler, SubmitAssessmentHandler,
};
use mindguard::config::AppConfig;
use mindguard::ports::RiskPredictor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(environment = ?config.server.environment, "starting mindguard");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    let remote = RemotePredictor::new(
        RemotePredictorConfig::new(&config.predictor.base_url)
            .with_timeout(config.predictor.timeout()),
    );
    let predictor: Arc<dyn RiskPredictor> =
        Arc::new(FailoverPredictor::new(remote, EnginePredictor::new()));

    let store = Arc::new(PostgresSubmissionStore::new(pool.clone()));
    let counter = Arc::new(PostgresSubmissionCounter::new(pool));

    let handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(
            predictor.clone(),
            store.clone(),
            counter,
        )),
        Arc::new(GetHistoryHandler::new(store.clone())),
        Arc::new(GetTrendHandler::new(store)),
    );

    let validator: AuthState = Arc::new(JwtSessionValidator::new(&config.auth.jwt_secret));

    let app = Router::new()
        .nest("/api/assessments", assessment_router(handlers))
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .merge(health_router(predictor))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    }
}
