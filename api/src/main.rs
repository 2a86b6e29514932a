//! TKM Dashboard API Server
//!
//! Read-only analytics and reporting API over the mentoring program's
//! participants, mentors, universities, logbooks and monthly reports.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAnalyticsRepository, PostgresLogbookRepository, PostgresMentorRepository,
    PostgresMonthlyReportRepository, PostgresParticipantRepository, PostgresUniversityRepository,
};
use app::{DashboardService, ListingService, ParticipantService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService>,
    pub participant_service: Arc<ParticipantService>,
    pub dashboard_service: Arc<DashboardService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// All routes plus CORS and tracing. Rate limiting is added in `main`
/// because it needs the peer address from the connection.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Lists
        .route("/participants", get(handlers::list_participants))
        .route("/participants/filters", get(handlers::participant_filters))
        .route("/participants/:id", get(handlers::get_participant))
        .route(
            "/participants/:id/outputs",
            get(handlers::get_participant_outputs),
        )
        .route("/mentors", get(handlers::list_mentors))
        .route("/universities", get(handlers::list_universities))
        .route("/logbooks", get(handlers::list_logbooks))
        .route("/outputs", get(handlers::list_outputs))
        // Dashboard
        .route("/dashboard/summary", get(handlers::get_summary))
        .route("/dashboard/rollups", get(handlers::get_rollups))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tkm_dashboard_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TKM Dashboard API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let participant_repo = Arc::new(PostgresParticipantRepository::new(db.clone()));
    let mentor_repo = Arc::new(PostgresMentorRepository::new(db.clone()));
    let university_repo = Arc::new(PostgresUniversityRepository::new(db.clone()));
    let logbook_repo = Arc::new(PostgresLogbookRepository::new(db.clone()));
    let report_repo = Arc::new(PostgresMonthlyReportRepository::new(db.clone()));
    let analytics_repo = Arc::new(PostgresAnalyticsRepository::new(db.clone()));

    // Create application services
    let listing_service = Arc::new(ListingService::new(
        participant_repo.clone(),
        mentor_repo,
        university_repo,
        logbook_repo,
        report_repo.clone(),
    ));

    let participant_service = Arc::new(ParticipantService::new(participant_repo, report_repo));

    let dashboard_service = Arc::new(DashboardService::new(
        analytics_repo,
        config.summary_timeout,
        config.summary_failure_policy,
        config.top_n,
    ));

    // Create app state
    let state = AppState {
        listing_service,
        participant_service,
        dashboard_service,
    };

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
