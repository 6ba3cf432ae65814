//! Nutriplan server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use nutriplan::adapters::http::{api_router, plan::PlanHandlers, profile::ProfileHandlers};
use nutriplan::adapters::memory::StaticTokenVerifier;
use nutriplan::adapters::postgres::{
    PostgresPlanRepository, PostgresProfileStore, PostgresRecipeCatalog,
};
use nutriplan::application::handlers::plan::GeneratePlanHandler;
use nutriplan::application::handlers::profile::{GetProfileHandler, UpdateProfileHandler};
use nutriplan::config::AppConfig;
use nutriplan::domain::foundation::{AuthenticatedUser, UserId};
use nutriplan::ports::TokenVerifier;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    // Ports
    let profiles = Arc::new(PostgresProfileStore::new(pool.clone()));
    let catalog = Arc::new(PostgresRecipeCatalog::new(pool.clone()));
    let plans = Arc::new(PostgresPlanRepository::new(pool));

    // The external auth provider plugs in here; until one is wired, a
    // static dev token is accepted.
    if config.is_production() {
        tracing::warn!("no production token verifier configured; using static dev verifier");
    }
    let verifier: Arc<dyn TokenVerifier> = Arc::new(StaticTokenVerifier::new().with_user(
        "dev-token",
        AuthenticatedUser::new(UserId::new("dev-user").expect("valid user id"), None),
    ));

    // Handlers
    let plan_handlers = PlanHandlers::new(Arc::new(GeneratePlanHandler::new(
        profiles.clone(),
        catalog,
        plans,
    )));
    let profile_handlers = ProfileHandlers::new(
        Arc::new(GetProfileHandler::new(profiles.clone())),
        Arc::new(UpdateProfileHandler::new(profiles)),
    );

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = api_router(plan_handlers, profile_handlers, verifier)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
