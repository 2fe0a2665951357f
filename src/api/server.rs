use crate::api::config::{Config, StoreBackend};
use crate::api::routes::{
    auth_routes, cart_routes, delivery_option_routes, order_routes, payment_summary_routes,
    product_routes,
};
use crate::api::state::AppState;
use crate::data::database::Database;
use crate::data::errors::RepoError;
use crate::data::repos::Repositories;
use crate::data::repos::implementors::memory_store::MemoryStore;
use crate::utils::clock::SystemClock;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("DATABASE_URL must be set for the mysql backend")]
    MissingDatabaseUrl,
    #[error("Failed to connect to the database: {0}")]
    Database(#[from] RepoError),
    #[error("Invalid CORS origin {0:?}")]
    InvalidOrigin(String),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// All routes, without CORS. Tests drive this directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Backend is running" }))
        .nest("/products", product_routes::routes())
        .nest("/delivery-options", delivery_option_routes::routes())
        .nest("/cart", cart_routes::routes())
        .nest("/orders", order_routes::routes())
        .nest("/payment-summary", payment_summary_routes::routes())
        .nest("/auth", auth_routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_origin(allow_origin))
}

async fn repositories(config: &Config) -> Result<Repositories, ServerError> {
    match config.store_backend {
        StoreBackend::Mysql => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(ServerError::MissingDatabaseUrl)?;
            let db = Database::new(url, config.database_max_connections)?;
            Ok(Repositories::mysql(db))
        }
        StoreBackend::Memory => {
            let store = Arc::new(MemoryStore::new());
            if config.seed_demo_data {
                store.seed_demo_data().await;
            }
            tracing::warn!("Using the in-memory store; data is lost on shutdown");
            Ok(Repositories::memory(store))
        }
    }
}

pub async fn start(config: Config) -> Result<(), ServerError> {
    let repos = repositories(&config).await?;
    let state = AppState::new(repos, &config, Arc::new(SystemClock));
    if state.jwt.is_none() {
        tracing::warn!("JWT_SECRET is not set; /auth/user will answer 500");
    }

    let router = build_router(state).layer(cors_layer(&config.cors_allowed_origins)?);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Server running on http://{}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down gracefully");
}
