//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use campus_cache::{RedisPool, RedisSessionStore};
use campus_common::{AppConfig, AppError};
use campus_db::{
    create_pool, run_migrations, PgClassRepository, PgExamRepository, PgHealthCheck,
    PgMemberRepository, PgNoteRepository, PgPostRepository, PgSeasonRepository, PgUserRepository,
};
use campus_service::{PhotoStorage, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::session::SessionBackend;
use crate::state::AppState;
use crate::views::Views;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(router, state.config().storage.max_body_bytes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&campus_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!("Running database migrations...");
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Session(e.to_string()))?;
    let session_store = RedisSessionStore::new(redis_pool);
    info!("Redis pool created");

    let service_context = ServiceContextBuilder::new()
        .season_repo(Arc::new(PgSeasonRepository::new(pool.clone())))
        .class_repo(Arc::new(PgClassRepository::new(pool.clone())))
        .note_repo(Arc::new(PgNoteRepository::new(pool.clone())))
        .exam_repo(Arc::new(PgExamRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .health_check(Arc::new(PgHealthCheck::new(pool)))
        .health_check(Arc::new(session_store.clone()))
        .admin(config.admin.clone())
        .photo_storage(PhotoStorage::new(config.storage.clone()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let views = Views::new().map_err(|e| AppError::Config(format!("templates: {e}")))?;

    Ok(AppState::new(
        service_context,
        config,
        views,
        SessionBackend::new(session_store),
    ))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.web.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
