use std::sync::Arc;

use axum::{Router, middleware};
use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    services::ServiceContext,
    state::AppState,
};

/// State backed by a fresh in-memory todo store.
pub fn test_state() -> Arc<AppState> {
    AppState::new(AppConfig::default(), ServiceContext::in_memory())
}

/// State backed by an existing sea-orm connection.
pub fn db_state(db: &DatabaseConnection) -> Arc<AppState> {
    AppState::new(AppConfig::default(), ServiceContext::from_db(db))
}

/// The API router with the same error middleware `main` installs.
pub fn test_router(state: Arc<AppState>) -> Router {
    with_middleware(router(state))
}

pub fn with_middleware(app: Router) -> Router {
    app.layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
