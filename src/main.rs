use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use todo_service::{
    config::{AppConfig, LoggingConfig},
    db::connection,
    logging::init_tracing,
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    services::ServiceContext,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            // Bring up default logging so the failure below is not swallowed.
            init_tracing(&LoggingConfig::default());
            return Err(err);
        }
    };
    init_tracing(&cfg.logging);

    let services = match cfg.database.as_ref() {
        Some(database) => ServiceContext::from_db(&connection::connect(database).await?),
        None => {
            tracing::warn!("no database configured; todos are kept in memory only");
            ServiceContext::in_memory()
        }
    };

    let state = AppState::new(cfg, services);
    let bind_address = state.config.bind_address();
    let addr: SocketAddr = bind_address
        .parse()
        .with_context(|| format!("invalid host/port: {bind_address}"))?;

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
