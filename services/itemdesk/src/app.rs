//! App assembly: routes, auth layer, CORS, tracing and listener.

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    routing::{get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    auth::{handlers::login_handler, middleware::require_bearer},
    config::AppConfig,
    resources::handlers::{list_items_handler, update_profile_handler},
    state::AppState,
};

/// Start the HTTP server.
pub(crate) async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.listen_addr()?;
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        token_ttl_sec = config.token_ttl_sec,
        "itemdesk listening on {addr}"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("itemdesk stopped");
    Ok(())
}

/// Full router over `state`.
pub(crate) fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let protected = Router::new()
        .route("/items", get(list_items_handler))
        .route("/profile", put(update_profile_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/auth/login", post(login_handler))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check.
async fn healthz() -> &'static str {
    "ok"
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("listen for shutdown signal failed: {err}");
        std::future::pending::<()>().await;
    }
}
