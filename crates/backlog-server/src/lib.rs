pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(db_path: PathBuf) -> Router {
    let app_state = state::AppState::new(db_path);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Projects
        .route("/api/projects", get(routes::projects::list_projects))
        .route("/api/projects", post(routes::projects::create_project))
        .route("/api/projects/{id}", get(routes::projects::get_project))
        // Backlog generation
        .route(
            "/api/projects/{id}/backlog",
            post(routes::backlog::generate_backlog),
        )
        .route(
            "/api/projects/{id}/backlog",
            get(routes::backlog::get_backlog),
        )
        .fallback(embed::static_handler)
        .layer(cors)
        .with_state(app_state)
}

/// Start the backlog web server.
pub async fn serve(db_path: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(db_path, listener, open_browser).await
}

/// Start the backlog web server on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read the
/// actual port before starting (useful when `port = 0` and the OS picks a
/// free port).
pub async fn serve_on(
    db_path: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(db_path);

    tracing::info!("backlog server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
