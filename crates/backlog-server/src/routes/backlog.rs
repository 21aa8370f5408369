use axum::extract::{Path, State};
use axum::Json;

use backlog_core::engine;
use backlog_core::store::Store;
use backlog_core::types::{Backlog, Epic};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/projects/:id/backlog — generate a backlog from the stored
/// summary and persist it, replacing any previous generation.
pub async fn generate_backlog(
    State(app): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Backlog>, AppError> {
    let db_path = app.db_path.clone();
    let backlog = tokio::task::spawn_blocking(move || {
        let mut store = Store::open(&db_path)?;
        let project = store.get_project(id)?;

        let mut backlog = engine::generate_backlog(&project.summary);
        backlog.epics = store.replace_epics(id, &backlog.epics)?;
        Ok::<_, backlog_core::BacklogError>(backlog)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(
        "generated backlog for project {id}: {} epics, {} points",
        backlog.epics.len(),
        backlog.total_story_points
    );
    Ok(Json(backlog))
}

/// GET /api/projects/:id/backlog — previously generated epics.
pub async fn get_backlog(
    State(app): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Epic>>, AppError> {
    let db_path = app.db_path.clone();
    let epics = tokio::task::spawn_blocking(move || {
        let store = Store::open(&db_path)?;
        store.epics_for_project(id)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(epics))
}
