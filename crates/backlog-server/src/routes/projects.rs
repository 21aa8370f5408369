use axum::extract::{Path, State};
use axum::Json;

use backlog_core::store::Store;
use backlog_core::types::Project;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/projects — list all projects.
pub async fn list_projects(
    State(app): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    let db_path = app.db_path.clone();
    let projects = tokio::task::spawn_blocking(move || {
        let store = Store::open(&db_path)?;
        store.list_projects()
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(projects))
}

/// GET /api/projects/:id — project detail.
pub async fn get_project(
    State(app): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    let db_path = app.db_path.clone();
    let project = tokio::task::spawn_blocking(move || {
        let store = Store::open(&db_path)?;
        store.get_project(id)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(project))
}

#[derive(serde::Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    pub summary: String,
}

/// POST /api/projects — register a new project.
pub async fn create_project(
    State(app): State<AppState>,
    Json(body): Json<CreateProjectBody>,
) -> Result<Json<Project>, AppError> {
    let db_path = app.db_path.clone();
    let project = tokio::task::spawn_blocking(move || {
        let store = Store::open(&db_path)?;
        store.create_project(&body.name, &body.summary)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!("created project '{}' (id {})", project.name, project.id);
    Ok(Json(project))
}
