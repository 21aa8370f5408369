use thiserror::Error;

#[derive(Debug, Error)]
pub enum BacklogError {
    #[error("project not found: {0}")]
    ProjectNotFound(i64),

    #[error("project summary is empty")]
    EmptySummary,

    #[error("invalid project: {0}")]
    InvalidProject(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BacklogError>;
