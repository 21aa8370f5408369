use std::path::PathBuf;

/// Shared application state passed to all route handlers.
///
/// Holds the database path rather than a connection: handlers open a
/// `Store` per request inside `spawn_blocking`, so no connection is shared
/// across threads.
#[derive(Clone)]
pub struct AppState {
    pub db_path: PathBuf,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
