use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::{BacklogError, Result};
use crate::types::{Epic, Project, Story};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// `epics.stories` holds the JSON-encoded story list; everything the list
/// view needs (title, totals, sprint) is flattened into columns.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS projects (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    summary     TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS epics (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id          INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    title               TEXT NOT NULL,
    stories             TEXT NOT NULL,
    total_story_points  INTEGER NOT NULL,
    sprint              INTEGER,
    created_at          TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_epics_project ON epics(project_id);
";

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// SQLite-backed store for projects and their generated epics.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the database at `path`, creating parent directories
    /// and the schema as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::bootstrap(Connection::open(path)?)
    }

    /// In-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    pub fn create_project(&self, name: &str, summary: &str) -> Result<Project> {
        if name.trim().is_empty() {
            return Err(BacklogError::InvalidProject("name is empty".into()));
        }
        if summary.trim().is_empty() {
            return Err(BacklogError::InvalidProject("summary is empty".into()));
        }

        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO projects (name, summary, created_at) VALUES (?1, ?2, ?3)",
            params![name, summary, created_at.to_rfc3339()],
        )?;
        Ok(Project {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            summary: summary.to_string(),
            created_at,
        })
    }

    pub fn get_project(&self, id: i64) -> Result<Project> {
        self.conn
            .query_row(
                "SELECT id, name, summary, created_at FROM projects WHERE id = ?1",
                params![id],
                row_to_project,
            )
            .optional()?
            .ok_or(BacklogError::ProjectNotFound(id))
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, summary, created_at FROM projects ORDER BY id")?;
        let rows = stmt.query_map([], row_to_project)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    // -----------------------------------------------------------------------
    // Epics
    // -----------------------------------------------------------------------

    /// Replace the stored backlog for a project with `epics`, assigning row
    /// ids and `project_id` to the returned copies. Regeneration overwrites
    /// the previous backlog rather than accumulating epics.
    pub fn replace_epics(&mut self, project_id: i64, epics: &[Epic]) -> Result<Vec<Epic>> {
        self.get_project(project_id)?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM epics WHERE project_id = ?1", params![project_id])?;

        let created_at = Utc::now().to_rfc3339();
        let mut stored = Vec::with_capacity(epics.len());
        for epic in epics {
            let stories = serde_json::to_string(&epic.stories)?;
            tx.execute(
                "INSERT INTO epics (project_id, title, stories, total_story_points, sprint, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    project_id,
                    epic.title,
                    stories,
                    epic.total_story_points,
                    epic.sprint,
                    created_at,
                ],
            )?;
            let mut epic = epic.clone();
            epic.id = Some(tx.last_insert_rowid());
            epic.project_id = Some(project_id);
            stored.push(epic);
        }
        tx.commit()?;
        Ok(stored)
    }

    pub fn epics_for_project(&self, project_id: i64) -> Result<Vec<Epic>> {
        self.get_project(project_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, title, stories, total_story_points, sprint
             FROM epics WHERE project_id = ?1 ORDER BY sprint, id",
        )?;
        let rows = stmt.query_map(params![project_id], |row| {
            let stories_json: String = row.get(3)?;
            let stories: Vec<Story> = serde_json::from_str(&stories_json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            Ok(Epic {
                id: Some(row.get(0)?),
                project_id: Some(row.get(1)?),
                title: row.get(2)?,
                stories,
                total_story_points: row.get(4)?,
                sprint: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn row_to_project(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    let created_at: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        summary: row.get(2)?,
        created_at,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
