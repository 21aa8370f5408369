use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Story
// ---------------------------------------------------------------------------

/// An atomic unit of work with a relative effort estimate. Points are drawn
/// from the fixed scale [1, 2, 3, 5, 8, 13].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub story_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Story {
    pub fn new(title: impl Into<String>, story_points: u32) -> Self {
        Self {
            title: title.into(),
            story_points,
            description: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Epic
// ---------------------------------------------------------------------------

/// A grouping of related stories, assigned to exactly one sprint.
///
/// `id` and `project_id` stay unset during generation; the store fills them
/// in when the epic is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    pub title: String,
    pub stories: Vec<Story>,
    pub total_story_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<u32>,
}

// ---------------------------------------------------------------------------
// Backlog
// ---------------------------------------------------------------------------

/// A full generated backlog. Built fresh on every generation call and not
/// mutated afterwards; `total_story_points` and `timeline_estimate` are
/// derived from the epics at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlog {
    pub epics: Vec<Epic>,
    pub total_story_points: u32,
    pub estimated_sprints: u32,
    pub timeline_estimate: String,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
