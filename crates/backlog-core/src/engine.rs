use crate::error::{BacklogError, Result};
use crate::keywords::extract_keywords;
use crate::templates::select_epic_names;
use crate::types::{Backlog, Epic, Story};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Assumed team throughput in story points per sprint.
pub const VELOCITY: u32 = 21;

/// Sprint length in weeks.
pub const SPRINT_WEEKS: u32 = 2;

/// Story point scale, ascending effort.
const POINT_SCALE: [u32; 6] = [1, 2, 3, 5, 8, 13];

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Build a backlog from a project summary.
///
/// Deterministic: the same summary always yields the same backlog. The only
/// error is a blank summary; everything downstream is pure string and
/// integer work.
pub fn synthesize(summary: &str) -> Result<Backlog> {
    if summary.trim().is_empty() {
        return Err(BacklogError::EmptySummary);
    }

    let epic_names = select_epic_names(summary);
    let mut epics = Vec::with_capacity(epic_names.len());

    for (i, name) in epic_names.iter().enumerate() {
        let keywords = extract_keywords(summary, name);

        let mut stories: Vec<Story> = keywords
            .iter()
            .take(3)
            .enumerate()
            .map(|(j, keyword)| {
                Story::new(
                    format!("{keyword} implementation"),
                    POINT_SCALE[j.min(POINT_SCALE.len() - 1)],
                )
            })
            .collect();
        stories.push(Story::new(format!("{name} additional features"), 5));

        let total_story_points = stories.iter().map(|s| s.story_points).sum();
        epics.push(Epic {
            id: None,
            project_id: None,
            title: (*name).to_string(),
            stories,
            total_story_points,
            sprint: Some(i as u32 + 1),
        });
    }

    let total_story_points: u32 = epics.iter().map(|e| e.total_story_points).sum();
    let estimated_sprints = (total_story_points / VELOCITY + 1).max(3);
    let weeks = estimated_sprints * SPRINT_WEEKS;

    Ok(Backlog {
        epics,
        total_story_points,
        estimated_sprints,
        timeline_estimate: format!(
            "{weeks} weeks ({estimated_sprints} sprints × {SPRINT_WEEKS} weeks at {VELOCITY} points/sprint)"
        ),
    })
}

// ---------------------------------------------------------------------------
// Canned fallback
// ---------------------------------------------------------------------------

/// Fixed backlog used when synthesis fails. Ignores the summary entirely.
pub fn mock_backlog() -> Backlog {
    let seed: [(&str, u32, &[(&str, u32)]); 3] = [
        (
            "User Authentication & Management",
            1,
            &[
                ("User registration system", 5),
                ("Login/logout functionality", 3),
                ("Password reset flow", 5),
                ("Profile management", 3),
            ],
        ),
        (
            "Core Features & Functionality",
            2,
            &[
                ("Main feature implementation", 8),
                ("Data validation and processing", 5),
                ("Search and filter capabilities", 5),
                ("Export functionality", 3),
            ],
        ),
        (
            "UI/UX & Integration",
            3,
            &[
                ("Responsive design improvements", 5),
                ("API integration", 8),
                ("Error handling and feedback", 3),
            ],
        ),
    ];

    let epics: Vec<Epic> = seed
        .iter()
        .map(|(title, sprint, stories)| {
            let stories: Vec<Story> = stories
                .iter()
                .map(|(story_title, points)| Story::new(*story_title, *points))
                .collect();
            let total_story_points = stories.iter().map(|s| s.story_points).sum();
            Epic {
                id: None,
                project_id: None,
                title: (*title).to_string(),
                stories,
                total_story_points,
                sprint: Some(*sprint),
            }
        })
        .collect();

    let total_story_points = epics.iter().map(|e| e.total_story_points).sum();
    Backlog {
        epics,
        total_story_points,
        estimated_sprints: 3,
        timeline_estimate: format!("{} weeks (3 sprints × 2 weeks each)", 3 * SPRINT_WEEKS),
    }
}

// ---------------------------------------------------------------------------
// Guarded boundary
// ---------------------------------------------------------------------------

/// Generate a backlog, falling back to the canned one if synthesis fails.
/// Callers always receive a structured result.
pub fn generate_backlog(summary: &str) -> Backlog {
    match synthesize(summary) {
        Ok(backlog) => backlog,
        Err(e) => {
            tracing::warn!("backlog synthesis failed, using canned fallback: {e}");
            mock_backlog()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesize_yields_four_epics() {
        let backlog = synthesize("A web platform for booking tennis courts").unwrap();
        assert_eq!(backlog.epics.len(), 4);
    }

    #[test]
    fn epic_totals_match_story_sums() {
        let backlog = synthesize("Build an ecommerce store with shopping cart and checkout")
            .unwrap();
        for epic in &backlog.epics {
            let sum: u32 = epic.stories.iter().map(|s| s.story_points).sum();
            assert_eq!(epic.total_story_points, sum);
        }
        let total: u32 = backlog.epics.iter().map(|e| e.total_story_points).sum();
        assert_eq!(backlog.total_story_points, total);
    }

    #[test]
    fn sprints_are_sequential_and_one_per_epic() {
        let backlog = synthesize("Simple chatbot support assistant").unwrap();
        let sprints: Vec<u32> = backlog.epics.iter().filter_map(|e| e.sprint).collect();
        assert_eq!(sprints, vec![1, 2, 3, 4]);
        assert_eq!(backlog.epics[2].sprint, Some(3));
    }

    #[test]
    fn estimated_sprints_has_floor_of_three() {
        let backlog = synthesize("xyz qqq wvvv").unwrap();
        assert!(backlog.estimated_sprints >= 3);
        assert_eq!(
            backlog.estimated_sprints,
            (backlog.total_story_points / VELOCITY + 1).max(3)
        );
    }

    #[test]
    fn timeline_follows_sprint_estimate() {
        let backlog = synthesize("Fitness tracker with workout plans").unwrap();
        let weeks = backlog.estimated_sprints * SPRINT_WEEKS;
        assert!(backlog.timeline_estimate.starts_with(&format!("{weeks} weeks")));
        assert!(backlog.timeline_estimate.contains(&format!("{VELOCITY} points/sprint")));
    }

    #[test]
    fn generated_epics_carry_no_ids() {
        let backlog = synthesize("A web dashboard for energy usage").unwrap();
        for epic in &backlog.epics {
            assert_eq!(epic.id, None);
            assert_eq!(epic.project_id, None);
        }
    }

    #[test]
    fn identical_summaries_produce_identical_backlogs() {
        let summary = "An AI service with prediction and recommendation APIs";
        let a = serde_json::to_string(&synthesize(summary).unwrap()).unwrap();
        let b = serde_json::to_string(&synthesize(summary).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn each_epic_ends_with_the_extra_story() {
        let backlog = synthesize("Build an ecommerce store with shopping cart and checkout")
            .unwrap();
        for epic in &backlog.epics {
            let last = epic.stories.last().unwrap();
            assert_eq!(last.title, format!("{} additional features", epic.title));
            assert_eq!(last.story_points, 5);
        }
    }

    #[test]
    fn blank_summary_is_rejected() {
        assert!(matches!(
            synthesize("   "),
            Err(BacklogError::EmptySummary)
        ));
    }

    #[test]
    fn mock_backlog_is_internally_consistent() {
        let backlog = mock_backlog();
        assert_eq!(backlog.epics.len(), 3);
        assert_eq!(backlog.estimated_sprints, 3);
        for epic in &backlog.epics {
            let sum: u32 = epic.stories.iter().map(|s| s.story_points).sum();
            assert_eq!(epic.total_story_points, sum);
        }
        let total: u32 = backlog.epics.iter().map(|e| e.total_story_points).sum();
        assert_eq!(backlog.total_story_points, total);
    }

    #[test]
    fn guarded_boundary_falls_back_on_blank_input() {
        let backlog = generate_backlog("");
        assert_eq!(backlog.epics.len(), 3);
        assert_eq!(backlog, mock_backlog());
    }
}
