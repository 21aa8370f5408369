use backlog_core::types::Backlog;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Render a backlog as an aligned sprint/epic/story table followed by the
/// totals line.
pub fn print_backlog(backlog: &Backlog) {
    let mut epic_width = "EPIC".len();
    let mut story_width = "STORY".len();
    for epic in &backlog.epics {
        epic_width = epic_width.max(epic.title.len());
        for story in &epic.stories {
            story_width = story_width.max(story.title.len());
        }
    }

    println!(
        "{:6}  {:epic_width$}  {:story_width$}  {}",
        "SPRINT", "EPIC", "STORY", "POINTS"
    );
    println!(
        "{}  {}  {}  {}",
        "-".repeat(6),
        "-".repeat(epic_width),
        "-".repeat(story_width),
        "-".repeat(6)
    );

    for epic in &backlog.epics {
        for (i, story) in epic.stories.iter().enumerate() {
            // Epic and sprint only on the first row of each group.
            let (sprint, title) = if i == 0 {
                (
                    epic.sprint.map(|s| s.to_string()).unwrap_or_default(),
                    epic.title.as_str(),
                )
            } else {
                (String::new(), "")
            };
            println!(
                "{:6}  {:epic_width$}  {:story_width$}  {:>6}",
                sprint, title, story.title, story.story_points
            );
        }
    }

    println!();
    println!(
        "{} points across {} epics; {}",
        backlog.total_story_points,
        backlog.epics.len(),
        backlog.timeline_estimate
    );
}
