//! Terminal rendering for the list, history and dashboard views.
//!
//! Pure string builders so the output is testable; the binary just prints
//! the result.

use ideaflow_core::dashboard::{chart_color, StatusCount};
use ideaflow_core::Idea;

/// Render the idea list. The idea whose history panel is open (if any)
/// gets its commit trail inlined below it.
pub fn render_ideas(ideas: &[Idea], expanded: Option<i64>) -> String {
    if ideas.is_empty() {
        return "No ideas yet. Add one with `ideaflow add`.".to_string();
    }

    let mut out = String::new();
    for idea in ideas {
        out.push_str(&format!(
            "#{:<4} [{:<6}] {} ({})\n",
            idea.id,
            idea.priority.as_str(),
            idea.text,
            idea.status
        ));
        if expanded == Some(idea.id) {
            out.push_str(&render_history(idea));
        }
    }
    out.pop();
    out
}

/// Render an idea's commit history, oldest first.
pub fn render_history(idea: &Idea) -> String {
    let mut out = String::from("  History:\n");
    for commit in &idea.commits {
        out.push_str(&format!(
            "    {}: {}\n",
            commit.timestamp.format("%Y-%m-%d %H:%M"),
            commit.status_change
        ));
        if let Some(comment) = &commit.comment {
            out.push_str(&format!("      \"{comment}\"\n"));
        }
    }
    out
}

/// Render the dashboard as labelled bars, one per status that appears.
pub fn render_dashboard(counts: &[StatusCount]) -> String {
    if counts.is_empty() {
        return "No ideas to chart yet. Start by adding some!".to_string();
    }

    let mut out = String::new();
    for entry in counts {
        out.push_str(&format!(
            "{:<12} {} {} ({})\n",
            entry.status.as_str(),
            "#".repeat(entry.count as usize),
            entry.count,
            chart_color(entry.status)
        ));
    }
    out.pop();
    out
}
