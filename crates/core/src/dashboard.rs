//! Dashboard aggregation: ideas grouped by status for the chart view.

use serde::Serialize;

use crate::idea::{Idea, IdeaStatus};

/// One chart data point: a status and how many ideas currently hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: IdeaStatus,
    pub count: u64,
}

/// Group ideas by status and count occurrences.
///
/// Emits one data point per status that actually appears, in
/// first-appearance order. Statuses with zero ideas produce no entry at
/// all rather than an explicit zero count; the chart simply omits the bar.
pub fn status_counts(ideas: &[Idea]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for idea in ideas {
        match counts.iter_mut().find(|c| c.status == idea.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: idea.status,
                count: 1,
            }),
        }
    }
    counts
}

/// Fixed chart color per status.
pub fn chart_color(status: IdeaStatus) -> &'static str {
    match status {
        IdeaStatus::New => "#3B82F6",
        IdeaStatus::InProgress => "#F59E0B",
        IdeaStatus::Completed => "#10B981",
    }
}
