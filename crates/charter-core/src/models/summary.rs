//! Summary row type for the flattened plan table.

use serde::{Deserialize, Serialize};

/// One row of the flattened goal/objective/task table.
///
/// Produced by [`views::summary_table`](crate::views::summary_table). A
/// childless objective yields a row with empty task fields; a childless goal
/// yields a row with empty objective and task fields, so every parent the
/// user entered is represented at least once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRow {
    pub goal: String,
    pub objective: String,
    pub task: String,
    pub responsibility: String,
    pub timeline: String,
}

impl SummaryRow {
    /// True when the row only carries the goal text.
    pub fn is_goal_placeholder(&self) -> bool {
        self.objective.is_empty() && self.task.is_empty()
    }

    /// True when the row carries goal and objective text but no task.
    pub fn is_objective_placeholder(&self) -> bool {
        !self.objective.is_empty() && self.task.is_empty()
    }
}
