//! Newtype wrappers for displaying projections of the plan.
//!
//! Each wrapper formats one view as markdown and handles the empty case
//! gracefully, so callers never special-case "nothing entered yet".

use std::fmt;

use crate::models::{Plan, SummaryRow, SwotBoard, SwotCategory};
use crate::views;

/// Markdown table over the flattened goal/objective/task rows.
///
/// # Examples
///
/// ```rust
/// use charter_core::display::SummaryTable;
/// use charter_core::models::Plan;
///
/// let plan = Plan::new();
/// let table = SummaryTable::from_plan(&plan);
/// assert!(table.is_empty());
/// assert!(format!("{}", table).contains("No goals"));
/// ```
pub struct SummaryTable(pub Vec<SummaryRow>);

impl SummaryTable {
    /// Builds the table rows from the plan's current value.
    pub fn from_plan(plan: &Plan) -> Self {
        Self(views::summary_table(plan))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SummaryRow> {
        self.0.iter()
    }
}

// Pipe characters inside a cell would break the table row.
fn cell(text: &str) -> String {
    text.replace('|', "/")
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No goals defined yet.");
        }

        writeln!(f, "| Goal | Objective | Task | Responsibility | Timeline |")?;
        writeln!(f, "|---|---|---|---|---|")?;
        for row in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                cell(&row.goal),
                cell(&row.objective),
                cell(&row.task),
                cell(&row.responsibility),
                cell(&row.timeline),
            )?;
        }
        Ok(())
    }
}

/// Hierarchical goal → objective → task outline for the entry screens.
///
/// Goals and objectives are numbered by display position (1-based), which is
/// also how the CLI addresses them in commands.
pub struct GoalOutline<'a>(pub &'a Plan);

impl fmt::Display for GoalOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        if plan.goals.is_empty() {
            return writeln!(f, "No goals defined yet.");
        }

        for (goal_position, goal) in plan.goals.iter().enumerate() {
            writeln!(f, "### {}. {}", goal_position + 1, goal)?;
            writeln!(f)?;

            let objectives = views::objectives_for_goal(plan, goal.id);
            if objectives.is_empty() {
                writeln!(f, "No objectives under this goal yet.")?;
                writeln!(f)?;
                continue;
            }

            for (objective_position, objective) in objectives.iter().enumerate() {
                writeln!(
                    f,
                    "{}.{} {}",
                    goal_position + 1,
                    objective_position + 1,
                    objective
                )?;
                for task in views::tasks_for_objective(plan, objective.id) {
                    writeln!(f, "- {task}")?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/// The four SWOT category lists as markdown sections.
pub struct SwotGrid<'a>(pub &'a SwotBoard);

impl fmt::Display for SwotGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in SwotCategory::ALL {
            writeln!(f, "### {}", category.label())?;
            writeln!(f)?;
            let entries = self.0.entries(category);
            if entries.is_empty() {
                writeln!(f, "No entries yet.")?;
            } else {
                for entry in entries {
                    writeln!(f, "- {entry}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
