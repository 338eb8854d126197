//! Task model definition.

use serde::{Deserialize, Serialize};

use super::{ObjectiveId, TaskId};

/// An actionable item belonging to exactly one objective.
///
/// Orphaning follows the same policy as objectives: a dead `objective_id`
/// hides the task from derived views without deleting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, unique for the session lifetime
    pub id: TaskId,

    /// The objective this task belongs to
    pub objective_id: ObjectiveId,

    /// What needs to be done
    pub description: String,

    /// Who owns the task
    pub responsibility: String,

    /// When it happens and with what resources
    pub timeline: String,
}
