//! Objective model definition.

use serde::{Deserialize, Serialize};

use super::{GoalId, ObjectiveId};

/// A SMART-style measurable target belonging to exactly one goal.
///
/// An objective whose `goal_id` references no live goal is *orphaned*: it
/// stays in the collection but is excluded from every derived view. Deletions
/// never cascade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Objective {
    /// Stable identifier, unique for the session lifetime
    pub id: ObjectiveId,

    /// The goal this objective belongs to
    pub goal_id: GoalId,

    /// Free-text statement of the measurable target
    pub text: String,
}
