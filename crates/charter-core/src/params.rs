//! Parameter structures for workshop operations.
//!
//! The observed product addressed lists by name strings and dispatched
//! removals on the runtime type of the key. Here every mutation target is a
//! closed tagged type instead, so the compiler enforces the small set of
//! legal operations per collection kind. These structures carry no framework
//! derives beyond serde and are shared by the CLI layer.

use serde::{Deserialize, Serialize};

use crate::models::{GoalId, ObjectiveId, SwotCategory};

/// Address of a positional, string-valued list in the plan.
///
/// Covers the collections where entries are identified only by position:
/// the goals list and the four SWOT categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListField {
    /// The strategic goals list
    Goals,
    /// One SWOT category
    Swot(SwotCategory),
}

/// Address of a scalar narrative field in the plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeField {
    /// Background and environment narrative
    SelfContext,
    /// The vision statement
    Vision,
    /// Constraints and risks narrative
    Constraints,
}

/// Parameters for creating a new objective under a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddObjective {
    /// Goal the objective belongs to (not validated for liveness)
    pub goal_id: GoalId,
    /// Free-text statement of the measurable target
    pub text: String,
}

/// Parameters for creating a new task under an objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTask {
    /// Objective the task belongs to (not validated for liveness)
    pub objective_id: ObjectiveId,
    /// What needs to be done
    pub description: String,
    /// Who owns the task
    pub responsibility: String,
    /// When it happens and with what resources
    pub timeline: String,
}
