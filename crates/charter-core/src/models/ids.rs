//! Typed identifiers for plan entities.
//!
//! Goals, objectives, and tasks carry stable generated identifiers instead of
//! positional indices, so deleting or reordering a parent never re-keys its
//! children. Identifiers are allocated from per-collection counters owned by
//! the [`Plan`](crate::models::Plan) and are never reused within a session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a strategic goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub(crate) u64);

/// Unique identifier for a SMART objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveId(pub(crate) u64);

/// Unique identifier for an operational task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub(crate) u64);

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
