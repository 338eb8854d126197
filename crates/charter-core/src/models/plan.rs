//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{GoalId, Objective, ObjectiveId, SwotBoard, Task, TaskId};

/// A top-level strategic aim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Stable identifier, unique for the session lifetime
    pub id: GoalId,

    /// Free-text statement of the aim
    pub text: String,
}

/// The complete work plan under construction.
///
/// Owned exclusively by the session: created with all-empty defaults, mutated
/// in place through the workshop's operations, and discarded at process exit.
/// List fields are never null; absence is the empty sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Free-text background narrative for the unit
    pub self_context: String,

    /// The four SWOT category lists
    pub swot: SwotBoard,

    /// Single free-text vision statement
    pub vision: String,

    /// Strategic goals, in insertion order
    pub goals: Vec<Goal>,

    /// SMART objectives, each referencing a goal by id
    pub objectives: Vec<Objective>,

    /// Operational tasks, each referencing an objective by id
    pub tasks: Vec<Task>,

    /// Free-text constraints and risks narrative
    pub constraints: String,

    // Per-collection id counters. Ids are never reused within a session, so a
    // deleted parent's id can never be re-referenced by accident.
    #[serde(skip)]
    next_goal_id: u64,
    #[serde(skip)]
    next_objective_id: u64,
    #[serde(skip)]
    next_task_id: u64,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc_goal_id(&mut self) -> GoalId {
        self.next_goal_id += 1;
        GoalId(self.next_goal_id)
    }

    pub(crate) fn alloc_objective_id(&mut self) -> ObjectiveId {
        self.next_objective_id += 1;
        ObjectiveId(self.next_objective_id)
    }

    pub(crate) fn alloc_task_id(&mut self) -> TaskId {
        self.next_task_id += 1;
        TaskId(self.next_task_id)
    }

    /// Look up a goal by id.
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Look up an objective by id.
    pub fn objective(&self, id: ObjectiveId) -> Option<&Objective> {
        self.objectives.iter().find(|objective| objective.id == id)
    }

    /// Look up a task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}
