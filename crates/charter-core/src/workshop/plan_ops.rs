//! Typed plan mutations.
//!
//! None of these operations return errors: a malformed reference (a dead
//! `goal_id` or `objective_id`) is inert by design — the derived views simply
//! show nothing for it — and an out-of-range removal index is a silent no-op.
//! Rejecting empty strings is a front-end concern, not a model concern.

use log::debug;

use super::Workshop;
use crate::models::{Goal, Objective, ObjectiveId, Task, TaskId};
use crate::params::{AddObjective, AddTask, ListField, NarrativeField};

impl Workshop {
    /// Appends an entry to a positional list (goals or a SWOT category).
    pub fn append_list_entry(&mut self, field: ListField, text: impl Into<String>) {
        let text = text.into();
        match field {
            ListField::Goals => {
                let id = self.plan.alloc_goal_id();
                self.plan.goals.push(Goal { id, text });
            }
            ListField::Swot(category) => {
                self.plan.swot.entries_mut(category).push(text);
            }
        }
    }

    /// Removes an entry from a positional list by index.
    ///
    /// No cascade: removing a goal leaves its objectives in place as orphans.
    pub fn remove_list_entry(&mut self, field: ListField, index: usize) {
        match field {
            ListField::Goals => {
                if index < self.plan.goals.len() {
                    let goal = self.plan.goals.remove(index);
                    debug!("removed goal {}; dependents become orphans", goal.id);
                }
            }
            ListField::Swot(category) => {
                let entries = self.plan.swot.entries_mut(category);
                if index < entries.len() {
                    entries.remove(index);
                }
            }
        }
    }

    /// Creates an objective under a goal and returns its fresh id.
    ///
    /// The goal reference is not validated; a dead id yields an orphan.
    pub fn add_objective(&mut self, params: &AddObjective) -> ObjectiveId {
        let id = self.plan.alloc_objective_id();
        self.plan.objectives.push(Objective {
            id,
            goal_id: params.goal_id,
            text: params.text.clone(),
        });
        id
    }

    /// Creates a task under an objective and returns its fresh id.
    ///
    /// The objective reference is not validated; a dead id yields an orphan.
    pub fn add_task(&mut self, params: &AddTask) -> TaskId {
        let id = self.plan.alloc_task_id();
        self.plan.tasks.push(Task {
            id,
            objective_id: params.objective_id,
            description: params.description.clone(),
            responsibility: params.responsibility.clone(),
            timeline: params.timeline.clone(),
        });
        id
    }

    /// Removes an objective by id. Unknown ids are a silent no-op; tasks
    /// under the objective are left in place as orphans.
    pub fn remove_objective(&mut self, id: ObjectiveId) {
        self.plan.objectives.retain(|objective| objective.id != id);
    }

    /// Removes a task by id. Unknown ids are a silent no-op.
    pub fn remove_task(&mut self, id: TaskId) {
        self.plan.tasks.retain(|task| task.id != id);
    }

    /// Replaces one of the scalar narrative fields.
    pub fn set_narrative(&mut self, field: NarrativeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            NarrativeField::SelfContext => self.plan.self_context = value,
            NarrativeField::Vision => self.plan.vision = value,
            NarrativeField::Constraints => self.plan.constraints = value,
        }
    }
}
