//! Pure projections over a plan.
//!
//! Every function here is side-effect-free and recomputed on each read:
//! results are deterministic given the plan's current value, so callers may
//! cache them, but nothing in the crate does. Orphaned entries (a dead parent
//! reference after a deletion) are excluded from every grouping and from the
//! summary table; [`orphaned_objectives`] and [`orphaned_tasks`] make them
//! countable so a front-end can warn about them.

use crate::models::{
    GoalId, Objective, ObjectiveId, Plan, StepConfig, StepId, SummaryRow, Task,
};

/// Objectives belonging to one goal, in insertion order.
pub fn objectives_for_goal(plan: &Plan, goal_id: GoalId) -> Vec<&Objective> {
    plan.objectives
        .iter()
        .filter(|objective| objective.goal_id == goal_id)
        .collect()
}

/// Tasks belonging to one objective, in insertion order.
pub fn tasks_for_objective(plan: &Plan, objective_id: ObjectiveId) -> Vec<&Task> {
    plan.tasks
        .iter()
        .filter(|task| task.objective_id == objective_id)
        .collect()
}

/// Objectives whose goal no longer exists.
pub fn orphaned_objectives(plan: &Plan) -> Vec<&Objective> {
    plan.objectives
        .iter()
        .filter(|objective| plan.goal(objective.goal_id).is_none())
        .collect()
}

/// Tasks whose objective no longer exists.
pub fn orphaned_tasks(plan: &Plan) -> Vec<&Task> {
    plan.tasks
        .iter()
        .filter(|task| plan.objective(task.objective_id).is_none())
        .collect()
}

/// Flattens the goal → objective → task hierarchy into table rows.
///
/// One row per task; an objective with no tasks is still represented by a
/// single row with empty task fields, and a goal with no objectives by a
/// single row with empty objective and task fields. The summary and the
/// exports therefore never silently drop a parent the user entered.
pub fn summary_table(plan: &Plan) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    for goal in &plan.goals {
        let objectives = objectives_for_goal(plan, goal.id);
        if objectives.is_empty() {
            rows.push(SummaryRow {
                goal: goal.text.clone(),
                ..SummaryRow::default()
            });
            continue;
        }

        for objective in objectives {
            let tasks = tasks_for_objective(plan, objective.id);
            if tasks.is_empty() {
                rows.push(SummaryRow {
                    goal: goal.text.clone(),
                    objective: objective.text.clone(),
                    ..SummaryRow::default()
                });
                continue;
            }

            for task in tasks {
                rows.push(SummaryRow {
                    goal: goal.text.clone(),
                    objective: objective.text.clone(),
                    task: task.description.clone(),
                    responsibility: task.responsibility.clone(),
                    timeline: task.timeline.clone(),
                });
            }
        }
    }

    rows
}

/// Whether the data owned by a step has been filled in.
///
/// Cosmetic progress indicator only; navigation is never gated on it. Steps
/// that own no data-entry fields (the summary, pure transitions) report true
/// vacuously.
pub fn step_completion(plan: &Plan, step: &StepConfig) -> bool {
    match step.id {
        StepId::Context => !plan.self_context.is_empty(),
        StepId::Swot => !plan.swot.is_empty(),
        StepId::Vision => !plan.vision.is_empty(),
        StepId::Goals => !plan.goals.is_empty(),
        StepId::Objectives => !plan.objectives.is_empty(),
        StepId::Tasks => !plan.tasks.is_empty(),
        StepId::Constraints => !plan.constraints.is_empty(),
        StepId::Transition | StepId::Summary => true,
    }
}
