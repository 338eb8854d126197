//! End-to-end tests driving a full workshop session against a scripted
//! gateway.

mod common;

use std::sync::atomic::Ordering;

use charter_core::{
    params::{AddObjective, AddTask, ListField, NarrativeField},
    views, ErrorKind, StepId, SwotCategory, WorkshopError,
};
use common::{counted_workshop, scripted_workshop};

#[tokio::test]
async fn full_session_builds_plan_and_fetches_report_once() {
    let (mut workshop, calls) = counted_workshop(vec![Ok("# Master Plan\n\nNarrative".to_string())]);
    workshop.begin_session();

    // CONTEXT
    workshop.set_narrative(NarrativeField::SelfContext, "Rising demand for services");
    workshop.advance();

    // SWOT
    workshop.append_list_entry(ListField::Swot(SwotCategory::Strengths), "Experienced team");
    workshop.append_list_entry(ListField::Swot(SwotCategory::Threats), "Budget cuts");
    workshop.advance();

    // VISION
    workshop.set_narrative(NarrativeField::Vision, "A leading service");
    workshop.advance();

    // GOALS
    workshop.append_list_entry(ListField::Goals, "Reduce wait times");
    let goal_id = workshop.plan().goals[0].id;
    workshop.advance();

    // OBJECTIVES
    let objective_id = workshop.add_objective(&AddObjective {
        goal_id,
        text: "Cut average wait to 5 days by Q2".to_string(),
    });
    workshop.advance();

    // TASKS
    workshop.add_task(&AddTask {
        objective_id,
        description: "Audit current intake process".to_string(),
        responsibility: "Intake coordinator".to_string(),
        timeline: "Q1".to_string(),
    });
    workshop.advance();

    // CONSTRAINTS
    workshop.set_narrative(NarrativeField::Constraints, "External budget may slip");
    let arrival = workshop.advance();

    // SUMMARY: arrival signals the final-integration call.
    assert_eq!(workshop.current_step().id, StepId::Summary);
    assert!(arrival.wants_final_report);
    workshop.request_final_report().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(workshop
        .session()
        .final_report()
        .unwrap()
        .contains("Master Plan"));

    // Every data step reports complete.
    for step in workshop.registry().iter() {
        assert!(views::step_completion(workshop.plan(), step));
    }

    // Revisiting the summary does not refetch.
    workshop.retreat();
    let arrival = workshop.advance();
    assert!(!arrival.wants_final_report);
    workshop.request_final_report().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The summary table holds exactly the entered hierarchy.
    let rows = views::summary_table(workshop.plan());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].goal, "Reduce wait times");
    assert_eq!(rows[0].objective, "Cut average wait to 5 days by Q2");
    assert_eq!(rows[0].task, "Audit current intake process");
}

#[tokio::test]
async fn advisory_failures_keep_the_wizard_usable() {
    let mut workshop = scripted_workshop(vec![
        Err(WorkshopError::configuration("missing key")),
        Err(WorkshopError::Service {
            status: 502,
            message: "bad gateway".to_string(),
        }),
    ]);
    workshop.begin_session();

    // First failure: configuration class.
    workshop.request_step_advisory().await.unwrap();
    let error = workshop.session().last_error().unwrap();
    assert_eq!(error.kind, ErrorKind::Configuration);
    assert!(!workshop.session().is_advisory_in_flight());

    // Data entry and navigation keep working.
    workshop.set_narrative(NarrativeField::SelfContext, "Background");
    workshop.advance();

    // Second failure: service class, distinct message.
    workshop.request_step_advisory().await.unwrap();
    let error = workshop.session().last_error().unwrap();
    assert_eq!(error.kind, ErrorKind::Service);
    assert!(!workshop.session().is_advisory_in_flight());

    // A later success replaces the error.
    workshop.request_step_advisory().await.unwrap();
    assert!(workshop.session().last_error().is_none());
    assert_eq!(
        workshop.session().step_advisory(),
        Some("scripted advisory")
    );
}

#[tokio::test]
async fn advisory_is_scoped_to_the_step_it_was_requested_on() {
    let mut workshop = scripted_workshop(vec![Ok("context advice".to_string())]);
    workshop.begin_session();

    workshop.request_step_advisory().await.unwrap();
    assert_eq!(workshop.session().step_advisory(), Some("context advice"));

    // Navigating clears it; nothing from the old step leaks forward.
    workshop.advance();
    assert_eq!(workshop.session().step_advisory(), None);
}

#[test]
fn orphan_policy_is_preserve_and_hide() {
    let mut workshop = scripted_workshop(vec![]);
    workshop.append_list_entry(ListField::Goals, "Only goal");
    let goal_id = workshop.plan().goals[0].id;
    workshop.add_objective(&AddObjective {
        goal_id,
        text: "Dependent objective".to_string(),
    });

    workshop.remove_list_entry(ListField::Goals, 0);

    // The objective survives the goal's deletion but is excluded from every
    // grouping over live goals.
    assert_eq!(workshop.plan().objectives.len(), 1);
    for goal in &workshop.plan().goals {
        assert!(views::objectives_for_goal(workshop.plan(), goal.id).is_empty());
    }
    assert_eq!(views::orphaned_objectives(workshop.plan()).len(), 1);
    assert!(views::summary_table(workshop.plan()).is_empty());
}
