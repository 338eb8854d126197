//! Tests for the workshop container.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::*;
use crate::error::{ErrorKind, Result as CoreResult, WorkshopError};
use crate::gateway::AdvisoryGateway;
use crate::models::{
    Plan, SkipRule, StepConfig, StepId, StepRegistry, SwotCategory,
};
use crate::params::{AddObjective, AddTask, ListField, NarrativeField};
use crate::workshop::advisory::EMPTY_RESPONSE_PLACEHOLDER;

/// Gateway that replays a scripted sequence of outcomes and counts calls.
struct ScriptedGateway {
    script: Mutex<Vec<CoreResult<String>>>,
    calls: AtomicUsize,
}

impl ScriptedGateway {
    fn new(script: Vec<CoreResult<String>>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    fn next(&self) -> CoreResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().expect("script lock");
        if script.is_empty() {
            Ok("advisory text".to_string())
        } else {
            script.remove(0)
        }
    }
}

#[async_trait]
impl AdvisoryGateway for ScriptedGateway {
    async fn step_advisory(&self, _step: StepId, _plan: &Plan) -> CoreResult<String> {
        self.next()
    }

    async fn final_integration(&self, _plan: &Plan) -> CoreResult<String> {
        self.next()
    }
}

fn test_workshop() -> Workshop {
    WorkshopBuilder::new()
        .with_gateway(Box::new(ScriptedGateway::new(vec![])))
        .build()
}

fn workshop_with_script(script: Vec<CoreResult<String>>) -> Workshop {
    WorkshopBuilder::new()
        .with_gateway(Box::new(ScriptedGateway::new(script)))
        .build()
}

// ---------------------------------------------------------------------------
// Plan operations
// ---------------------------------------------------------------------------

#[test]
fn append_and_remove_preserve_order_and_counts() {
    let mut workshop = test_workshop();
    for text in ["first", "second", "third"] {
        workshop.append_list_entry(ListField::Goals, text);
    }
    assert_eq!(workshop.plan().goals.len(), 3);

    workshop.remove_list_entry(ListField::Goals, 1);
    let remaining: Vec<&str> = workshop
        .plan()
        .goals
        .iter()
        .map(|goal| goal.text.as_str())
        .collect();
    assert_eq!(remaining, vec!["first", "third"]);

    // Out-of-range removal is a silent no-op.
    workshop.remove_list_entry(ListField::Goals, 10);
    assert_eq!(workshop.plan().goals.len(), 2);
}

#[test]
fn swot_entries_land_in_their_category() {
    let mut workshop = test_workshop();
    workshop.append_list_entry(ListField::Swot(SwotCategory::Strengths), "strong team");
    workshop.append_list_entry(ListField::Swot(SwotCategory::Threats), "budget cuts");
    workshop.append_list_entry(ListField::Swot(SwotCategory::Threats), "staff turnover");

    assert_eq!(workshop.plan().swot.strengths, vec!["strong team"]);
    assert_eq!(
        workshop.plan().swot.threats,
        vec!["budget cuts", "staff turnover"]
    );

    workshop.remove_list_entry(ListField::Swot(SwotCategory::Threats), 0);
    assert_eq!(workshop.plan().swot.threats, vec!["staff turnover"]);
    assert_eq!(workshop.plan().swot.strengths.len(), 1);
}

#[test]
fn duplicates_are_allowed_in_positional_lists() {
    let mut workshop = test_workshop();
    workshop.append_list_entry(ListField::Goals, "same");
    workshop.append_list_entry(ListField::Goals, "same");
    assert_eq!(workshop.plan().goals.len(), 2);
    assert_ne!(workshop.plan().goals[0].id, workshop.plan().goals[1].id);
}

#[test]
fn goal_removal_orphans_dependents_without_cascade() {
    let mut workshop = test_workshop();
    workshop.append_list_entry(ListField::Goals, "Reduce wait times");
    let goal_id = workshop.plan().goals[0].id;

    let objective_id = workshop.add_objective(&AddObjective {
        goal_id,
        text: "Cut average wait to 5 days".to_string(),
    });
    workshop.add_task(&AddTask {
        objective_id,
        description: "Audit intake".to_string(),
        responsibility: String::new(),
        timeline: String::new(),
    });

    workshop.remove_list_entry(ListField::Goals, 0);

    // Nothing cascaded; the objective is preserved but orphaned.
    assert_eq!(workshop.plan().objectives.len(), 1);
    assert_eq!(workshop.plan().tasks.len(), 1);
    assert_eq!(crate::views::orphaned_objectives(workshop.plan()).len(), 1);
    assert!(crate::views::summary_table(workshop.plan()).is_empty());
}

#[test]
fn objective_removal_orphans_its_tasks() {
    let mut workshop = test_workshop();
    workshop.append_list_entry(ListField::Goals, "A goal");
    let goal_id = workshop.plan().goals[0].id;
    let objective_id = workshop.add_objective(&AddObjective {
        goal_id,
        text: "An objective".to_string(),
    });
    workshop.add_task(&AddTask {
        objective_id,
        description: "A task".to_string(),
        responsibility: String::new(),
        timeline: String::new(),
    });

    workshop.remove_objective(objective_id);

    assert!(workshop.plan().objectives.is_empty());
    assert_eq!(workshop.plan().tasks.len(), 1);
    assert_eq!(crate::views::orphaned_tasks(workshop.plan()).len(), 1);
}

#[test]
fn set_narrative_replaces_scalar_fields() {
    let mut workshop = test_workshop();
    workshop.set_narrative(NarrativeField::SelfContext, "background");
    workshop.set_narrative(NarrativeField::Vision, "a vision");
    workshop.set_narrative(NarrativeField::Constraints, "a constraint");
    workshop.set_narrative(NarrativeField::Vision, "a sharper vision");

    assert_eq!(workshop.plan().self_context, "background");
    assert_eq!(workshop.plan().vision, "a sharper vision");
    assert_eq!(workshop.plan().constraints, "a constraint");
}

// ---------------------------------------------------------------------------
// Step sequencer
// ---------------------------------------------------------------------------

#[test]
fn retreat_is_a_noop_at_the_initial_step() {
    let mut workshop = test_workshop();
    let arrival = workshop.retreat();
    assert!(!arrival.moved);
    assert_eq!(workshop.session().current_step(), 0);
}

#[test]
fn advance_is_a_noop_at_the_terminal_step() {
    let mut workshop = test_workshop();
    let terminal = workshop.registry().terminal_index();
    for _ in 0..terminal {
        workshop.advance();
    }
    assert_eq!(workshop.session().current_step(), terminal);

    let arrival = workshop.advance();
    assert!(!arrival.moved);
    assert_eq!(workshop.session().current_step(), terminal);
}

#[test]
fn jump_to_rejects_forward_and_same_step_targets() {
    let mut workshop = test_workshop();
    workshop.advance();
    workshop.advance();
    let current = workshop.session().current_step();

    for target in [current, current + 1, current + 5] {
        let err = workshop.jump_to(target).unwrap_err();
        assert!(matches!(err, WorkshopError::InvalidInput { .. }));
        assert_eq!(workshop.session().current_step(), current);
    }

    let arrival = workshop.jump_to(0).expect("backward jump allowed");
    assert!(arrival.moved);
    assert_eq!(workshop.session().current_step(), 0);
}

#[test]
fn navigation_clears_the_step_advisory() {
    let mut workshop = test_workshop();
    workshop.session.step_advisory = "old suggestion".to_string();

    workshop.advance();
    assert_eq!(workshop.session().step_advisory(), None);
}

#[test]
fn interstitial_opens_on_arrival_and_is_dismissible() {
    let mut workshop = test_workshop();
    let vision_index = workshop.registry().position(StepId::Vision).unwrap();

    // Walk forward to the vision step.
    let mut arrival = workshop.advance();
    while workshop.session().current_step() < vision_index {
        arrival = workshop.advance();
    }
    assert!(arrival.interstitial_shown);
    assert!(workshop.session().is_interstitial_open());

    workshop.dismiss_interstitial();
    assert!(!workshop.session().is_interstitial_open());

    workshop.reopen_interstitial();
    assert!(workshop.session().is_interstitial_open());

    // A step without a reflection cannot reopen one.
    workshop.retreat();
    workshop.reopen_interstitial();
    assert!(!workshop.session().is_interstitial_open());
}

#[test]
fn transition_step_always_skip() {
    let registry = StepRegistry::from_steps(vec![
        StepConfig::new(StepId::Context, "Context"),
        StepConfig::transition("Take a breath", SkipRule::Always),
        StepConfig::new(StepId::Vision, "Vision"),
        StepConfig::new(StepId::Summary, "Summary"),
    ]);
    let mut workshop = WorkshopBuilder::new()
        .with_registry(registry)
        .with_gateway(Box::new(ScriptedGateway::new(vec![])))
        .build();

    // Forward navigation never lands on the transition step.
    let arrival = workshop.advance();
    assert_eq!(arrival.step, 2);

    // Walking back still shows it.
    let arrival = workshop.retreat();
    assert_eq!(arrival.step, 1);
}

#[test]
fn transition_step_skips_after_first_visit() {
    let registry = StepRegistry::from_steps(vec![
        StepConfig::new(StepId::Context, "Context"),
        StepConfig::transition("Take a breath", SkipRule::AfterFirstVisit),
        StepConfig::new(StepId::Vision, "Vision"),
        StepConfig::new(StepId::Summary, "Summary"),
    ]);
    let mut workshop = WorkshopBuilder::new()
        .with_registry(registry)
        .with_gateway(Box::new(ScriptedGateway::new(vec![])))
        .build();

    // First pass lands on the transition step.
    let arrival = workshop.advance();
    assert_eq!(arrival.step, 1);
    let arrival = workshop.advance();
    assert_eq!(arrival.step, 2);

    // Second pass skips it.
    workshop.jump_to(0).unwrap();
    let arrival = workshop.advance();
    assert_eq!(arrival.step, 2);
}

#[test]
fn summary_arrival_signals_final_report_until_cached() {
    let mut workshop = test_workshop();
    let terminal = workshop.registry().terminal_index();

    let mut arrival = workshop.advance();
    while workshop.session().current_step() < terminal {
        arrival = workshop.advance();
    }
    assert!(arrival.wants_final_report);

    // Re-entry with a cached report must not re-signal.
    workshop.session.final_report = "cached narrative".to_string();
    workshop.retreat();
    let arrival = workshop.advance();
    assert_eq!(arrival.step, terminal);
    assert!(!arrival.wants_final_report);

    // Without a cache (e.g. the first call failed), re-entry signals again.
    workshop.session.final_report.clear();
    workshop.retreat();
    let arrival = workshop.advance();
    assert!(arrival.wants_final_report);
}

// ---------------------------------------------------------------------------
// Advisory request lifecycle
// ---------------------------------------------------------------------------

#[test]
fn begin_advisory_rejects_overlapping_requests() {
    let mut workshop = test_workshop();
    let _ticket = workshop.begin_advisory().expect("first request starts");

    let err = workshop.begin_advisory().unwrap_err();
    assert!(matches!(err, WorkshopError::AdvisoryBusy));
    assert!(workshop.session().is_advisory_in_flight());
}

#[test]
fn finish_step_advisory_stores_text_and_clears_flag() {
    let mut workshop = test_workshop();
    let ticket = workshop.begin_advisory().unwrap();
    workshop.finish_step_advisory(ticket, Ok("useful insight".to_string()));

    assert!(!workshop.session().is_advisory_in_flight());
    assert_eq!(workshop.session().step_advisory(), Some("useful insight"));
    assert!(workshop.session().last_error().is_none());
}

#[test]
fn stale_advisory_after_navigation_is_discarded() {
    let mut workshop = test_workshop();
    let ticket = workshop.begin_advisory().unwrap();

    // The user moves on before the response lands.
    workshop.advance();
    workshop.finish_step_advisory(ticket, Ok("stale text".to_string()));

    assert!(!workshop.session().is_advisory_in_flight());
    assert_eq!(workshop.session().step_advisory(), None);
}

#[test]
fn superseded_ticket_cannot_disturb_the_active_request() {
    let mut workshop = test_workshop();
    let first = workshop.begin_advisory().unwrap();
    workshop.finish_step_advisory(first, Err(WorkshopError::configuration("missing key")));

    let second = workshop.begin_advisory().unwrap();
    // A duplicate completion of the old ticket arrives while the second
    // request is outstanding: it must neither store text nor clear the
    // second request's busy flag.
    workshop.finish_step_advisory(first, Ok("late text".to_string()));
    assert_eq!(workshop.session().step_advisory(), None);
    assert!(workshop.session().is_advisory_in_flight());

    workshop.finish_step_advisory(second, Ok("current text".to_string()));
    assert_eq!(workshop.session().step_advisory(), Some("current text"));
    assert!(!workshop.session().is_advisory_in_flight());
}

#[test]
fn empty_success_stores_the_placeholder() {
    let mut workshop = test_workshop();
    let ticket = workshop.begin_advisory().unwrap();
    workshop.finish_step_advisory(ticket, Ok("   \n".to_string()));

    assert_eq!(
        workshop.session().step_advisory(),
        Some(EMPTY_RESPONSE_PLACEHOLDER)
    );
}

#[test]
fn configuration_failure_sets_distinct_error_and_clears_flag() {
    let mut workshop = test_workshop();
    let ticket = workshop.begin_advisory().unwrap();
    workshop.finish_step_advisory(ticket, Err(WorkshopError::configuration("no key")));

    assert!(!workshop.session().is_advisory_in_flight());
    let config_error = workshop.session().last_error().unwrap().clone();
    assert_eq!(config_error.kind, ErrorKind::Configuration);

    let ticket = workshop.begin_advisory().unwrap();
    workshop.finish_step_advisory(
        ticket,
        Err(WorkshopError::Service {
            status: 500,
            message: "boom".to_string(),
        }),
    );
    let service_error = workshop.session().last_error().unwrap();
    assert_eq!(service_error.kind, ErrorKind::Service);
    assert_ne!(config_error.message, service_error.message);
}

#[test]
fn begin_advisory_clears_the_previous_error() {
    let mut workshop = test_workshop();
    let ticket = workshop.begin_advisory().unwrap();
    workshop.finish_step_advisory(ticket, Err(WorkshopError::configuration("no key")));
    assert!(workshop.session().last_error().is_some());

    let _ticket = workshop.begin_advisory().unwrap();
    assert!(workshop.session().last_error().is_none());
}

#[tokio::test]
async fn request_step_advisory_roundtrip() {
    let mut workshop = workshop_with_script(vec![Ok("scripted insight".to_string())]);
    workshop.request_step_advisory().await.unwrap();

    assert_eq!(workshop.session().step_advisory(), Some("scripted insight"));
    assert!(!workshop.session().is_advisory_in_flight());
}

#[tokio::test]
async fn request_final_report_caches_and_never_refetches() {
    let mut workshop = workshop_with_script(vec![
        Ok("the narrative".to_string()),
        Ok("a second narrative".to_string()),
    ]);

    workshop.request_final_report().await.unwrap();
    assert_eq!(workshop.session().final_report(), Some("the narrative"));

    // A second request is satisfied from the cache.
    workshop.request_final_report().await.unwrap();
    assert_eq!(workshop.session().final_report(), Some("the narrative"));
}

#[tokio::test]
async fn failed_final_report_allows_retry() {
    let mut workshop = workshop_with_script(vec![
        Err(WorkshopError::Service {
            status: 503,
            message: "unavailable".to_string(),
        }),
        Ok("the narrative".to_string()),
    ]);

    workshop.request_final_report().await.unwrap();
    assert_eq!(workshop.session().final_report(), None);
    assert!(workshop.session().last_error().is_some());

    workshop.request_final_report().await.unwrap();
    assert_eq!(workshop.session().final_report(), Some("the narrative"));
    assert!(workshop.session().last_error().is_none());
}
