//! Core library for the Charter work-plan workshop.
//!
//! This crate provides the business logic for authoring a strategic annual
//! work plan through a guided, multi-step workshop: the plan data model, the
//! step sequencer, the derived views, the advisory-service gateway, and the
//! export serializers.
//!
//! # Architecture
//!
//! - **Domain models** ([`models`]): the [`Plan`] aggregate and the step
//!   registry that configures the workshop sequence
//! - **State container** ([`workshop`]): the single owner of the plan and
//!   session state; every mutation flows through its typed operations
//! - **Derived views** ([`views`]): pure projections recomputed on read —
//!   goal groupings, the summary table, completion flags
//! - **Advisory gateway** ([`gateway`]): async contract to the hosted
//!   text-generation service, with a ticketed request lifecycle that can
//!   never wedge the UI in a loading state
//! - **Exports** ([`export`]): printable document and spreadsheet workbook
//! - **Display** ([`display`]): markdown formatting for models and views
//!
//! # Quick Start
//!
//! ```rust
//! use charter_core::{
//!     params::{AddObjective, ListField},
//!     WorkshopBuilder,
//! };
//!
//! let mut workshop = WorkshopBuilder::new().build();
//! workshop.begin_session();
//!
//! // Enter a goal and derive an objective from it.
//! workshop.append_list_entry(ListField::Goals, "Reduce wait times");
//! let goal_id = workshop.plan().goals[0].id;
//! workshop.add_objective(&AddObjective {
//!     goal_id,
//!     text: "Cut average wait to 5 days by Q2".to_string(),
//! });
//!
//! // Navigate; the sequencer gates transitions and opens interstitials.
//! let arrival = workshop.advance();
//! assert!(arrival.moved);
//!
//! // Project the plan for display.
//! let rows = charter_core::views::summary_table(workshop.plan());
//! assert_eq!(rows.len(), 1);
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod gateway;
pub mod models;
pub mod params;
pub mod views;
pub mod workshop;

// Re-export commonly used types
pub use error::{ErrorInfo, ErrorKind, Result, WorkshopError};
pub use gateway::{AdvisoryGateway, GeminiGateway};
pub use models::{
    Goal, GoalId, Guidance, Objective, ObjectiveId, Plan, Reflection, ReflectionMode, SkipRule,
    StepConfig, StepId, StepRegistry, SummaryRow, SwotBoard, SwotCategory, Task, TaskId,
};
pub use workshop::{AdvisoryTicket, Arrival, SessionState, Workshop, WorkshopBuilder};
