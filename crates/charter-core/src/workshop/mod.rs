//! High-level workshop API: the owned state container for one session.
//!
//! The [`Workshop`] is the single writer over the plan and the session
//! state. Every mutation flows through its typed operations — the plan is
//! never assigned to directly from call sites:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Front-end    │    │    Workshop     │    │  Derived views  │
//! │ (wizard loop)   │───▶│ (plan_ops,      │───▶│  (crate::views, │
//! │                 │    │  step_ops,      │    │   display)      │
//! │                 │    │  advisory)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: factory configuring the step registry and gateway
//! - [`plan_ops`]: typed plan mutations (lists, objectives, tasks, narrative)
//! - [`step_ops`]: the step sequencer (advance, retreat, jump, interstitials)
//! - [`advisory`]: ticketed gateway request lifecycle
//! - [`state`]: the transient session state
//!
//! # Usage
//!
//! ```rust
//! use charter_core::{params::ListField, WorkshopBuilder};
//!
//! let mut workshop = WorkshopBuilder::new().build();
//! workshop.begin_session();
//! workshop.append_list_entry(ListField::Goals, "Reduce wait times");
//!
//! let arrival = workshop.advance();
//! assert!(arrival.moved);
//! ```

pub mod advisory;
pub mod builder;
pub mod plan_ops;
pub mod state;
pub mod step_ops;

#[cfg(test)]
mod tests;

pub use advisory::AdvisoryTicket;
pub use builder::WorkshopBuilder;
pub use state::SessionState;
pub use step_ops::Arrival;

use crate::gateway::AdvisoryGateway;
use crate::models::{Plan, StepConfig, StepRegistry};

/// Central state container for one workshop session.
pub struct Workshop {
    pub(crate) plan: Plan,
    pub(crate) session: SessionState,
    pub(crate) registry: StepRegistry,
    pub(crate) gateway: Box<dyn AdvisoryGateway>,
}

impl Workshop {
    pub(crate) fn new(registry: StepRegistry, gateway: Box<dyn AdvisoryGateway>) -> Self {
        let mut session = SessionState::new(registry.len());
        // The session opens on the first step; its interstitial (if any)
        // shows immediately.
        session.visited[0] = true;
        session.interstitial_open = registry
            .get(0)
            .is_some_and(|step| step.reflection.is_some());

        Self {
            plan: Plan::new(),
            session,
            registry,
            gateway,
        }
    }

    /// Read-only access to the plan under construction.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Read-only access to the transient session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The configured step sequence.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Configuration of the step the session is currently on.
    pub fn current_step(&self) -> &StepConfig {
        &self.registry.steps()[self.session.current_step]
    }

    /// Marks the session as started (the user passed the welcome screen).
    pub fn begin_session(&mut self) {
        self.session.started = true;
    }
}
