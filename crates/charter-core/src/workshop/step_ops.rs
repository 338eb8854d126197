//! The step sequencer: guarded navigation over the configured step list.
//!
//! Users move forward one step at a time, backward one step at a time, and
//! may jump directly only to steps they have already completed. The
//! jump-backward-only guard is load-bearing: it prevents reaching the tasks
//! step before any objectives exist, since that screen is keyed off existing
//! objectives.

use log::debug;

use super::Workshop;
use crate::error::{Result, WorkshopError};
use crate::models::{SkipRule, StepId};

/// Outcome of a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// Index of the step the session is now on
    pub step: usize,

    /// Whether the step actually changed
    pub moved: bool,

    /// Whether a reflection interstitial opened on this arrival
    pub interstitial_shown: bool,

    /// Whether the caller should run the final-integration request now.
    ///
    /// Set on arrival at the terminal step while no report is cached. The
    /// sequencer itself performs no I/O.
    pub wants_final_report: bool,
}

impl Workshop {
    /// Moves forward one step. A no-op at the terminal step.
    ///
    /// If the destination is a pure transition step whose skip rule fires,
    /// navigation passes straight through to the step after it.
    pub fn advance(&mut self) -> Arrival {
        let terminal = self.registry.terminal_index();
        let current = self.session.current_step;
        if current >= terminal {
            return self.stay();
        }

        let mut destination = current + 1;
        while destination < terminal {
            let Some(step) = self.registry.get(destination) else {
                break;
            };
            let skip = match step.skip {
                Some(SkipRule::Always) => true,
                Some(SkipRule::AfterFirstVisit) => self.session.was_visited(destination),
                None => false,
            };
            if !skip {
                break;
            }
            debug!("skipping transition step at index {destination}");
            destination += 1;
        }

        self.arrive(destination)
    }

    /// Moves backward one step. A no-op at the initial step.
    ///
    /// Retreat never skips transition steps; walking back is deliberate.
    pub fn retreat(&mut self) -> Arrival {
        let current = self.session.current_step;
        if current == 0 {
            return self.stay();
        }
        self.arrive(current - 1)
    }

    /// Jumps directly to an already-completed step.
    ///
    /// # Errors
    ///
    /// Returns `WorkshopError::InvalidInput` without any state change when
    /// `target` is not strictly before the current step.
    pub fn jump_to(&mut self, target: usize) -> Result<Arrival> {
        if target >= self.session.current_step {
            return Err(WorkshopError::invalid_input(
                "target",
                "only previously completed steps can be revisited",
            ));
        }
        Ok(self.arrive(target))
    }

    /// Dismisses the current step's reflection interstitial.
    pub fn dismiss_interstitial(&mut self) {
        self.session.interstitial_open = false;
    }

    /// Re-opens the current step's interstitial, if one is configured.
    pub fn reopen_interstitial(&mut self) {
        if self.current_step().reflection.is_some() {
            self.session.interstitial_open = true;
        }
    }

    fn stay(&self) -> Arrival {
        Arrival {
            step: self.session.current_step,
            moved: false,
            interstitial_shown: false,
            wants_final_report: false,
        }
    }

    fn arrive(&mut self, destination: usize) -> Arrival {
        let moved = destination != self.session.current_step;
        if !moved {
            return self.stay();
        }

        // Stale suggestions must never show against another step's data.
        self.session.step_advisory.clear();
        self.session.current_step = destination;
        self.session.visited[destination] = true;

        let step = &self.registry.steps()[destination];
        let interstitial_shown = step.reflection.is_some();
        self.session.interstitial_open = interstitial_shown;

        let wants_final_report = step.id == StepId::Summary
            && destination == self.registry.terminal_index()
            && self.session.final_report.is_empty();

        debug!("arrived at step {} ({})", destination, step.id);

        Arrival {
            step: destination,
            moved,
            interstitial_shown,
            wants_final_report,
        }
    }
}
