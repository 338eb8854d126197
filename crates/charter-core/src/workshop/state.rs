//! Transient session state for the wizard.

use crate::error::ErrorInfo;

/// Wizard-adjacent state, separate from the plan itself.
///
/// Created at workshop construction with the first step current; mutated only
/// by the sequencer and the advisory request lifecycle; reset only by
/// constructing a new workshop.
#[derive(Debug, Default)]
pub struct SessionState {
    pub(crate) current_step: usize,
    pub(crate) started: bool,
    pub(crate) step_advisory: String,
    pub(crate) final_report: String,
    pub(crate) last_error: Option<ErrorInfo>,
    pub(crate) advisory_in_flight: bool,
    pub(crate) advisory_seq: u64,
    pub(crate) interstitial_open: bool,
    pub(crate) visited: Vec<bool>,
}

impl SessionState {
    pub(crate) fn new(step_count: usize) -> Self {
        Self {
            visited: vec![false; step_count],
            ..Self::default()
        }
    }

    /// Index of the step the session is currently on.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the user has passed the welcome screen.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// The cached per-step advisory text, if any.
    pub fn step_advisory(&self) -> Option<&str> {
        if self.step_advisory.is_empty() {
            None
        } else {
            Some(&self.step_advisory)
        }
    }

    /// The cached final narrative report, if any.
    pub fn final_report(&self) -> Option<&str> {
        if self.final_report.is_empty() {
            None
        } else {
            Some(&self.final_report)
        }
    }

    /// User-facing message for the most recent failed advisory call.
    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.last_error.as_ref()
    }

    /// Whether a gateway request is currently in flight.
    pub fn is_advisory_in_flight(&self) -> bool {
        self.advisory_in_flight
    }

    /// Whether the current step's reflection interstitial is showing.
    pub fn is_interstitial_open(&self) -> bool {
        self.interstitial_open
    }

    /// Whether the step at `index` has been arrived at during this session.
    pub fn was_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }
}
