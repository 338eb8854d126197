//! Ticketed request lifecycle for the advisory gateway.
//!
//! The contract from the session's point of view:
//!
//! - at most one request in flight at a time (`begin_advisory` rejects a
//!   second start);
//! - the busy flag clears on every completion path — success, failure, or
//!   empty response — so the front-end can never get stuck loading;
//! - a completion whose ticket no longer matches the session (the user
//!   navigated away, or a newer request superseded it) is discarded rather
//!   than shown against the wrong step's data;
//! - an empty-but-successful response stores a neutral placeholder instead of
//!   a blank pane.
//!
//! The split into `begin`/`finish` keeps the state transitions synchronous
//! and directly testable; the async convenience methods compose them around
//! the actual gateway call.

use log::{debug, info};

use super::Workshop;
use crate::error::{ErrorInfo, Result, WorkshopError};

/// Shown when the service answers successfully but with no text.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "The advisory service returned no suggestions.";

/// Pairs one gateway request with the step and sequence number it was issued
/// for, so its completion can be checked for staleness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryTicket {
    pub(crate) seq: u64,
    pub(crate) step: usize,
}

impl Workshop {
    /// Starts a gateway request: sets the busy flag, clears the previous
    /// error, and returns the ticket for the eventual completion.
    ///
    /// # Errors
    ///
    /// Returns `WorkshopError::AdvisoryBusy` without any state change when a
    /// request is already in flight.
    pub fn begin_advisory(&mut self) -> Result<AdvisoryTicket> {
        if self.session.advisory_in_flight {
            return Err(WorkshopError::AdvisoryBusy);
        }
        self.session.advisory_in_flight = true;
        self.session.last_error = None;
        self.session.advisory_seq += 1;
        Ok(AdvisoryTicket {
            seq: self.session.advisory_seq,
            step: self.session.current_step,
        })
    }

    /// Completes a per-step advisory request.
    ///
    /// A ticket from a superseded request is ignored entirely — it must not
    /// touch the busy flag or error state of the request that replaced it. A
    /// current ticket always clears the flag; its text is still discarded if
    /// the user has navigated to a different step since the request started.
    pub fn finish_step_advisory(&mut self, ticket: AdvisoryTicket, outcome: Result<String>) {
        if ticket.seq != self.session.advisory_seq {
            debug!("ignoring completion of superseded advisory request");
            return;
        }
        self.session.advisory_in_flight = false;

        match outcome {
            Ok(text) => {
                if ticket.step != self.session.current_step {
                    debug!("discarding stale advisory for step index {}", ticket.step);
                    return;
                }
                self.session.step_advisory = if text.trim().is_empty() {
                    EMPTY_RESPONSE_PLACEHOLDER.to_string()
                } else {
                    text
                };
            }
            Err(err) => {
                self.session.last_error = Some(ErrorInfo::from_error(&err));
            }
        }
    }

    /// Completes a final-integration request.
    ///
    /// The report belongs to the whole plan, so navigation does not stale it;
    /// only a superseding request does.
    pub fn finish_final_report(&mut self, ticket: AdvisoryTicket, outcome: Result<String>) {
        if ticket.seq != self.session.advisory_seq {
            debug!("ignoring completion of superseded report request");
            return;
        }
        self.session.advisory_in_flight = false;

        match outcome {
            Ok(text) => {
                self.session.final_report = if text.trim().is_empty() {
                    EMPTY_RESPONSE_PLACEHOLDER.to_string()
                } else {
                    text
                };
            }
            Err(err) => {
                self.session.last_error = Some(ErrorInfo::from_error(&err));
            }
        }
    }

    /// Requests an advisory for the current step and stores the outcome.
    ///
    /// # Errors
    ///
    /// Returns `WorkshopError::AdvisoryBusy` when a request is already in
    /// flight. Gateway failures are not returned: they land in
    /// [`SessionState::last_error`](super::SessionState::last_error).
    pub async fn request_step_advisory(&mut self) -> Result<()> {
        let ticket = self.begin_advisory()?;
        let step_id = self.current_step().id;
        info!("requesting step advisory for {step_id}");
        let outcome = self.gateway.step_advisory(step_id, &self.plan).await;
        self.finish_step_advisory(ticket, outcome);
        Ok(())
    }

    /// Requests the final narrative report and caches the outcome.
    ///
    /// A cached report makes this a no-op — the user never pays twice for
    /// the same narrative. A previous failure does not count as cached, so
    /// an explicit retry goes through.
    ///
    /// # Errors
    ///
    /// Returns `WorkshopError::AdvisoryBusy` when a request is already in
    /// flight. Gateway failures land in the session state, not here.
    pub async fn request_final_report(&mut self) -> Result<()> {
        if !self.session.final_report.is_empty() {
            debug!("final report already cached; skipping request");
            return Ok(());
        }
        let ticket = self.begin_advisory()?;
        info!("requesting final integration report");
        let outcome = self.gateway.final_integration(&self.plan).await;
        self.finish_final_report(ticket, outcome);
        Ok(())
    }
}
