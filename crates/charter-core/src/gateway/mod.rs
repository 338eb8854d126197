//! Advisory service contract and the hosted client implementation.
//!
//! The workshop core only depends on the [`AdvisoryGateway`] trait; the
//! concrete [`GeminiGateway`] speaks the hosted `generateContent` API. Tests
//! substitute scripted gateways at this seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Plan, StepId};

pub mod gemini;
mod prompts;

pub use gemini::GeminiGateway;

/// External text-generation collaborator consulted by the workshop.
///
/// Both operations take a read-only snapshot of the plan and return free-form
/// advisory text. The caller enforces that at most one request is in flight
/// at a time and discards stale completions; implementations only need to
/// perform one request per call.
#[async_trait]
pub trait AdvisoryGateway: Send + Sync {
    /// Short commentary on the current step's data.
    async fn step_advisory(&self, step: StepId, plan: &Plan) -> Result<String>;

    /// Long-form narrative report integrating the complete plan.
    ///
    /// Expected to contain lightweight markup: headings, bullets, bold, and
    /// a `|`-delimited table covering goal, objective, task, responsibility,
    /// and timeline. More expensive than [`Self::step_advisory`]; invoked at
    /// most once per session unless the user explicitly retries.
    async fn final_integration(&self, plan: &Plan) -> Result<String>;
}
