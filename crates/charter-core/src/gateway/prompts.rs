//! Prompt assembly for the advisory service.
//!
//! Each request carries a natural-language instruction identifying the
//! current step's topic plus a JSON snapshot of the full plan. The prose here
//! is deliberately plain; the contract is the shape, not the wording.

use crate::error::Result;
use crate::models::{Plan, StepId};

/// One-line topic description for each step, embedded in the advisory
/// instruction so the model knows which part of the plan is being worked on.
pub(crate) fn step_topic(step: StepId) -> &'static str {
    match step {
        StepId::Context => "environmental and background mapping for the psychological service",
        StepId::Swot => {
            "SWOT analysis - strengths, weaknesses, opportunities, and threats for the unit"
        }
        StepId::Transition => "a reflection pause between workshop stages",
        StepId::Vision => "vision building for the service - where do we want to be?",
        StepId::Goals => "strategic goal setting - the main pillars for next year",
        StepId::Objectives => "defining SMART objectives for each strategic goal",
        StepId::Tasks => "detailed task management - turning goals into action",
        StepId::Constraints => "risk assessment and management of constraints",
        StepId::Summary => "final plan integration and roadmap construction",
    }
}

/// Instruction + snapshot for a per-step advisory request.
pub(crate) fn advisory_prompt(step: StepId, plan: &Plan) -> Result<String> {
    let snapshot = serde_json::to_string(plan)?;
    Ok(format!(
        "You are an expert strategy consultant for managers of educational psychology \
         services. We are in a work-plan workshop. The current stage is: {topic}. The data \
         entered so far: {snapshot}.\n\n\
         Your task:\n\
         1. Offer two or three practical insights that help the manager complete this stage \
         more professionally.\n\
         2. Give one example of a high-quality phrasing for an item in this stage, grounded \
         in the data the manager entered.\n\
         3. Use empowering managerial-psychological language.",
        topic = step_topic(step),
    ))
}

/// Instruction + snapshot for the final integration report.
pub(crate) fn integration_prompt(plan: &Plan) -> Result<String> {
    let snapshot = serde_json::to_string(plan)?;
    Ok(format!(
        "Build a strategic annual work plan for the service manager, fully integrating the \
         background, the SWOT analysis, the vision, the goals, and the tasks.\n\n\
         Data: {snapshot}.\n\n\
         The output must be professional markdown containing:\n\
         1. A strategic executive summary connecting the background to the service's new \
         direction.\n\
         2. The polished vision of the service.\n\
         3. A complete work-plan table with columns: strategic goal, SMART objective, \
         operational task, responsible party, timeline and resources, and the response to a \
         possible constraint.\n\
         4. Recommendations for change management in the team while rolling out the plan.",
    ))
}
