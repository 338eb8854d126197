//! Step identities and registry configuration for the workshop sequence.
//!
//! The sequencer walks an ordered list of [`StepConfig`] values. Everything
//! that varies between steps — title, methodology guidance, reflection
//! interstitial, transition skip rule — lives here as data, never as
//! hardcoded step counting in the sequencer itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identity of a workshop step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    /// Background and environment mapping
    Context,
    /// SWOT analysis
    Swot,
    /// Pure interstitial step carrying no data-entry fields
    Transition,
    /// Vision statement
    Vision,
    /// Strategic goals
    Goals,
    /// SMART objectives
    Objectives,
    /// Execution tasks
    Tasks,
    /// Constraints and risks
    Constraints,
    /// Final summary dashboard
    Summary,
}

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Context => "context",
            StepId::Swot => "swot",
            StepId::Transition => "transition",
            StepId::Vision => "vision",
            StepId::Goals => "goals",
            StepId::Objectives => "objectives",
            StepId::Tasks => "tasks",
            StepId::Constraints => "constraints",
            StepId::Summary => "summary",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suggested discussion format for a reflection interstitial.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionMode {
    Solo,
    Pair,
    Trio,
}

impl ReflectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReflectionMode::Solo => "solo",
            ReflectionMode::Pair => "in pairs",
            ReflectionMode::Trio => "in trios",
        }
    }
}

/// A non-data-bearing prompt shown automatically on arrival at a step.
///
/// Dismissible by explicit acknowledgment, re-openable on demand. Never gates
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pub title: String,
    pub prompts: Vec<String>,
    pub mode: ReflectionMode,
}

/// How a pure transition step behaves during forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRule {
    /// The step is never landed on; advancing passes straight through
    Always,
    /// The step is shown the first time through, then skipped
    AfterFirstVisit,
}

/// Static methodology guidance rendered beside a step's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub title: String,
    pub description: String,
    pub how_to: String,
    pub example: String,
}

impl Guidance {
    fn new(title: &str, description: &str, how_to: &str, example: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            how_to: how_to.to_string(),
            example: example.to_string(),
        }
    }
}

/// Configuration for a single step in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfig {
    pub id: StepId,

    /// Display title for the step header
    pub title: String,

    /// Methodology guidance, absent on the summary and transition steps
    pub guidance: Option<Guidance>,

    /// Reflection interstitial opened on arrival, if configured
    pub reflection: Option<Reflection>,

    /// Present only on pure transition steps; carries the skip behavior
    pub skip: Option<SkipRule>,
}

impl StepConfig {
    /// Creates a data-bearing step with no guidance or reflection.
    pub fn new(id: StepId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            guidance: None,
            reflection: None,
            skip: None,
        }
    }

    /// Creates a pure transition step with the given skip rule.
    pub fn transition(title: impl Into<String>, skip: SkipRule) -> Self {
        Self {
            id: StepId::Transition,
            title: title.into(),
            guidance: None,
            reflection: None,
            skip: Some(skip),
        }
    }

    pub fn with_guidance(mut self, guidance: Guidance) -> Self {
        self.guidance = Some(guidance);
        self
    }

    pub fn with_reflection(mut self, reflection: Reflection) -> Self {
        self.reflection = Some(reflection);
        self
    }

    /// True for steps that carry no data-entry fields.
    pub fn is_transition(&self) -> bool {
        self.skip.is_some()
    }
}

/// Ordered collection of steps driven by the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRegistry {
    steps: Vec<StepConfig>,
}

impl StepRegistry {
    /// Builds a registry from an explicit step list.
    ///
    /// The list must be non-empty; the last step is the terminal step.
    pub fn from_steps(steps: Vec<StepConfig>) -> Self {
        debug_assert!(!steps.is_empty(), "step registry must not be empty");
        Self { steps }
    }

    /// The eight canonical workshop steps, with methodology guidance on every
    /// data-entry step and reflection stops before the vision, goals, and
    /// tasks work.
    pub fn standard() -> Self {
        let steps = vec![
            StepConfig::new(StepId::Context, "Background and Mapping").with_guidance(
                Guidance::new(
                    "Where are we today?",
                    "Understanding the environment and background is the foundation of any \
                     relevant work plan.",
                    "Describe the current reality: what occupies the unit? What has changed in \
                     the municipal and educational environment?",
                    "\"Rising demand for special-education responses alongside a shift in \
                     municipal focus toward welfare.\"",
                ),
            ),
            StepConfig::new(StepId::Swot, "SWOT Analysis").with_guidance(Guidance::new(
                "SWOT analysis",
                "A tool for mapping the forces acting inside and outside the service.",
                "Strengths and weaknesses are internal. Opportunities and threats are external.",
                "Opportunity: a new municipal resilience center is opening.",
            )),
            StepConfig::new(StepId::Vision, "Service Vision")
                .with_guidance(Guidance::new(
                    "How do you phrase a vision?",
                    "A vision is the desired picture of the future. It should be short, \
                     memorable, and inspiring.",
                    "Use present- or future-tense verbs. Think about the core value you bring \
                     to the community.",
                    "\"A leading service that is a center of knowledge and resilience for every \
                     child and educational team in the city.\"",
                ))
                .with_reflection(Reflection {
                    title: "Thinking about the future".to_string(),
                    prompts: vec![
                        "What is the one thing you would want said about your service three \
                         years from now?"
                            .to_string(),
                        "Which single word best captures your professional mission this year?"
                            .to_string(),
                    ],
                    mode: ReflectionMode::Pair,
                }),
            StepConfig::new(StepId::Goals, "Strategic Goals")
                .with_guidance(Guidance::new(
                    "Strategic goals",
                    "Goals are the milestones on the way to the vision.",
                    "Phrase broad goals that define change or improvement in a specific area.",
                    "\"Embed a community-preventive working model in all elementary schools.\"",
                ))
                .with_reflection(Reflection {
                    title: "Focusing the effort".to_string(),
                    prompts: vec![
                        "Of all the challenges, which three topics are the most critical this \
                         year?"
                            .to_string(),
                        "Where is the largest gap between the current and the desired state of \
                         your service?"
                            .to_string(),
                    ],
                    mode: ReflectionMode::Trio,
                }),
            StepConfig::new(StepId::Objectives, "SMART Objectives").with_guidance(Guidance::new(
                "SMART objectives",
                "An objective breaks a goal down into something measurable and concrete.",
                "Make sure the objective is specific, measurable, achievable, relevant, and \
                 time-bound.",
                "\"Build a training program for five counseling teams by December.\"",
            )),
            StepConfig::new(StepId::Tasks, "Execution Plan")
                .with_guidance(Guidance::new(
                    "Action items",
                    "This is where the plan becomes reality.",
                    "Break every objective into small tasks. Define who is responsible, the \
                     schedule, and the required resources.",
                    "\"Task: collect training materials. Owner: community coordinator. \
                     Schedule: two weeks.\"",
                ))
                .with_reflection(Reflection {
                    title: "From vision to the ground".to_string(),
                    prompts: vec![
                        "Who on your team is the engine that can drive these tasks?".to_string(),
                        "What is the first thing you will do on Sunday morning to get started?"
                            .to_string(),
                    ],
                    mode: ReflectionMode::Pair,
                }),
            StepConfig::new(StepId::Constraints, "Constraints and Risks").with_guidance(
                Guidance::new(
                    "Managing constraints",
                    "Identify in advance what could go wrong.",
                    "Think about staffing barriers, budget, or unexpected political shifts.",
                    "\"A possible delay in receiving the external budget for the prevention \
                     project.\"",
                ),
            ),
            StepConfig::new(StepId::Summary, "Final Dashboard"),
        ];
        Self::from_steps(steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepConfig> {
        self.steps.get(index)
    }

    /// Index of the terminal step.
    pub fn terminal_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Index of the first step with the given identity.
    pub fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepConfig> {
        self.steps.iter()
    }

    pub(crate) fn steps(&self) -> &[StepConfig] {
        &self.steps
    }
}
