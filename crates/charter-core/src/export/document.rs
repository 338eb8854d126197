//! Printable document assembly.

use std::fmt;
use std::path::Path;

use jiff::{tz::TimeZone, Timestamp};

use crate::display::{SummaryTable, SwotGrid};
use crate::error::{Result, WorkshopError};
use crate::models::Plan;

/// Default filename for the written document.
pub const DOCUMENT_FILENAME: &str = "work-plan.md";

/// The complete work plan as one printable markdown document.
///
/// Holds references only; rendering happens through `Display`, so the same
/// document can go to the terminal renderer or to a file.
pub struct PrintDocument<'a> {
    plan: &'a Plan,
    narrative: Option<&'a str>,
    generated_at: Timestamp,
}

impl<'a> PrintDocument<'a> {
    /// Builds a document over the plan, including the AI narrative when one
    /// is cached.
    pub fn new(plan: &'a Plan, narrative: Option<&'a str>) -> Self {
        Self {
            plan,
            narrative,
            generated_at: Timestamp::now(),
        }
    }

    /// Writes the rendered document to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|source| WorkshopError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for PrintDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Strategic Annual Work Plan")?;
        writeln!(f)?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M")
        )?;
        writeln!(f)?;

        writeln!(f, "## Service Vision")?;
        writeln!(f)?;
        if self.plan.vision.is_empty() {
            writeln!(f, "No vision defined yet.")?;
        } else {
            writeln!(f, "> \"{}\"", self.plan.vision)?;
        }
        writeln!(f)?;

        writeln!(f, "## Background and Mapping")?;
        writeln!(f)?;
        if self.plan.self_context.is_empty() {
            writeln!(f, "No background entered.")?;
        } else {
            writeln!(f, "{}", self.plan.self_context)?;
        }
        writeln!(f)?;

        writeln!(f, "## SWOT Analysis")?;
        writeln!(f)?;
        write!(f, "{}", SwotGrid(&self.plan.swot))?;

        writeln!(f, "## Goals, Objectives and Tasks")?;
        writeln!(f)?;
        write!(f, "{}", SummaryTable::from_plan(self.plan))?;
        writeln!(f)?;

        writeln!(f, "## Constraints and Risks")?;
        writeln!(f)?;
        if self.plan.constraints.is_empty() {
            writeln!(f, "No constraints defined.")?;
        } else {
            writeln!(f, "{}", self.plan.constraints)?;
        }

        if let Some(narrative) = self.narrative {
            writeln!(f)?;
            writeln!(f, "## Narrative Report")?;
            writeln!(f)?;
            writeln!(f, "{narrative}")?;
        }

        Ok(())
    }
}
