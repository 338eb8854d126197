//! Display implementations for domain models.
//!
//! All output is markdown, rendered rich by the CLI's terminal renderer or
//! printed as-is in plain mode.

use std::fmt;

use crate::models::{Goal, Guidance, Objective, Reflection, Task};

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if !self.responsibility.is_empty() {
            write!(f, " — owner: {}", self.responsibility)?;
        }
        if !self.timeline.is_empty() {
            write!(f, " — schedule: {}", self.timeline)?;
        }
        Ok(())
    }
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- **How to fill it in**: {}", self.how_to)?;
        writeln!(f, "- **Example phrasing**: {}", self.example)?;
        Ok(())
    }
}

impl fmt::Display for Reflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "Time for deeper thought ({}):", self.mode.as_str())?;
        writeln!(f)?;
        for prompt in &self.prompts {
            writeln!(f, "> \"{prompt}\"")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
