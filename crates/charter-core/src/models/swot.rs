//! SWOT board model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the four SWOT categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SwotCategory {
    /// Internal strengths of the unit
    Strengths,
    /// Internal weaknesses of the unit
    Weaknesses,
    /// External opportunities
    Opportunities,
    /// External threats
    Threats,
}

impl SwotCategory {
    /// All categories in canonical display order.
    pub const ALL: [SwotCategory; 4] = [
        SwotCategory::Strengths,
        SwotCategory::Weaknesses,
        SwotCategory::Opportunities,
        SwotCategory::Threats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SwotCategory::Strengths => "strengths",
            SwotCategory::Weaknesses => "weaknesses",
            SwotCategory::Opportunities => "opportunities",
            SwotCategory::Threats => "threats",
        }
    }

    /// Display label including the internal/external qualifier.
    pub fn label(&self) -> &'static str {
        match self {
            SwotCategory::Strengths => "Strengths (internal)",
            SwotCategory::Weaknesses => "Weaknesses (internal)",
            SwotCategory::Opportunities => "Opportunities (external)",
            SwotCategory::Threats => "Threats (external)",
        }
    }
}

impl FromStr for SwotCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strengths" | "strength" | "s" => Ok(SwotCategory::Strengths),
            "weaknesses" | "weakness" | "w" => Ok(SwotCategory::Weaknesses),
            "opportunities" | "opportunity" | "o" => Ok(SwotCategory::Opportunities),
            "threats" | "threat" | "t" => Ok(SwotCategory::Threats),
            _ => Err(format!("Invalid SWOT category: {s}")),
        }
    }
}

/// Four ordered lists of free-text entries, one per SWOT category.
///
/// Insertion order is display order. Duplicates are allowed; entries have no
/// identity beyond their position in a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwotBoard {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SwotBoard {
    /// Entries for one category, in insertion order.
    pub fn entries(&self, category: SwotCategory) -> &[String] {
        match category {
            SwotCategory::Strengths => &self.strengths,
            SwotCategory::Weaknesses => &self.weaknesses,
            SwotCategory::Opportunities => &self.opportunities,
            SwotCategory::Threats => &self.threats,
        }
    }

    pub(crate) fn entries_mut(&mut self, category: SwotCategory) -> &mut Vec<String> {
        match category {
            SwotCategory::Strengths => &mut self.strengths,
            SwotCategory::Weaknesses => &mut self.weaknesses,
            SwotCategory::Opportunities => &mut self.opportunities,
            SwotCategory::Threats => &mut self.threats,
        }
    }

    /// True when no category has any entries.
    pub fn is_empty(&self) -> bool {
        SwotCategory::ALL
            .iter()
            .all(|category| self.entries(*category).is_empty())
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        SwotCategory::ALL
            .iter()
            .map(|category| self.entries(*category).len())
            .sum()
    }
}
