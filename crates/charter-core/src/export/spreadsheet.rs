//! Spreadsheet workbook export.
//!
//! Produces a two-sheet workbook: an overview sheet (vision, goals, SWOT,
//! constraints) and a tabular work-plan sheet with the fixed column contract
//! `[Goal, Objective, Task, Responsibility, Timeline]`, one row per summary
//! table row. Sheets carry right-to-left direction metadata by default; the
//! product's target script is Hebrew.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::Result;
use crate::models::{Plan, SwotCategory};
use crate::views;

/// Deterministic name of the exported workbook.
pub const WORKBOOK_FILENAME: &str = "work-plan.xlsx";

/// Locale-driven options for the workbook.
#[derive(Debug, Clone, Copy)]
pub struct SpreadsheetOptions {
    /// Lay sheets out right-to-left
    pub right_to_left: bool,
}

impl Default for SpreadsheetOptions {
    fn default() -> Self {
        Self {
            right_to_left: true,
        }
    }
}

/// Writes the workbook into `dir` and returns the path of the created file.
pub fn write_workbook(plan: &Plan, dir: &Path, options: SpreadsheetOptions) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let heading = Format::new().set_bold();

    let overview = workbook.add_worksheet();
    overview.set_name("Overview")?;
    if options.right_to_left {
        overview.set_right_to_left(true);
    }
    write_overview(overview, plan, &heading)?;

    let table = workbook.add_worksheet();
    table.set_name("Work Plan")?;
    if options.right_to_left {
        table.set_right_to_left(true);
    }
    write_plan_table(table, plan, &heading)?;

    let path = dir.join(WORKBOOK_FILENAME);
    workbook.save(&path)?;
    Ok(path)
}

fn write_overview(sheet: &mut Worksheet, plan: &Plan, heading: &Format) -> Result<()> {
    sheet.set_column_width(0, 28)?;
    sheet.set_column_width(1, 60)?;

    let mut row = 0u32;

    sheet.write_string_with_format(row, 0, "Vision", heading)?;
    sheet.write_string(row, 1, plan.vision.as_str())?;
    row += 2;

    sheet.write_string_with_format(row, 0, "Goals", heading)?;
    row += 1;
    for goal in &plan.goals {
        sheet.write_string(row, 1, goal.text.as_str())?;
        row += 1;
    }
    row += 1;

    for category in SwotCategory::ALL {
        sheet.write_string_with_format(row, 0, category.label(), heading)?;
        row += 1;
        for entry in plan.swot.entries(category) {
            sheet.write_string(row, 1, entry.as_str())?;
            row += 1;
        }
        row += 1;
    }

    sheet.write_string_with_format(row, 0, "Constraints", heading)?;
    sheet.write_string(row, 1, plan.constraints.as_str())?;

    Ok(())
}

fn write_plan_table(sheet: &mut Worksheet, plan: &Plan, heading: &Format) -> Result<()> {
    const HEADERS: [&str; 5] = ["Goal", "Objective", "Task", "Responsibility", "Timeline"];

    for (column, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, column as u16, *header, heading)?;
        sheet.set_column_width(column as u16, 32)?;
    }

    for (index, row) in views::summary_table(plan).iter().enumerate() {
        let excel_row = index as u32 + 1;
        sheet.write_string(excel_row, 0, row.goal.as_str())?;
        sheet.write_string(excel_row, 1, row.objective.as_str())?;
        sheet.write_string(excel_row, 2, row.task.as_str())?;
        sheet.write_string(excel_row, 3, row.responsibility.as_str())?;
        sheet.write_string(excel_row, 4, row.timeline.as_str())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn sample_plan() -> Plan {
        let mut plan = Plan::new();
        plan.vision = "A leading service".to_string();
        plan.swot.strengths.push("Experienced team".to_string());
        plan.constraints = "Budget".to_string();
        let id = plan.alloc_goal_id();
        plan.goals.push(Goal {
            id,
            text: "Reduce wait times".to_string(),
        });
        plan
    }

    #[test]
    fn workbook_is_written_with_deterministic_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_workbook(&sample_plan(), dir.path(), SpreadsheetOptions::default())
            .expect("workbook written");

        assert_eq!(path.file_name().unwrap(), WORKBOOK_FILENAME);
        let metadata = std::fs::metadata(&path).expect("file exists");
        assert!(metadata.len() > 0);
    }

    #[test]
    fn workbook_honors_ltr_option() {
        let dir = tempfile::tempdir().expect("temp dir");
        let options = SpreadsheetOptions {
            right_to_left: false,
        };
        let path = write_workbook(&sample_plan(), dir.path(), options).expect("workbook written");
        assert!(path.exists());
    }

    #[test]
    fn empty_plan_still_produces_a_workbook() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_workbook(&Plan::new(), dir.path(), SpreadsheetOptions::default())
            .expect("workbook written");
        assert!(path.exists());
    }
}
