//! Export serializers consuming the final plan.
//!
//! Two artifacts: a printable markdown document ([`document`]) and a
//! two-sheet spreadsheet workbook ([`spreadsheet`]). Both are built from the
//! same derived views the summary screen uses, so what the user saw is what
//! gets exported — including the placeholder rows for childless goals and
//! objectives.

pub mod document;
pub mod spreadsheet;

pub use document::{PrintDocument, DOCUMENT_FILENAME};
pub use spreadsheet::{write_workbook, SpreadsheetOptions, WORKBOOK_FILENAME};
