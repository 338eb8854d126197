use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the Charter work-plan workshop
///
/// Charter walks a service manager through authoring a strategic annual work
/// plan step by step: background mapping, SWOT analysis, vision, goals,
/// SMART objectives, tasks, and constraints. At the summary step an AI
/// advisory service produces a narrative report, and the finished plan can
/// be exported as a printable document or a spreadsheet workbook.
#[derive(Parser)]
#[command(version, about, name = "charter")]
pub struct Args {
    /// API key for the advisory service. Defaults to the GEMINI_API_KEY
    /// environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the advisory service base URL (testing and proxies)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Write spreadsheet sheets left-to-right instead of right-to-left
    #[arg(long)]
    pub ltr: bool,

    /// Directory where exported files are written. Defaults to the current
    /// directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
