//! Terminal rendering module for rich markdown output
//!
//! Renders the crate's markdown output using termimad, with a plain-text
//! fallback. The advisory service returns lightweight markup only (headings,
//! bullets, bold, `|`-delimited table rows), so rendering is line-oriented:
//! headings and table rows are handled directly, everything else goes
//! through the termimad skin. No full commonmark compliance is attempted.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
            return;
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hash markers visible so heading depth stays clear.
                println!("\x1b[36m{line}\x1b[0m");
            } else if line.starts_with('|') {
                // Table rows pass through untouched; termimad's inline
                // renderer would mangle the pipes.
                println!("{line}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
