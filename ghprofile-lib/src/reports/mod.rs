//! Text rendering of a resolved profile.
//!
//! The console report is the only format. It writes into any
//! [`core::fmt::Write`], so callers choose between a terminal, a buffer, or a
//! test string. All presentation choices travel in [`ReportOptions`].

mod console;
pub mod icons;

pub use console::generate as generate_console;

/// Presentation options for the console report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of top-starred repositories to list.
    pub top_n: usize,

    /// Show Nerd Font icons next to labels.
    pub icons: bool,

    /// Draw a rounded border around the card.
    pub border: bool,

    /// Emit ANSI colors.
    pub colors: bool,

    /// Card width in columns; `None` uses the terminal width.
    pub width: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            icons: true,
            border: true,
            colors: true,
            width: None,
        }
    }
}
