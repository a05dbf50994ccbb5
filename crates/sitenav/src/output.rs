//! Terminal output utilities.
//!
//! Status messages go to stderr so stdout carries only rendered markup.

use std::io::{self, Write};

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }
}

/// Write rendered markup to stdout.
pub(crate) fn emit(markup: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(markup.as_bytes())?;
    if !markup.is_empty() && !markup.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
