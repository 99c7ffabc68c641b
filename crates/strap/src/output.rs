//! Render status lines on stderr.
//!
//! Stdout is reserved for rendered HTML when no output file is configured.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
    dim: Style,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            dim: Style::new().dim(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    pub(crate) fn config_loaded(&self, path: &Path) {
        self.line(&self.dim, format_args!("Using {}", path.display()));
    }

    pub(crate) fn accumulation_disabled(&self) {
        self.line(
            &self.yellow,
            "Accumulation is disabled; the rendered page will be empty",
        );
    }

    /// Page written to `path` with `bytes` of markup.
    pub(crate) fn rendered(&self, path: &Path, bytes: usize) {
        self.line(
            &self.green,
            format_args!("Rendered {} ({bytes} bytes)", path.display()),
        );
    }

    pub(crate) fn failed(&self, err: &impl Display) {
        self.line(&self.red, format_args!("Error: {err}"));
    }

    fn line(&self, style: &Style, msg: impl Display) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
