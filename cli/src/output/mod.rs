//! Presentation layer: terminal styling and the human/JSON renderers.

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::Warnings;

/// Terminal output shared by every command: the active stylesheet and the
/// quiet flag. Warnings and results go to stdout; `--quiet` silences all
/// of it except what a command exists to print.
pub struct OutputContext {
    pub styles: Styles,
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are used only on a TTY, and never with `--no-color` or
    /// `NO_COLOR` set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();
        let styles = if use_colors {
            Styles::colored()
        } else {
            Styles::default()
        };
        Self { styles, quiet }
    }

    pub fn text(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// `⚠ msg`
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print platform warnings in the order they were received.
    pub fn warnings(&self, warnings: &Warnings) {
        for warning in warnings {
            self.warn(warning);
        }
    }

    /// Print platform warnings to stderr, where they cannot corrupt JSON on
    /// stdout. Not affected by `--quiet`.
    pub fn warnings_to_stderr(&self, warnings: &Warnings) {
        for warning in warnings {
            eprintln!("  {} {warning}", "⚠".style(self.styles.warning));
        }
    }

    /// `ℹ msg`
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Key/value line with the key dimmed.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }

    /// Closing `OK` of a successful command.
    pub fn ok(&self) {
        if !self.quiet {
            println!("{}", "OK".style(self.styles.success));
        }
    }
}

/// Renderer selected by the output mode.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}
