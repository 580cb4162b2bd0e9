//! `JobProgressPresenter` implementations for the delete-service command.
//!
//! The terminal presenter writes through `&OutputContext` styling so the job
//! monitor can report progress without depending on any presentation type.

use std::cell::RefCell;
use std::io::{Stdout, Write};

use owo_colors::OwoColorize as _;

use crate::application::ports::JobProgressPresenter;
use crate::domain::{JobOutcome, JobState};
use crate::output::OutputContext;

/// Terminal presenter for the deletion of one service instance.
///
/// - `state_changed()` starts a new line naming the state
/// - `still_in_state()` prints `.` on the current line
/// - `finished()` prints the deleted / still-in-progress message
///
/// All output is suppressed when `ctx.quiet`. Write failures are ignored;
/// progress output is best effort.
pub struct TerminalJobPresenter<'a, W: Write = Stdout> {
    ctx: &'a OutputContext,
    instance_name: &'a str,
    out: RefCell<W>,
}

impl<'a> TerminalJobPresenter<'a> {
    /// Create a presenter for the service instance `instance_name` that
    /// writes to stdout.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, instance_name: &'a str) -> Self {
        Self::with_writer(ctx, instance_name, std::io::stdout())
    }
}

impl<'a, W: Write> TerminalJobPresenter<'a, W> {
    #[must_use]
    pub fn with_writer(ctx: &'a OutputContext, instance_name: &'a str, out: W) -> Self {
        Self {
            ctx,
            instance_name,
            out: RefCell::new(out),
        }
    }

    /// Give back the writer, e.g. to inspect what was written.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, text: &str) {
        if self.ctx.quiet {
            return;
        }
        let mut out = self.out.borrow_mut();
        let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
    }
}

impl<W: Write> JobProgressPresenter for TerminalJobPresenter<'_, W> {
    fn state_changed(&self, state: &JobState) {
        let name = state.to_string();
        let styled = name.style(self.ctx.styles.state).to_string();
        self.emit(&format!("\n{}\n", state_change_line(&styled)));
    }

    fn still_in_state(&self) {
        self.emit(".");
    }

    fn finished(&self, outcome: JobOutcome) {
        self.emit(&format!("\n{}\n", outcome_line(outcome, self.instance_name)));
    }
}

/// Presenter that shows nothing, for `--json` runs where only the final
/// status object is printed.
pub struct SilentJobPresenter;

impl JobProgressPresenter for SilentJobPresenter {
    fn state_changed(&self, _state: &JobState) {}

    fn still_in_state(&self) {}

    fn finished(&self, _outcome: JobOutcome) {}
}

/// Line announcing a new job state.
#[must_use]
pub fn state_change_line(state: &str) -> String {
    format!("The job has changed to {state} state.")
}

/// Final line once the job stream has closed.
#[must_use]
pub fn outcome_line(outcome: JobOutcome, instance_name: &str) -> String {
    match outcome {
        JobOutcome::Completed => format!("Service instance {instance_name} deleted."),
        JobOutcome::InProgress => format!(
            "Delete in progress. Use 'stratus services' or 'stratus service {instance_name}' \
             to check operation status."
        ),
    }
}
