//! Application service: job progress monitoring use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use tracing::debug;

use crate::application::ports::{JobEventSource, JobProgressPresenter};
use crate::domain::{JobOutcome, JobState};

/// Drain `events` until the producer closes the stream, reporting each
/// event to `presenter`.
///
/// A COMPLETE event is recorded but never ends the loop, and
/// `wait_for_completion` does not either: the producer already received it
/// when the stream was created and alone decides when to stop.
pub async fn monitor_job(
    events: &mut impl JobEventSource,
    presenter: &impl JobProgressPresenter,
    wait_for_completion: bool,
) -> JobOutcome {
    let mut previous_state: Option<JobState> = None;
    let mut reached_complete = false;

    while let Some(event) = events.next_event().await {
        debug!(state = %event.state, wait_for_completion, "job event");

        if previous_state.as_ref() == Some(&event.state) {
            presenter.still_in_state();
        } else {
            presenter.state_changed(&event.state);
        }

        if event.state == JobState::Complete {
            reached_complete = true;
        }
        previous_state = Some(event.state);
    }

    let outcome = if reached_complete {
        JobOutcome::Completed
    } else {
        JobOutcome::InProgress
    };
    presenter.finished(outcome);
    outcome
}
