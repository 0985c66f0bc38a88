//! # Status State Machine
//!
//! One human-readable status line. Progress milestones overwrite it freely;
//! the final "Loaded in X sec" text stays up until the user next moves the
//! camera, and a failure message stays up until the next load attempt.

use config::constants::ELAPSED_SIG_DIGITS;

/// Where the status text ends up (a DOM element in the browser).
pub trait StatusSink {
    /// Replaces the displayed text. An empty string clears the line.
    fn set_text(&mut self, text: &str);
}

/// The status line's state.
///
/// `ShowingResult` is the one state with a special exit: only a camera
/// interaction clears it. A failure is a sticky `Busy`: never cleared by
/// the camera, only overwritten by the next load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusState {
    Idle,
    Busy(String),
    ShowingResult(String),
}

/// Drives one status line through a sink.
#[derive(Debug)]
pub struct StatusStateMachine<S: StatusSink> {
    state: StatusState,
    sink: S,
}

impl<S: StatusSink> StatusStateMachine<S> {
    /// Creates the machine in `Idle` with the line cleared.
    pub fn new(mut sink: S) -> Self {
        sink.set_text("");
        Self {
            state: StatusState::Idle,
            sink,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &StatusState {
        &self.state
    }

    /// Returns the sink, e.g. for host-side inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Shows a progress message, overwriting whatever was displayed.
    ///
    /// Valid from any state; a new load interrupting `ShowingResult` lands
    /// here without waiting for a camera event.
    pub fn busy(&mut self, message: &str) {
        self.sink.set_text(message);
        self.state = StatusState::Busy(message.to_string());
    }

    /// Shows a failure message.
    ///
    /// Sticky: ignored by [`StatusStateMachine::camera_changed`], replaced
    /// only by the next load's first `busy`.
    pub fn fail(&mut self, message: &str) {
        self.busy(message);
    }

    /// Shows the load result and arms the camera-clear exit.
    pub fn show_result(&mut self, message: String) {
        self.sink.set_text(&message);
        self.state = StatusState::ShowingResult(message);
    }

    /// Observes a camera interaction.
    ///
    /// Clears the line and returns to `Idle` only from `ShowingResult`;
    /// camera activity during a load must not disturb the progress text.
    pub fn camera_changed(&mut self) {
        if matches!(self.state, StatusState::ShowingResult(_)) {
            self.sink.set_text("");
            self.state = StatusState::Idle;
        }
    }
}

/// Formats an elapsed time in seconds to the configured significant digits.
///
/// # Example
///
/// ```rust
/// use step_pipeline::format_elapsed;
///
/// assert_eq!(format_elapsed(1.2345), "1.23");
/// assert_eq!(format_elapsed(0.04567), "0.0457");
/// assert_eq!(format_elapsed(12.789), "12.8");
/// ```
pub fn format_elapsed(seconds: f64) -> String {
    let digits = ELAPSED_SIG_DIGITS as i32;
    if !seconds.is_finite() || seconds <= 0.0 {
        return format!("{:.*}", (digits - 1) as usize, 0.0);
    }
    let magnitude = seconds.log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    format!("{seconds:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSink {
        texts: Vec<String>,
    }

    impl StatusSink for RecordingSink {
        fn set_text(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }
    }

    fn last_text(machine: &StatusStateMachine<RecordingSink>) -> &str {
        machine.sink().texts.last().map(String::as_str).unwrap_or("")
    }

    #[test]
    fn starts_idle_with_a_cleared_line() {
        let machine = StatusStateMachine::new(RecordingSink::default());
        assert_eq!(machine.state(), &StatusState::Idle);
        assert_eq!(machine.sink().texts, vec![""]);
    }

    #[test]
    fn camera_during_busy_leaves_the_text_alone() {
        let mut machine = StatusStateMachine::new(RecordingSink::default());
        machine.busy("Parsing & triangulating...");

        machine.camera_changed();

        assert_eq!(machine.state(), &StatusState::Busy("Parsing & triangulating...".into()));
        assert_eq!(last_text(&machine), "Parsing & triangulating...");
    }

    #[test]
    fn camera_clears_a_shown_result() {
        let mut machine = StatusStateMachine::new(RecordingSink::default());
        machine.show_result("Loaded in 1.23 sec".to_string());

        machine.camera_changed();

        assert_eq!(machine.state(), &StatusState::Idle);
        assert_eq!(last_text(&machine), "");
    }

    #[test]
    fn a_new_load_interrupts_a_shown_result() {
        let mut machine = StatusStateMachine::new(RecordingSink::default());
        machine.show_result("Loaded in 1.23 sec".to_string());

        machine.busy("Uploading...");

        assert_eq!(machine.state(), &StatusState::Busy("Uploading...".into()));
    }

    #[test]
    fn failure_text_is_sticky_against_camera_events() {
        let mut machine = StatusStateMachine::new(RecordingSink::default());
        machine.fail("compute error: background computation failed: oops");

        machine.camera_changed();

        assert!(matches!(machine.state(), StatusState::Busy(_)));
        assert!(last_text(&machine).contains("oops"));
    }

    #[test]
    fn format_elapsed_keeps_three_significant_digits() {
        assert_eq!(format_elapsed(0.001234), "0.00123");
        assert_eq!(format_elapsed(0.1234), "0.123");
        assert_eq!(format_elapsed(1.2345), "1.23");
        assert_eq!(format_elapsed(12.345), "12.3");
        assert_eq!(format_elapsed(123.45), "123");
    }

    #[test]
    fn format_elapsed_handles_degenerate_inputs() {
        assert_eq!(format_elapsed(0.0), "0.00");
        assert_eq!(format_elapsed(-1.0), "0.00");
        assert_eq!(format_elapsed(f64::NAN), "0.00");
    }
}
