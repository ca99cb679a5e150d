//! Trial records - what to run and how it went

use std::time::Duration;

use crate::workload::Workload;

/// Separator written under each trial header.
pub const TRIAL_SEPARATOR: &str = "------------------------------------------";

/// Final status of a finished trial.
///
/// Only used to describe an outcome; the runner keeps no per-trial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialStatus {
    /// Workload returned normally.
    Completed,
    /// Workload returned an error or panicked.
    Failed,
}

/// One named, independently timed workload.
#[derive(Debug, Clone)]
pub struct TrialSpec {
    title: String,
    purpose: String,
    detail: String,
    workload: Workload,
}

impl TrialSpec {
    /// Declare a trial.
    ///
    /// # Arguments
    ///
    /// * `title` - Name shown in the `[TEST]` header
    /// * `purpose` - What the trial measures
    /// * `detail` - Free-text description of the workload
    /// * `workload` - Work to time
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        purpose: impl Into<String>,
        detail: impl Into<String>,
        workload: Workload,
    ) -> Self {
        Self {
            title: title.into(),
            purpose: purpose.into(),
            detail: detail.into(),
            workload,
        }
    }

    /// Get the trial title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the purpose text.
    #[must_use]
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Get the detail text.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Get the workload.
    #[must_use]
    pub const fn workload(&self) -> Workload {
        self.workload
    }

    /// Header block written before the workload runs, in report order.
    #[must_use]
    pub fn header_lines(&self) -> [String; 4] {
        [
            format!("[TEST] {}", self.title),
            format!("Purpose : {}", self.purpose),
            format!("Spec    : {}", self.detail),
            TRIAL_SEPARATOR.to_string(),
        ]
    }
}

/// Result of a single trial: a timing or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome {
    /// Workload returned normally after `elapsed`.
    Completed {
        /// Monotonic time spent inside the workload.
        elapsed: Duration,
    },
    /// Workload failed; no timing is recorded.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl TrialOutcome {
    /// Status label for this outcome.
    #[must_use]
    pub const fn status(&self) -> TrialStatus {
        match self {
            Self::Completed { .. } => TrialStatus::Completed,
            Self::Failed { .. } => TrialStatus::Failed,
        }
    }

    /// Elapsed time, for completed trials only.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::Completed { elapsed } => Some(*elapsed),
            Self::Failed { .. } => None,
        }
    }

    /// The `Result  :` line for the report.
    #[must_use]
    pub fn result_line(&self) -> String {
        match self {
            Self::Completed { elapsed } => {
                format!("Result  : {} sec", format_elapsed(*elapsed))
            }
            Self::Failed { message } => {
                format!("Result  : ERROR - {}", single_line(message))
            }
        }
    }
}

/// Render a duration as seconds with exactly four fractional digits.
///
/// Rounds to nearest.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.4}", elapsed.as_secs_f64())
}

/// Collapse line breaks so a message never splits its report line.
fn single_line(message: &str) -> String {
    message.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_four_digits() {
        assert_eq!(format_elapsed(Duration::ZERO), "0.0000");
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5000");
        assert_eq!(format_elapsed(Duration::from_micros(123_456)), "0.1235");
        assert_eq!(format_elapsed(Duration::from_micros(40)), "0.0000");
    }

    #[test]
    fn test_result_lines() {
        let ok = TrialOutcome::Completed {
            elapsed: Duration::from_millis(250),
        };
        assert_eq!(ok.result_line(), "Result  : 0.2500 sec");
        assert_eq!(ok.status(), TrialStatus::Completed);
        assert_eq!(ok.elapsed(), Some(Duration::from_millis(250)));

        let err = TrialOutcome::Failed {
            message: "boom".to_string(),
        };
        assert_eq!(err.result_line(), "Result  : ERROR - boom");
        assert_eq!(err.status(), TrialStatus::Failed);
        assert_eq!(err.elapsed(), None);
    }

    #[test]
    fn test_multiline_message_stays_on_one_line() {
        let err = TrialOutcome::Failed {
            message: "line1\nline2\r\nline3".to_string(),
        };
        assert_eq!(err.result_line(), "Result  : ERROR - line1 line2 line3");
    }

    #[test]
    fn test_header_lines_order() {
        let spec = TrialSpec::new("Title", "Why", "How", Workload::StringConcat { iterations: 1 });
        let lines = spec.header_lines();
        assert_eq!(lines[0], "[TEST] Title");
        assert_eq!(lines[1], "Purpose : Why");
        assert_eq!(lines[2], "Spec    : How");
        assert_eq!(lines[3], TRIAL_SEPARATOR);
    }
}
