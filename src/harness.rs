//! Trial runner - times each trial and writes its block to the report
//!
//! Trials run strictly in declaration order on the calling thread. A trial
//! that fails (error or panic) gets an error line and the batch continues;
//! only a failing report sink stops the run.

use std::any::Any;
use std::fs::File;
use std::io::{LineWriter, Write};
use std::panic;
use std::time::Instant;

use crate::config::HarnessConfig;
use crate::report::Reporter;
use crate::trial::{TrialOutcome, TrialSpec};
use crate::workload::Workload;
use crate::{Error, Result};

/// Separator closing the report preamble.
pub const PREAMBLE_SEPARATOR: &str = "--------------------------------------------------";

/// Outcome counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Trials whose workload returned normally.
    pub completed: usize,
    /// Trials whose workload failed.
    pub failed: usize,
}

impl RunSummary {
    /// Total trials executed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.completed + self.failed
    }
}

/// Drives trials and reports their results.
#[derive(Debug)]
pub struct TrialRunner<W: Write> {
    reporter: Reporter<W>,
    footer: String,
}

impl<W: Write> TrialRunner<W> {
    /// Create a runner writing to `reporter` and closing with `footer`.
    pub fn new(reporter: Reporter<W>, footer: impl Into<String>) -> Self {
        Self {
            reporter,
            footer: footer.into(),
        }
    }

    /// Write the runtime and environment lines, a separator and a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the report cannot be written.
    pub fn write_preamble(&mut self, config: &HarnessConfig) -> Result<()> {
        self.reporter.append(config.runtime_line())?;
        self.reporter.append(config.environment_line())?;
        self.reporter.append(PREAMBLE_SEPARATOR)?;
        self.reporter.append_blank()
    }

    /// Run one trial: header block, timed workload, result line, blank line.
    ///
    /// Workload failures are returned as [`TrialOutcome::Failed`], not as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the report cannot be written.
    pub fn run(&mut self, spec: &TrialSpec) -> Result<TrialOutcome> {
        for line in spec.header_lines() {
            self.reporter.append(&line)?;
        }

        let outcome = execute(spec.workload());
        match &outcome {
            TrialOutcome::Completed { elapsed } => {
                tracing::info!(
                    trial = spec.title(),
                    elapsed_secs = elapsed.as_secs_f64(),
                    "trial completed"
                );
            }
            TrialOutcome::Failed { message } => {
                tracing::warn!(trial = spec.title(), error = %message, "trial failed");
            }
        }

        self.reporter.append(&outcome.result_line())?;
        self.reporter.append_blank()?;
        Ok(outcome)
    }

    /// Run every trial in order, then write the footer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the report cannot be written.
    pub fn run_all(&mut self, specs: &[TrialSpec]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for spec in specs {
            match self.run(spec)? {
                TrialOutcome::Completed { .. } => summary.completed += 1,
                TrialOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        self.reporter.append(&self.footer)?;

        tracing::info!(
            completed = summary.completed,
            failed = summary.failed,
            lines = self.reporter.lines_written(),
            "all trials finished"
        );
        Ok(summary)
    }

    /// Give back the reporter, e.g. to inspect an in-memory sink.
    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }
}

/// Truncate the report at `config.output_path()`, run `specs` and close the
/// report with the footer.
///
/// # Errors
///
/// Returns [`Error::ReportInit`] if the report cannot be created and
/// [`Error::Io`] if a later write fails. Trial failures are not errors.
pub fn run_report(config: &HarnessConfig, specs: &[TrialSpec]) -> Result<RunSummary> {
    let reporter: Reporter<LineWriter<File>> =
        Reporter::create(config.output_path(), config.banner())?;
    let mut runner = TrialRunner::new(reporter, config.footer());
    runner.write_preamble(config)?;
    let summary = runner.run_all(specs)?;
    runner.into_reporter().into_inner()?;
    Ok(summary)
}

/// Time a single workload invocation, catching errors and panics.
fn execute(workload: Workload) -> TrialOutcome {
    let start = Instant::now();
    let result = panic::catch_unwind(move || workload.run());
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(())) => TrialOutcome::Completed { elapsed },
        Ok(Err(err)) => TrialOutcome::Failed {
            message: err.to_string(),
        },
        Err(payload) => TrialOutcome::Failed {
            message: Error::Panicked(panic_message(payload.as_ref())).to_string(),
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "workload panicked".to_string()
    }
}
