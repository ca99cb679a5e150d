//! # trialbench: Sequential Microbenchmark Harness
//!
//! Runs a fixed list of named workloads one after another, times each with a
//! monotonic clock, and appends a plain-text report to a file.
//!
//! ## Report Layout
//!
//! ```text
//! ========== RUST BENCHMARK REPORT ==========
//! Rust Harness  : trialbench 0.1.0 (release build)
//! System        : linux x86_64
//! --------------------------------------------------
//!
//! [TEST] <title>
//! Purpose : <purpose>
//! Spec    : <detail>
//! ------------------------------------------
//! Result  : 0.0123 sec            (or: Result  : ERROR - <message>)
//!
//! ========== END OF REPORT ==========
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trialbench::{run_report, standard_trials, HarnessConfig};
//!
//! let config = HarnessConfig::builder()
//!     .output_path("results.txt")
//!     .build();
//! let summary = run_report(&config, &standard_trials())?;
//! println!("{} trials, {} failed", summary.total(), summary.failed);
//! # Ok::<(), trialbench::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod trial;
pub mod workload;

pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use harness::{run_report, RunSummary, TrialRunner};
pub use report::Reporter;
pub use trial::{format_elapsed, TrialOutcome, TrialSpec, TrialStatus};
pub use workload::{standard_trials, Workload};
