//! Run the standard trial list and write the report.
//!
//! Run with: cargo run --release

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use trialbench::{run_report, standard_trials, HarnessConfig};

const TRACE_FILTER: &str = "trialbench=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(TRACE_FILTER))
        .with_writer(std::io::stderr)
        .init();

    let config = HarnessConfig::default();
    let summary = run_report(&config, &standard_trials()).with_context(|| {
        format!(
            "benchmark run aborted (report: {})",
            config.output_path().display()
        )
    })?;

    tracing::info!(
        path = %config.output_path().display(),
        trials = summary.total(),
        failed = summary.failed,
        "report written"
    );
    Ok(())
}
