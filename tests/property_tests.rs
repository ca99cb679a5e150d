//! Property-based tests for trialbench
//!
//! - Elapsed formatting invariants
//! - Exactly one well-formed Result line per trial
//! - Run with ProptestConfig::with_cases(100)

use std::time::Duration;

use proptest::prelude::*;
use trialbench::{
    format_elapsed, Error, Reporter, Result, TrialOutcome, TrialRunner, TrialSpec, Workload,
};

fn ok() -> Result<()> {
    Ok(())
}

fn fail() -> Result<()> {
    Err(Error::workload("planned failure"))
}

fn arb_workload() -> impl Strategy<Value = Workload> {
    prop_oneof![
        Just(Workload::Function(ok)),
        Just(Workload::Function(fail)),
        (0_usize..50).prop_map(|iterations| Workload::StringConcat { iterations }),
        (0_u64..200).prop_map(|len| Workload::MapFilterFold { len }),
    ]
}

fn is_timing_line(line: &str) -> bool {
    line.strip_prefix("Result  : ")
        .and_then(|rest| rest.strip_suffix(" sec"))
        .is_some_and(|value| value.parse::<f64>().is_ok_and(|secs| secs >= 0.0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: elapsed always renders with four fractional digits
    #[test]
    fn prop_elapsed_has_four_digits(nanos in 0_u64..1_000_000_000_000) {
        let text = format_elapsed(Duration::from_nanos(nanos));
        let (whole, frac) = text.split_once('.').unwrap();
        prop_assert_eq!(frac.len(), 4);
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(text.parse::<f64>().unwrap() >= 0.0);
    }

    /// Property: one Result line per trial, matching the outcome kind
    #[test]
    fn prop_one_result_line_per_trial(
        workloads in proptest::collection::vec(arb_workload(), 0..8)
    ) {
        let specs: Vec<TrialSpec> = workloads
            .iter()
            .enumerate()
            .map(|(i, w)| TrialSpec::new(format!("trial-{i}"), "p", "d", *w))
            .collect();

        let mut runner = TrialRunner::new(Reporter::from_writer(Vec::new()), "END");
        let mut outcomes = Vec::new();
        for spec in &specs {
            outcomes.push(runner.run(spec).unwrap());
        }

        let bytes = runner.into_reporter().into_inner().unwrap();
        let report = String::from_utf8(bytes).unwrap();
        let results: Vec<&str> = report
            .lines()
            .filter(|line| line.starts_with("Result  : "))
            .collect();

        prop_assert_eq!(results.len(), specs.len());
        for (line, outcome) in results.iter().zip(&outcomes) {
            match outcome {
                TrialOutcome::Completed { .. } => prop_assert!(is_timing_line(line)),
                TrialOutcome::Failed { message } => {
                    prop_assert_eq!(*line, format!("Result  : ERROR - {message}"));
                }
            }
        }
    }
}
