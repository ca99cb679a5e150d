//! Workloads - the units of work timed by a trial
//!
//! Each workload is a plain data value naming a pure function and its size,
//! so the trial list is an ordinary `Vec` with no captured state.

use std::hint::black_box;

use serde::{Deserialize, Serialize};

use crate::trial::TrialSpec;
use crate::{Error, Result};

/// Signature of a user-registered workload.
pub type WorkloadFn = fn() -> Result<()>;

/// Work to be timed.
#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Sum `sqrt(i)` for `i` in `0..iterations`.
    SqrtSum {
        /// Loop count
        iterations: u64,
    },
    /// Push `count` three-field records into a growing `Vec`.
    RecordAllocation {
        /// Records to allocate
        count: usize,
    },
    /// Encode and decode a record carrying `entries` strings, `iterations` times.
    JsonRoundTrip {
        /// Round trips
        iterations: usize,
        /// Length of the payload list
        entries: usize,
    },
    /// Append a short literal to a `String`, `iterations` times.
    StringConcat {
        /// Append count
        iterations: usize,
    },
    /// Double, keep multiples of three, then sum, over `0..len`.
    MapFilterFold {
        /// Sequence length
        len: u64,
    },
    /// Registered function.
    Function(WorkloadFn),
}

impl Workload {
    /// Execute the workload once.
    ///
    /// # Errors
    ///
    /// Propagates whatever the workload reports.
    pub fn run(self) -> Result<()> {
        match self {
            Self::SqrtSum { iterations } => {
                black_box(sqrt_sum(iterations));
                Ok(())
            }
            Self::RecordAllocation { count } => {
                black_box(allocate_records(count));
                Ok(())
            }
            Self::JsonRoundTrip {
                iterations,
                entries,
            } => json_round_trip(iterations, entries),
            Self::StringConcat { iterations } => {
                black_box(concat_literal(iterations));
                Ok(())
            }
            Self::MapFilterFold { len } => {
                black_box(map_filter_fold(len));
                Ok(())
            }
            Self::Function(f) => f(),
        }
    }
}

/// Small composite record allocated by [`Workload::RecordAllocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    /// First field
    pub a: usize,
    /// Second field
    pub b: usize,
    /// Third field
    pub c: usize,
}

/// Record encoded by [`Workload::JsonRoundTrip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Fixed scalar id
    pub id: u32,
    /// Record name
    pub name: String,
    /// Repeated string entries
    pub payload: Vec<String>,
}

impl Payload {
    /// The benchmark record: id 123, name "benchmark", `entries` copies of "data".
    #[must_use]
    pub fn sample(entries: usize) -> Self {
        Self {
            id: 123,
            name: "benchmark".to_string(),
            payload: vec!["data".to_string(); entries],
        }
    }
}

/// Floating-point accumulation of square roots.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sqrt_sum(iterations: u64) -> f64 {
    let mut sum = 0.0_f64;
    for i in 0..iterations {
        sum += black_box(i as f64).sqrt();
    }
    sum
}

/// Allocate `count` records into one growing vector.
#[must_use]
pub fn allocate_records(count: usize) -> Vec<Triple> {
    let mut records = Vec::new();
    for i in 0..count {
        records.push(Triple {
            a: i,
            b: i + 1,
            c: i + 2,
        });
    }
    records
}

/// Encode/decode the sample record `iterations` times.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the codec fails and
/// [`Error::Workload`] if a decoded record differs from the original.
pub fn json_round_trip(iterations: usize, entries: usize) -> Result<()> {
    let record = Payload::sample(entries);
    for _ in 0..iterations {
        let text = serde_json::to_string(black_box(&record))?;
        let decoded: Payload = serde_json::from_str(&text)?;
        if decoded != record {
            return Err(Error::workload("decoded payload does not match original"));
        }
    }
    Ok(())
}

/// Build a string by repeated appends of `"abc"`.
#[must_use]
pub fn concat_literal(iterations: usize) -> String {
    let mut text = String::new();
    for _ in 0..iterations {
        text.push_str(black_box("abc"));
    }
    text
}

/// Map (x2), filter (multiple of 3), fold (sum) over `0..len`.
#[must_use]
pub fn map_filter_fold(len: u64) -> u64 {
    let values: Vec<u64> = (0..len).collect();
    let doubled: Vec<u64> = values.into_iter().map(|x| x * 2).collect();
    let kept: Vec<u64> = doubled.into_iter().filter(|x| x % 3 == 0).collect();
    kept.into_iter().sum()
}

/// The standard trial list, in report order.
#[must_use]
pub fn standard_trials() -> Vec<TrialSpec> {
    vec![
        TrialSpec::new(
            "Math Loop (sqrt)",
            "Measure floating-point computation throughput",
            "Loop 1e7 times using f64::sqrt",
            Workload::SqrtSum {
                iterations: 10_000_000,
            },
        ),
        TrialSpec::new(
            "Object Allocation",
            "Stress-test heap allocation and vector growth",
            "Create 1 million small structs in a Vec",
            Workload::RecordAllocation { count: 1_000_000 },
        ),
        TrialSpec::new(
            "JSON Encode/Decode",
            "Test serde_json to_string + from_str performance",
            "10,000 iterations on 1000-entry object",
            Workload::JsonRoundTrip {
                iterations: 10_000,
                entries: 1_000,
            },
        ),
        TrialSpec::new(
            "String Concatenation",
            "Measure string builder performance",
            "Concatenate 'abc' 10,000 times",
            Workload::StringConcat { iterations: 10_000 },
        ),
        TrialSpec::new(
            "Array Ops (map + filter + reduce)",
            "Test functional iterator operation throughput",
            "map, filter, fold on 10,000 elements",
            Workload::MapFilterFold { len: 10_000 },
        ),
    ]
}
