// Dweve Faceoff - Head-to-Head Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sequential run execution.
//!
//! Cases and iterations execute strictly one after another on the calling
//! thread. Interleaving competing implementations would let scheduler noise
//! and cache contention bleed between cases and corrupt the comparison.
//! There is no cancellation mid-iteration; callers wanting timeouts build
//! them into the operation itself.

use crate::core::config::RunConfig;
use crate::core::{memory, Case, Measurement};
use crate::error::{BenchError, Result};
use crate::harness::aggregator::{compute_statistics, Statistics};
use crate::harness::comparator::{self, Verdict};
use std::time::Instant;

/// Frozen result of one case after a run.
///
/// Summaries come back in the same order the cases went in. A case that
/// failed before producing any measurement has `stats: None` and a
/// populated `failure`; a case whose output merely differed from the
/// baseline keeps all its timing data and reports `Verdict::Failed`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CaseSummary {
    /// Case label.
    pub label: String,
    /// Requested measured iterations.
    pub iterations: u64,
    /// Measurements collected before the case finished or failed.
    pub measurements: Vec<Measurement>,
    /// Derived statistics; absent when no iteration succeeded.
    pub stats: Option<Statistics>,
    /// Equivalence verdict against the baseline case.
    pub verdict: Verdict,
    /// Preserved error text when the operation failed.
    pub failure: Option<String>,
}

impl CaseSummary {
    /// Returns the number of successful measurements.
    pub fn completed(&self) -> u64 {
        self.measurements.len() as u64
    }

    /// Returns whether the case produced no successful measurement.
    pub fn all_failed(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Returns the mean of recorded memory deltas in bytes, if any
    /// iteration measured memory.
    pub fn mean_memory_delta(&self) -> Option<i64> {
        let deltas: Vec<i64> = self
            .measurements
            .iter()
            .filter_map(|m| m.memory_delta)
            .collect();
        if deltas.is_empty() {
            None
        } else {
            Some(deltas.iter().sum::<i64>() / deltas.len() as i64)
        }
    }
}

/// Measurements and captured state for one executed case.
struct CaseExecution<T> {
    label: String,
    measurements: Vec<Measurement>,
    last_output: Option<T>,
    failure: Option<String>,
}

/// Runs every case under one configuration, comparing outputs with `==`.
///
/// The first case is the baseline for equivalence checking. Summaries are
/// returned in input order.
///
/// # Errors
///
/// `BenchError::InvalidConfig` when `config.iterations` is zero or `cases`
/// is empty, before any operation is invoked.
///
/// # Example
///
/// ```
/// use faceoff::{run, Case, RunConfig};
///
/// let cases = vec![
///     Case::infallible("sum", || (1..=100u64).sum::<u64>()),
///     Case::infallible("formula", || 100u64 * 101 / 2),
/// ];
/// let config = RunConfig::default().with_equivalence_check(true);
/// let summaries = run(cases, &config).unwrap();
/// assert!(summaries.iter().all(|s| s.verdict.as_str() == "pass"));
/// ```
pub fn run<T: PartialEq>(cases: Vec<Case<T>>, config: &RunConfig) -> Result<Vec<CaseSummary>> {
    run_with(cases, config, |left: &T, right: &T| left == right)
}

/// Runs every case under one configuration with a caller-supplied equality
/// predicate.
///
/// Use this when outputs need fuzzy comparison, e.g. coordinates that agree
/// within a tolerance.
pub fn run_with<T, Q>(mut cases: Vec<Case<T>>, config: &RunConfig, eq: Q) -> Result<Vec<CaseSummary>>
where
    Q: Fn(&T, &T) -> bool,
{
    config.validate()?;
    if cases.is_empty() {
        return Err(BenchError::InvalidConfig {
            parameter: "cases".to_string(),
            reason: "at least one case is required".to_string(),
        });
    }

    let mut executions = Vec::with_capacity(cases.len());
    for case in &mut cases {
        executions.push(execute_case(case, config));
    }

    let outputs: Vec<Option<&T>> = executions.iter().map(|e| e.last_output.as_ref()).collect();
    let verdicts = comparator::judge(&outputs, config.check_equivalence, &eq);
    drop(outputs);

    let summaries = executions
        .into_iter()
        .zip(verdicts)
        .map(|(execution, verdict)| {
            let stats = compute_statistics(&execution.measurements);
            CaseSummary {
                label: execution.label,
                iterations: config.iterations,
                measurements: execution.measurements,
                stats,
                verdict,
                failure: execution.failure,
            }
        })
        .collect();

    Ok(summaries)
}

/// Executes one case: warmup first, then measured iterations until done or
/// the operation fails.
fn execute_case<T>(case: &mut Case<T>, config: &RunConfig) -> CaseExecution<T> {
    let mut measurements = Vec::with_capacity(config.iterations as usize);
    let mut last_output = None;
    let mut failure = None;

    for _ in 0..config.warmup {
        if let Err(err) = case.invoke() {
            failure = Some(err.to_string());
            break;
        }
    }

    if failure.is_none() {
        for _ in 0..config.iterations {
            let before = if config.track_memory {
                memory::resident_bytes()
            } else {
                None
            };

            let start = Instant::now();
            let outcome = case.invoke();
            let elapsed = start.elapsed();

            match outcome {
                Ok(value) => {
                    let memory_delta =
                        before.and_then(|pre| memory::resident_bytes().map(|post| post - pre));
                    measurements.push(Measurement {
                        elapsed,
                        memory_delta,
                    });
                    last_output = Some(value);
                }
                Err(err) => {
                    failure = Some(err.to_string());
                    break;
                }
            }
        }
    }

    CaseExecution {
        label: case.label().to_string(),
        measurements,
        last_output,
        failure,
    }
}
