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

//! Statistics computation over collected measurements.
//!
//! Statistics are derived from successful measurements only. A case with no
//! successful measurement has no statistics at all, which keeps "did not
//! execute" distinct from "executed in zero time".

use crate::core::Measurement;
use crate::harness::runner::CaseSummary;
use std::time::Duration;

/// Statistical summary of one case's measurements.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Statistics {
    /// Minimum elapsed time.
    pub min: Duration,
    /// Median elapsed time.
    pub median: Duration,
    /// Mean elapsed time.
    pub mean: Duration,
    /// Maximum elapsed time.
    pub max: Duration,
    /// Standard deviation of elapsed times.
    pub std_dev: Duration,
    /// Number of successful measurements.
    pub count: usize,
}

/// Run-level totals across all cases.
#[derive(Debug, Clone)]
pub struct RunTotals {
    /// Number of cases in the run.
    pub cases: usize,
    /// Cases with at least one successful measurement.
    pub measured_cases: usize,
    /// Total measured time across all cases.
    pub total_measured: Duration,
    /// Label of the case with the smallest mean.
    pub fastest: Option<String>,
    /// Label of the case with the largest mean.
    pub slowest: Option<String>,
}

/// Computes the statistical summary of a case's measurements.
///
/// # Arguments
///
/// * `measurements` - Successful measurements for one case
///
/// # Returns
///
/// `None` when the slice is empty, so absent statistics are never confused
/// with zero-duration ones.
pub fn compute_statistics(measurements: &[Measurement]) -> Option<Statistics> {
    if measurements.is_empty() {
        return None;
    }

    let mut durations: Vec<Duration> = measurements.iter().map(|m| m.elapsed).collect();
    durations.sort();

    let total: Duration = durations.iter().sum();
    let mean = total / durations.len() as u32;

    let variance: f64 = durations
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean.as_nanos() as f64;
            diff * diff
        })
        .sum::<f64>()
        / durations.len() as f64;

    let std_dev = Duration::from_nanos(variance.sqrt() as u64);

    Some(Statistics {
        min: durations[0],
        median: durations[durations.len() / 2],
        mean,
        max: durations[durations.len() - 1],
        std_dev,
        count: durations.len(),
    })
}

/// Aggregates run-level totals from per-case summaries.
///
/// Fastest and slowest are ranked by mean elapsed time; cases without
/// statistics are skipped.
pub fn aggregate_run(summaries: &[CaseSummary]) -> RunTotals {
    let total_measured: Duration = summaries
        .iter()
        .flat_map(|s| s.measurements.iter())
        .map(|m| m.elapsed)
        .sum();

    let fastest = summaries
        .iter()
        .filter_map(|s| s.stats.as_ref().map(|st| (s.label.clone(), st.mean)))
        .min_by_key(|(_, mean)| *mean)
        .map(|(label, _)| label);

    let slowest = summaries
        .iter()
        .filter_map(|s| s.stats.as_ref().map(|st| (s.label.clone(), st.mean)))
        .max_by_key(|(_, mean)| *mean)
        .map(|(label, _)| label);

    RunTotals {
        cases: summaries.len(),
        measured_cases: summaries.iter().filter(|s| s.stats.is_some()).count(),
        total_measured,
        fastest,
        slowest,
    }
}
