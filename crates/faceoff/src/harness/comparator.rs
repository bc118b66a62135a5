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

//! Equivalence verdicts and baseline comparison.
//!
//! The first case of a run is the baseline. After execution, each case's
//! last captured output is compared against the baseline's with the run's
//! equality predicate. A mismatch is a soft failure: the verdict is
//! recorded and the timing data already collected is kept.

use crate::harness::runner::CaseSummary;

/// Outcome of the equivalence check for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    /// Output matched the baseline's.
    Passed,
    /// Output differed from the baseline's.
    Failed,
    /// No comparison was possible or checking was disabled.
    NotChecked,
}

impl Verdict {
    /// Returns the verdict as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Passed => "pass",
            Verdict::Failed => "fail",
            Verdict::NotChecked => "not checked",
        }
    }

    /// Returns whether this verdict is a mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verdict::Failed)
    }
}

/// Speed comparison of one case against the baseline case.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Comparison {
    /// Case label.
    pub label: String,
    /// Case mean in nanoseconds.
    pub mean_ns: u64,
    /// Baseline mean in nanoseconds.
    pub baseline_ns: u64,
    /// Percentage change versus baseline (positive = slower).
    pub change_pct: f64,
}

/// Assigns a verdict to every case from its last captured output.
///
/// `outputs` holds one entry per case, in run order; `None` marks a case
/// that never produced an output. The baseline is the first entry. When the
/// baseline itself has no output, nothing can be compared and every case is
/// `NotChecked`.
pub(crate) fn judge<T, Q>(outputs: &[Option<&T>], enabled: bool, eq: &Q) -> Vec<Verdict>
where
    Q: Fn(&T, &T) -> bool,
{
    if !enabled {
        return vec![Verdict::NotChecked; outputs.len()];
    }

    let baseline = match outputs.first().copied().flatten() {
        Some(baseline) => baseline,
        None => return vec![Verdict::NotChecked; outputs.len()],
    };

    outputs
        .iter()
        .map(|output| match *output {
            Some(value) if eq(value, baseline) => Verdict::Passed,
            Some(_) => Verdict::Failed,
            None => Verdict::NotChecked,
        })
        .collect()
}

/// Compares each non-baseline case's mean elapsed time to the baseline's.
///
/// Cases without statistics are skipped; an empty vector is returned when
/// the baseline itself has none.
pub fn compare_to_baseline(summaries: &[CaseSummary]) -> Vec<Comparison> {
    let baseline_ns = match summaries.first().and_then(|s| s.stats.as_ref()) {
        Some(stats) => stats.mean.as_nanos() as u64,
        None => return Vec::new(),
    };

    summaries
        .iter()
        .skip(1)
        .filter_map(|summary| {
            let mean_ns = summary.stats.as_ref()?.mean.as_nanos() as u64;
            let change_pct = if baseline_ns > 0 {
                ((mean_ns as f64 - baseline_ns as f64) / baseline_ns as f64) * 100.0
            } else {
                0.0
            };

            Some(Comparison {
                label: summary.label.clone(),
                mean_ns,
                baseline_ns,
                change_pct,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Measurement;
    use crate::harness::aggregator::compute_statistics;
    use std::time::Duration;

    fn eq<T: PartialEq>(a: &T, b: &T) -> bool {
        a == b
    }

    fn summary_with_mean(label: &str, millis: u64) -> CaseSummary {
        let measurements = vec![Measurement::new(Duration::from_millis(millis))];
        let stats = compute_statistics(&measurements);
        CaseSummary {
            label: label.to_string(),
            iterations: 1,
            stats,
            verdict: Verdict::NotChecked,
            failure: None,
            measurements,
        }
    }

    #[test]
    fn test_disabled_check_is_not_checked() {
        let outputs = [Some(&1), Some(&1)];
        let verdicts = judge(&outputs, false, &eq);
        assert_eq!(verdicts, vec![Verdict::NotChecked, Verdict::NotChecked]);
    }

    #[test]
    fn test_matching_outputs_pass() {
        let outputs = [Some(&7), Some(&7), Some(&7)];
        let verdicts = judge(&outputs, true, &eq);
        assert_eq!(
            verdicts,
            vec![Verdict::Passed, Verdict::Passed, Verdict::Passed]
        );
    }

    #[test]
    fn test_mismatch_fails_only_the_differing_case() {
        let outputs = [Some(&1), Some(&2), Some(&1)];
        let verdicts = judge(&outputs, true, &eq);
        assert_eq!(
            verdicts,
            vec![Verdict::Passed, Verdict::Failed, Verdict::Passed]
        );
    }

    #[test]
    fn test_missing_baseline_output_disables_comparison() {
        let outputs: [Option<&i32>; 2] = [None, Some(&5)];
        let verdicts = judge(&outputs, true, &eq);
        assert_eq!(verdicts, vec![Verdict::NotChecked, Verdict::NotChecked]);
    }

    #[test]
    fn test_failed_case_is_not_checked() {
        let outputs = [Some(&1), None];
        let verdicts = judge(&outputs, true, &eq);
        assert_eq!(verdicts, vec![Verdict::Passed, Verdict::NotChecked]);
    }

    #[test]
    fn test_custom_predicate() {
        let approx = |a: &f64, b: &f64| (a - b).abs() < 0.5;
        let left = 1.0;
        let right = 1.2;
        let outputs = [Some(&left), Some(&right)];
        let verdicts = judge(&outputs, true, &approx);
        assert_eq!(verdicts, vec![Verdict::Passed, Verdict::Passed]);
    }

    #[test]
    fn test_compare_to_baseline() {
        let summaries = vec![
            summary_with_mean("baseline", 100),
            summary_with_mean("slower", 150),
            summary_with_mean("faster", 50),
        ];

        let comparisons = compare_to_baseline(&summaries);
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].label, "slower");
        assert!((comparisons[0].change_pct - 50.0).abs() < 1e-9);
        assert!((comparisons[1].change_pct + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_without_baseline_stats() {
        let mut failed = summary_with_mean("baseline", 100);
        failed.stats = None;
        failed.measurements.clear();
        let summaries = vec![failed, summary_with_mean("other", 10)];

        assert!(compare_to_baseline(&summaries).is_empty());
    }

    #[test]
    fn test_verdict_strings() {
        assert_eq!(Verdict::Passed.as_str(), "pass");
        assert_eq!(Verdict::Failed.as_str(), "fail");
        assert_eq!(Verdict::NotChecked.as_str(), "not checked");
        assert!(Verdict::Failed.is_mismatch());
        assert!(!Verdict::Passed.is_mismatch());
    }
}
