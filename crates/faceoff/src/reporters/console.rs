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

//! Console reporter for run reports.

use crate::harness::comparator::{compare_to_baseline, Verdict};
use crate::harness::runner::CaseSummary;
use crate::reporters::types::RunReport;

/// Prints the full run report to the console.
pub fn print_report(report: &RunReport) {
    println!("\n{}", "=".repeat(80));
    println!("COMPARISON REPORT: {}", report.title);
    println!("{}", "=".repeat(80));
    println!("Timestamp: {}", report.timestamp);
    println!("Cases: {}", report.case_count());

    if !report.notes.is_empty() {
        println!("\nNotes:");
        for note in &report.notes {
            println!("  - {}", note);
        }
    }

    println!("\n{}", "-".repeat(80));
    println!("RESULTS:");
    println!("{}", "-".repeat(80));

    for summary in &report.summaries {
        print_case(summary);
    }

    let comparisons = compare_to_baseline(&report.summaries);
    if !comparisons.is_empty() {
        println!("\n{}", "-".repeat(80));
        println!("VERSUS BASELINE ({}):", report.summaries[0].label);
        println!("{}", "-".repeat(80));

        for comparison in &comparisons {
            let direction = if comparison.change_pct >= 0.0 {
                "slower"
            } else {
                "faster"
            };
            println!(
                "{}: {:.1}% {} ({:.3}ms vs {:.3}ms)",
                comparison.label,
                comparison.change_pct.abs(),
                direction,
                comparison.mean_ns as f64 / 1_000_000.0,
                comparison.baseline_ns as f64 / 1_000_000.0
            );
        }
    }

    println!("{}\n", "=".repeat(80));
}

/// Prints a short summary of the run report.
pub fn print_summary(report: &RunReport) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY: {}", report.title);
    println!("{}", "=".repeat(60));
    println!("Cases: {}", report.case_count());
    println!(
        "Failures: {}",
        report.summaries.iter().filter(|s| s.failure.is_some()).count()
    );
    println!(
        "Equivalence mismatches: {}",
        report
            .summaries
            .iter()
            .filter(|s| s.verdict.is_mismatch())
            .count()
    );
    println!("{}\n", "=".repeat(60));
}

fn print_case(summary: &CaseSummary) {
    if summary.all_failed() {
        println!(
            "{}: did not execute ({})",
            summary.label,
            summary.failure.as_deref().unwrap_or("no measurements")
        );
        return;
    }

    println!(
        "{}: {} of {} iterations",
        summary.label,
        summary.completed(),
        summary.iterations
    );

    if let Some(stats) = &summary.stats {
        println!(
            "  min {:?}  median {:?}  mean {:?}  max {:?}  std-dev {:?}",
            stats.min, stats.median, stats.mean, stats.max, stats.std_dev
        );
    }

    if let Some(delta) = summary.mean_memory_delta() {
        println!("  memory delta: {} bytes (mean per iteration)", delta);
    }

    match summary.verdict {
        Verdict::Passed => println!("  equivalence: pass"),
        Verdict::Failed => println!("  equivalence: FAIL (output differs from baseline)"),
        Verdict::NotChecked => {}
    }

    if let Some(failure) = &summary.failure {
        println!("  stopped early: {}", failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Measurement;
    use crate::harness::aggregator::compute_statistics;
    use std::time::Duration;

    #[test]
    fn test_print_report_does_not_panic() {
        let measurements = vec![
            Measurement::new(Duration::from_millis(2)),
            Measurement::with_memory(Duration::from_millis(3), -512),
        ];
        let stats = compute_statistics(&measurements);
        let report = RunReport::new(
            "smoke",
            vec![
                CaseSummary {
                    label: "baseline".to_string(),
                    iterations: 2,
                    stats,
                    verdict: Verdict::Passed,
                    failure: None,
                    measurements,
                },
                CaseSummary {
                    label: "broken".to_string(),
                    iterations: 2,
                    measurements: Vec::new(),
                    stats: None,
                    verdict: Verdict::NotChecked,
                    failure: Some("file not found".to_string()),
                },
            ],
        );

        print_report(&report);
        print_summary(&report);
    }
}
