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

//! Faceoff Benchmark Harness
//!
//! Head-to-head performance comparison of competing library implementations.
//!
//! Faceoff grew out of comparing spatial-data libraries (raster and vector
//! readers, geometry engines, resamplers) for the same operations: loading,
//! cropping, resampling, buffering, distance computation. The harness itself
//! is domain-neutral: every workload is a zero-argument closure, so any two
//! libraries that can compute the same thing can face off.
//!
//! ## Features
//!
//! - **Per-iteration timing** on a monotonic clock
//! - **Equivalence checking**: confirm competing implementations agree on
//!   the result, with the first case as baseline
//! - **Memory deltas**: advisory resident-memory tracking where the
//!   platform supports it
//! - **Reports**: console, JSON, and Markdown output
//!
//! ## Usage
//!
//! ```
//! use faceoff::{run, Case, RunConfig};
//!
//! let cases = vec![
//!     Case::infallible("iterative", || (1..=1000u64).sum::<u64>()),
//!     Case::infallible("closed_form", || 1000u64 * 1001 / 2),
//! ];
//!
//! let config = RunConfig::default()
//!     .with_iterations(50)
//!     .with_equivalence_check(true);
//!
//! let summaries = run(cases, &config).unwrap();
//! assert_eq!(summaries.len(), 2);
//! assert!(summaries.iter().all(|s| !s.verdict.is_mismatch()));
//! ```

pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::case::{Case, CaseError, CaseResult};
pub use crate::core::config::{RunConfig, DEFAULT_ITERATIONS};
pub use crate::core::measurement::Measurement;
pub use crate::core::memory::tracking_supported;
pub use error::{BenchError, Result};
pub use harness::aggregator::{aggregate_run, compute_statistics, RunTotals, Statistics};
pub use harness::comparator::{compare_to_baseline, Comparison, Verdict};
pub use harness::runner::{run, run_with, CaseSummary};
pub use reporters::types::RunReport;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_report() {
        let cases = vec![
            Case::infallible("push", || {
                let mut v = Vec::with_capacity(100);
                for i in 0..100u32 {
                    v.push(i);
                }
                v
            }),
            Case::infallible("collect", || (0..100u32).collect::<Vec<_>>()),
        ];

        let config = RunConfig::new(5).with_equivalence_check(true);
        let summaries = run(cases, &config).unwrap();

        let report = RunReport::new("vector construction", summaries);
        assert_eq!(report.case_count(), 2);
        assert!(!report.has_failures());
        assert!(!report.has_mismatches());
    }

    #[test]
    fn test_totals_over_a_real_run() {
        let cases = vec![
            Case::infallible("small", || vec![0u8; 64].len()),
            Case::infallible("large", || vec![0u8; 65_536].len()),
        ];

        let summaries = run(cases, &RunConfig::new(3)).unwrap();
        let totals = aggregate_run(&summaries);
        assert_eq!(totals.cases, 2);
        assert_eq!(totals.measured_cases, 2);
    }
}
