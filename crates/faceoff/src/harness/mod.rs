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

//! Run execution, aggregation, and equivalence checking.
//!
//! # Modules
//!
//! - `runner`: Sequential case execution and summary collection
//! - `aggregator`: Per-case and run-level statistics
//! - `comparator`: Equivalence verdicts against the baseline case

pub mod aggregator;
pub mod comparator;
pub mod runner;

pub use aggregator::{aggregate_run, compute_statistics, RunTotals, Statistics};
pub use comparator::{compare_to_baseline, Comparison, Verdict};
pub use runner::{run, run_with, CaseSummary};
