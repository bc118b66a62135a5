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

//! Memory tracking in action.
//!
//! Compares two buffer-filling strategies with per-iteration resident
//! memory deltas enabled. Deltas are advisory: the allocator may grow or
//! shrink the resident set at its own pace, so read them directionally.
//!
//! Run with:
//! ```bash
//! cargo run --package faceoff --example allocation_profile
//! ```

use faceoff::reporters::console;
use faceoff::{run, tracking_supported, Case, RunConfig, RunReport};

fn main() {
    if !tracking_supported() {
        println!("Resident-memory introspection is unavailable on this platform;");
        println!("memory columns will be absent from the report.");
    }

    let cases = vec![
        Case::infallible("preallocated", || {
            let mut buffer = Vec::with_capacity(1 << 20);
            buffer.resize(1 << 20, 0u8);
            buffer.iter().map(|&b| b as u64).sum::<u64>()
        }),
        Case::infallible("growing", || {
            let mut buffer = Vec::new();
            for _ in 0..(1 << 20) {
                buffer.push(0u8);
            }
            buffer.iter().map(|&b| b as u64).sum::<u64>()
        }),
    ];

    let config = RunConfig::default()
        .with_iterations(25)
        .with_equivalence_check(true)
        .with_memory_tracking(true);

    let summaries = run(cases, &config).expect("configuration is valid");

    let mut report = RunReport::new("Buffer fill strategies", summaries);
    report.add_note("Memory deltas are advisory; compare them directionally only");

    console::print_report(&report);
}
