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

//! Per-iteration measurement records.
//!
//! Each measurement is a locally scoped value produced by the runner; there
//! is no process-wide timing state, so nested or repeated runs never
//! interfere with each other.

use std::time::Duration;

/// One timed execution of a case operation.
///
/// Elapsed time comes from `std::time::Instant`, a monotonic clock, and is
/// non-negative by construction. The memory delta is signed: an iteration
/// that frees more than it allocates is recorded as-is, not clamped to zero.
/// `None` means memory was not measured, which is distinct from a zero
/// delta.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// Wall-clock duration of the operation call.
    pub elapsed: Duration,
    /// Resident-memory delta across the call in bytes, if measured.
    pub memory_delta: Option<i64>,
}

impl Measurement {
    /// Creates a measurement with just elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            memory_delta: None,
        }
    }

    /// Creates a measurement with elapsed time and a memory delta.
    pub fn with_memory(elapsed: Duration, delta: i64) -> Self {
        Self {
            elapsed,
            memory_delta: Some(delta),
        }
    }

    /// Returns the elapsed time in nanoseconds.
    pub fn as_nanos(&self) -> u64 {
        self.elapsed.as_nanos() as u64
    }

    /// Returns the elapsed time in seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
