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

//! Capability-checked resident-memory introspection.
//!
//! On Linux this reads `/proc/self/statm`. Elsewhere no probe is available
//! and the harness degrades gracefully: memory fields stay absent rather
//! than reporting zero. Deltas derived from these snapshots are advisory;
//! allocator and GC-like effects make them noisy across runs.

/// Bytes per page when converting `/proc/self/statm` resident pages.
#[cfg(target_os = "linux")]
const PAGE_SIZE: i64 = 4096;

/// Returns whether resident-memory introspection is available on this
/// platform.
pub fn tracking_supported() -> bool {
    resident_bytes().is_some()
}

/// Returns the current resident set size in bytes, if the platform
/// exposes it.
pub fn resident_bytes() -> Option<i64> {
    #[cfg(target_os = "linux")]
    {
        let contents = std::fs::read_to_string("/proc/self/statm").ok()?;
        let resident = contents.split_whitespace().nth(1)?;
        let pages: i64 = resident.parse().ok()?;
        Some(pages * PAGE_SIZE)
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}
