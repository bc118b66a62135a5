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

//! Run configuration.
//!
//! One configuration governs every case of a run, so iteration counts are
//! identical across cases and their statistics stay commensurable.

use crate::error::{BenchError, Result};

/// Default measured iterations per case.
pub const DEFAULT_ITERATIONS: u64 = 10;

/// Default untimed warmup executions per case.
pub const DEFAULT_WARMUP: u64 = 0;

/// Configuration for a single run.
///
/// # Example
///
/// ```
/// use faceoff::RunConfig;
///
/// let config = RunConfig::default()
///     .with_iterations(100)
///     .with_equivalence_check(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Measured iterations per case. Must be at least 1.
    pub iterations: u64,
    /// Untimed executions per case before measurement starts.
    pub warmup: u64,
    /// Compare each case's last output against the first case's.
    pub check_equivalence: bool,
    /// Record a resident-memory delta per iteration where the platform
    /// supports it.
    pub track_memory: bool,
}

impl RunConfig {
    /// Creates a configuration with the given iteration count.
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            warmup: DEFAULT_WARMUP,
            check_equivalence: false,
            track_memory: false,
        }
    }

    /// Sets the measured iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the untimed warmup count.
    pub fn with_warmup(mut self, warmup: u64) -> Self {
        self.warmup = warmup;
        self
    }

    /// Enables or disables the equivalence check.
    pub fn with_equivalence_check(mut self, enabled: bool) -> Self {
        self.check_equivalence = enabled;
        self
    }

    /// Enables or disables per-iteration memory tracking.
    pub fn with_memory_tracking(mut self, enabled: bool) -> Self {
        self.track_memory = enabled;
        self
    }

    /// Validates the configuration before any operation is invoked.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "iterations".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.warmup, 0);
        assert!(!config.check_equivalence);
        assert!(!config.track_memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = RunConfig::default().with_iterations(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new(50)
            .with_warmup(5)
            .with_equivalence_check(true)
            .with_memory_tracking(true);
        assert_eq!(config.iterations, 50);
        assert_eq!(config.warmup, 5);
        assert!(config.check_equivalence);
        assert!(config.track_memory);
    }

    #[test]
    fn test_one_iteration_is_valid() {
        assert!(RunConfig::new(1).validate().is_ok());
    }
}
