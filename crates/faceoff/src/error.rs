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

//! Error types for harness operations.
//!
//! Only configuration errors are fatal to a run. Failures inside a case's
//! operation are captured in that case's summary and never surface here;
//! see [`crate::harness::runner`].

use std::fmt;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring a run or exporting a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Invalid run configuration parameter
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Report serialization failed
    Serialize(String),

    /// I/O error while writing a report
    Io(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidConfig { parameter, reason } => {
                write!(
                    f,
                    "Invalid configuration parameter '{}': {}",
                    parameter, reason
                )
            }
            BenchError::Serialize(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            BenchError::Io(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BenchError {}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}
