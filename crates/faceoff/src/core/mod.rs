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

//! Core harness primitives.
//!
//! # Modules
//!
//! - `case`: Labelled operations competing in a run
//! - `config`: Run configuration
//! - `measurement`: Per-iteration timing records
//! - `memory`: Capability-checked resident-memory introspection

pub mod case;
pub mod config;
pub mod measurement;
pub mod memory;

// Re-export commonly used types
pub use case::{Case, CaseError, CaseResult};
pub use config::{RunConfig, DEFAULT_ITERATIONS};
pub use measurement::Measurement;
pub use memory::{resident_bytes, tracking_supported};
