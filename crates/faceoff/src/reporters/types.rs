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

//! The run report container.

use crate::harness::runner::CaseSummary;
use serde::{Deserialize, Serialize};

/// A titled, timestamped collection of case summaries from one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Report title.
    pub title: String,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
    /// Per-case summaries, in run order.
    pub summaries: Vec<CaseSummary>,
    /// Free-form notes.
    pub notes: Vec<String>,
}

impl RunReport {
    /// Creates a report from run summaries.
    pub fn new(title: impl Into<String>, summaries: Vec<CaseSummary>) -> Self {
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            summaries,
            notes: Vec::new(),
        }
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Returns the number of cases.
    pub fn case_count(&self) -> usize {
        self.summaries.len()
    }

    /// Returns the baseline case summary, if any.
    pub fn baseline(&self) -> Option<&CaseSummary> {
        self.summaries.first()
    }

    /// Returns whether any case failed to execute fully.
    pub fn has_failures(&self) -> bool {
        self.summaries.iter().any(|s| s.failure.is_some())
    }

    /// Returns whether any case's output differed from the baseline's.
    pub fn has_mismatches(&self) -> bool {
        self.summaries.iter().any(|s| s.verdict.is_mismatch())
    }
}
