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

//! Case definition: one labelled operation competing in a run.
//!
//! The harness knows nothing about what an operation does. A case wraps a
//! zero-argument closure so that competing library calls (parsers, codecs,
//! geometry engines) are consumed as opaque callables. The closure owns any
//! state it needs across iterations; the harness never resets it.

use std::fmt;

/// Error type an operation may return. Boxed so cases can wrap any
/// third-party library's error without the harness depending on it.
pub type CaseError = Box<dyn std::error::Error + Send + Sync>;

/// Result of one execution of a case operation.
pub type CaseResult<T> = std::result::Result<T, CaseError>;

/// A labelled operation to be measured.
///
/// `T` is the operation's output, used only for equivalence checking
/// across cases; it is discarded once the run report is built.
///
/// # Example
///
/// ```
/// use faceoff::{Case, CaseResult};
///
/// let parse = Case::new("serde_json", || -> CaseResult<serde_json::Value> {
///     Ok(serde_json::from_str("{\"crs\": \"EPSG:4326\"}")?)
/// });
/// assert_eq!(parse.label(), "serde_json");
/// ```
pub struct Case<T> {
    label: String,
    op: Box<dyn FnMut() -> CaseResult<T>>,
}

impl<T> Case<T> {
    /// Creates a case from a fallible operation.
    pub fn new<F>(label: impl Into<String>, op: F) -> Self
    where
        F: FnMut() -> CaseResult<T> + 'static,
    {
        Self {
            label: label.into(),
            op: Box::new(op),
        }
    }

    /// Creates a case from an operation that cannot fail.
    pub fn infallible<F>(label: impl Into<String>, mut op: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        Self::new(label, move || Ok(op()))
    }

    /// Returns the case label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Executes the operation once.
    pub(crate) fn invoke(&mut self) -> CaseResult<T> {
        (self.op)()
    }
}

impl<T> fmt::Debug for Case<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case").field("label", &self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infallible_case() {
        let mut case = Case::infallible("answer", || 42);
        assert_eq!(case.label(), "answer");
        assert_eq!(case.invoke().unwrap(), 42);
    }

    #[test]
    fn test_fallible_case_preserves_error() {
        let mut case = Case::new("broken", || -> CaseResult<u32> {
            Err("parser rejected input".into())
        });
        let err = case.invoke().unwrap_err();
        assert_eq!(err.to_string(), "parser rejected input");
    }

    #[test]
    fn test_case_owns_mutable_state() {
        let mut counter = 0u32;
        let mut case = Case::infallible("counting", move || {
            counter += 1;
            counter
        });
        assert_eq!(case.invoke().unwrap(), 1);
        assert_eq!(case.invoke().unwrap(), 2);
    }

    #[test]
    fn test_debug_hides_closure() {
        let case = Case::infallible("visible", || ());
        let repr = format!("{:?}", case);
        assert!(repr.contains("visible"));
    }
}
