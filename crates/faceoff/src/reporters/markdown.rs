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

//! Markdown export for run reports.

use crate::error::Result;
use crate::reporters::types::RunReport;
use std::fs;
use std::path::Path;

/// Exports a run report as a Markdown document.
///
/// # Arguments
///
/// * `report` - The run report to export
/// * `path` - Output file path
pub fn export_markdown(report: &RunReport, path: &Path) -> Result<()> {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    md.push_str("## Results\n\n");
    md.push_str("| Case | Iterations | Min | Median | Mean | Max | Mem delta (bytes) | Equivalence | Failure |\n");
    md.push_str("|------|------------|-----|--------|------|-----|-------------------|-------------|--------|\n");

    for summary in &report.summaries {
        let (min, median, mean, max) = match &summary.stats {
            Some(stats) => (
                format!("{:?}", stats.min),
                format!("{:?}", stats.median),
                format!("{:?}", stats.mean),
                format!("{:?}", stats.max),
            ),
            None => (
                "N/A".to_string(),
                "N/A".to_string(),
                "N/A".to_string(),
                "N/A".to_string(),
            ),
        };

        let mem = summary
            .mean_memory_delta()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let failure = summary.failure.as_deref().unwrap_or("N/A");

        md.push_str(&format!(
            "| {} | {}/{} | {} | {} | {} | {} | {} | {} | {} |\n",
            summary.label,
            summary.completed(),
            summary.iterations,
            min,
            median,
            mean,
            max,
            mem,
            summary.verdict.as_str(),
            failure
        ));
    }

    fs::write(path, md)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Measurement;
    use crate::harness::aggregator::compute_statistics;
    use crate::harness::comparator::Verdict;
    use crate::harness::runner::CaseSummary;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_markdown() {
        let measurements = vec![Measurement::new(Duration::from_millis(4))];
        let stats = compute_statistics(&measurements);
        let report = RunReport::new(
            "md export",
            vec![CaseSummary {
                label: "vector_buffer".to_string(),
                iterations: 1,
                stats,
                verdict: Verdict::Passed,
                failure: None,
                measurements,
            }],
        );
        let temp = NamedTempFile::new().unwrap();

        export_markdown(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("# md export"));
        assert!(content.contains("| vector_buffer | 1/1 |"));
        assert!(content.contains("pass"));
    }

    #[test]
    fn test_failed_case_renders_placeholders() {
        let report = RunReport::new(
            "failures",
            vec![CaseSummary {
                label: "broken".to_string(),
                iterations: 5,
                measurements: Vec::new(),
                stats: None,
                verdict: Verdict::NotChecked,
                failure: Some("driver missing".to_string()),
            }],
        );
        let temp = NamedTempFile::new().unwrap();

        export_markdown(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("| broken | 0/5 |"));
        assert!(content.contains("driver missing"));
    }
}
