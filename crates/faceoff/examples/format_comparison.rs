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

//! Two parsers, one document: a full head-to-head run.
//!
//! This example demonstrates:
//! - Wrapping two competing libraries as cases
//! - Equivalence checking against the baseline (both parsers must produce
//!   the same document tree)
//! - Exporting the report to JSON and Markdown
//!
//! Run with:
//! ```bash
//! cargo run --package faceoff --example format_comparison
//! ```

use faceoff::reporters::{console, json, markdown};
use faceoff::{run, Case, CaseResult, RunConfig, RunReport};
use std::path::Path;

/// A station catalog, the kind of metadata that rides along with raster
/// tiles. Encoded once per format; both parsers must agree on the tree.
const JSON_DOC: &str = r#"{
    "dataset": "coastal-stations",
    "crs": "EPSG:4326",
    "stations": [
        {"id": 101, "name": "North Mole", "lon": -118, "lat": 33, "active": true},
        {"id": 102, "name": "Harbor Light", "lon": -118, "lat": 34, "active": false},
        {"id": 103, "name": "Breakwater", "lon": -117, "lat": 33, "active": true}
    ]
}"#;

const YAML_DOC: &str = r#"dataset: coastal-stations
crs: "EPSG:4326"
stations:
  - id: 101
    name: North Mole
    lon: -118
    lat: 33
    active: true
  - id: 102
    name: Harbor Light
    lon: -118
    lat: 34
    active: false
  - id: 103
    name: Breakwater
    lon: -117
    lat: 33
    active: true
"#;

fn main() {
    let cases = vec![
        Case::new("serde_json", || -> CaseResult<serde_json::Value> {
            Ok(serde_json::from_str(JSON_DOC)?)
        }),
        Case::new("serde_yaml", || -> CaseResult<serde_json::Value> {
            Ok(serde_yaml::from_str(YAML_DOC)?)
        }),
    ];

    let config = RunConfig::default()
        .with_iterations(500)
        .with_warmup(10)
        .with_equivalence_check(true);

    let summaries = run(cases, &config).expect("configuration is valid");

    let mut report = RunReport::new("JSON vs YAML parsing", summaries);
    report.add_note("Both parsers deserialize into serde_json::Value for comparison");
    report.add_note("Equivalence confirms the two encodings carry the same catalog");

    console::print_report(&report);

    std::fs::create_dir_all("target/demo").expect("create output directory");
    json::export_json(&report, Path::new("target/demo/format_comparison.json"))
        .expect("export JSON report");
    markdown::export_markdown(&report, Path::new("target/demo/format_comparison.md"))
        .expect("export Markdown report");

    println!("Reports written to target/demo/format_comparison.{{json,md}}");
}
