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

//! Harness overhead benchmarks.
//!
//! Measures what the harness itself costs per iteration, so that fast
//! operations are not dominated by measurement bookkeeping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faceoff::{run, Case, RunConfig};

fn bench_noop_run(c: &mut Criterion) {
    c.bench_function("run_noop_100_iters", |b| {
        b.iter(|| {
            let cases = vec![Case::infallible("noop", || black_box(0u64))];
            let config = RunConfig::new(100);
            run(cases, &config).unwrap()
        })
    });
}

fn bench_noop_run_with_memory(c: &mut Criterion) {
    c.bench_function("run_noop_100_iters_tracked", |b| {
        b.iter(|| {
            let cases = vec![Case::infallible("noop", || black_box(0u64))];
            let config = RunConfig::new(100).with_memory_tracking(true);
            run(cases, &config).unwrap()
        })
    });
}

criterion_group!(benches, bench_noop_run, bench_noop_run_with_memory);
criterion_main!(benches);
