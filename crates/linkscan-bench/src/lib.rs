// Dweve Linkscan - Link Detection Benchmarks
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

//! Linkscan Benchmark Framework
//!
//! Throughput and latency benchmarks for the linkscan link matcher.
//!
//! ## Features
//!
//! - **Workload generators**: Synthetic text of a target size with tunable link density
//! - **Manual loop**: Fixed iteration count, one straight-line measurement
//! - **Statistical suite**: Adaptive batch sampling until the rate stabilizes
//! - **Console reports**: One block per workload with locale-grouped numbers
//!
//! ## Usage
//!
//! Run the drivers:
//! ```bash
//! cargo run --release --package linkscan-bench -- simple
//! cargo run --release --package linkscan-bench -- suite --filter "large"
//! ```
//!
//! Run the criterion benches:
//! ```bash
//! cargo bench --package linkscan-bench --bench matching
//! ```
//!
//! ## Library use
//!
//! ```
//! use linkscan_bench::generators::generate_text;
//! use linkscan_bench::harness::benchmark_manual;
//! use linkscan_core::LinkMatcher;
//!
//! let text = generate_text(1024, 0.1).unwrap();
//! let sample = benchmark_manual("1KB, 10% links", &text, 200, &LinkMatcher::new()).unwrap();
//! assert_eq!(sample.avg_ms_per_op, sample.duration_ms() / 200.0);
//! ```

pub mod core;
pub mod error;
pub mod generators;
pub mod harness;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::{Engine, HarnessConfig, Sample, SamplerConfig};
pub use error::{BenchError, Result};
pub use generators::{generate_text, Workload, WorkloadSpec, SIMPLE_WORKLOADS, SUITE_WORKLOADS};
pub use harness::{
    benchmark_manual, benchmark_statistical, BenchmarkRunner, Cycle, CycleSampler, RunSummary,
    Suite, SuiteError, SuiteEvent,
};
pub use reporters::ConsoleReporter;
