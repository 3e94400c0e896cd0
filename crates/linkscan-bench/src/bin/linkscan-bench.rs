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

//! Linkscan benchmark driver.
//!
//! # Usage
//!
//! ```bash
//! # Manual loop over the simple workload list
//! linkscan-bench simple
//!
//! # Statistical suite, large texts only, 2 second budget per workload
//! linkscan-bench suite --filter large --max-time-ms 2000
//!
//! # Debug logging
//! RUST_LOG=linkscan_bench=debug linkscan-bench simple --iterations 1000
//! ```

use clap::{Parser, Subcommand};
use linkscan_bench::{BenchmarkRunner, HarnessConfig, Result, RunSummary, SamplerConfig};
use linkscan_core::LinkMatcher;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkscan-bench")]
#[command(author, version, long_about = None)]
#[command(about = "Throughput benchmarks for the linkscan link matcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed-iteration manual loop
    Simple {
        /// Iterations for every workload (default: by text size)
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Only run workloads whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Run the adaptive statistical suite
    Suite {
        /// Time budget per workload in milliseconds
        #[arg(long, default_value_t = 5_000)]
        max_time_ms: u64,

        /// Minimum number of timed batches per workload
        #[arg(long, default_value_t = 5)]
        min_samples: usize,

        /// Accepted relative standard error of the mean (0.01 = 1%)
        #[arg(long, default_value_t = 0.01)]
        tolerance: f64,

        /// Only run workloads whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
}

impl Commands {
    fn execute(self) -> Result<RunSummary> {
        let matcher = LinkMatcher::new();
        match self {
            Commands::Simple { iterations, filter } => {
                let mut config = HarnessConfig::default();
                if let Some(iterations) = iterations {
                    config = config.with_iteration_override(iterations);
                }
                if let Some(filter) = filter {
                    config = config.with_filter(filter);
                }
                BenchmarkRunner::new(config).run_simple(&matcher)
            }
            Commands::Suite {
                max_time_ms,
                min_samples,
                tolerance,
                filter,
            } => {
                let sampler = SamplerConfig::default()
                    .with_max_time(Duration::from_millis(max_time_ms))
                    .with_min_samples(min_samples)
                    .with_max_samples(min_samples.max(SamplerConfig::default().max_samples))
                    .with_tolerance(tolerance);
                let mut config = HarnessConfig::default().with_sampler(sampler);
                if let Some(filter) = filter {
                    config = config.with_filter(filter);
                }
                BenchmarkRunner::new(config).run_suite(&matcher)
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linkscan_bench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(summary) if summary.total() == 0 => {
            eprintln!("Error: no workload matches the filter");
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
