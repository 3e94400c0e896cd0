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

//! Benchmark runner for executing workload lists.
//!
//! Workloads run one after another. Each one is built fresh, measured by the
//! selected engine and reported before the next starts. Workload-scoped
//! failures are reported and counted; configuration and output errors end
//! the run.

use super::manual::benchmark_manual;
use super::suite::benchmark_statistical;
use crate::core::config::HarnessConfig;
use crate::core::{Engine, Sample};
use crate::error::Result;
use crate::generators::{
    filter_workloads, Workload, WorkloadSpec, SIMPLE_WORKLOADS, SUITE_WORKLOADS,
};
use crate::reporters::ConsoleReporter;
use linkscan_core::Matcher;
use std::io::{Stdout, Write};
use tracing::{info, warn};

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Workloads that produced a sample.
    pub completed: usize,
    /// Workloads that failed or had an indeterminate rate.
    pub failed: usize,
}

impl RunSummary {
    /// Total number of workloads attempted.
    pub fn total(&self) -> usize {
        self.completed + self.failed
    }
}

/// Runner for executing benchmarks with standardized configuration.
pub struct BenchmarkRunner<W: Write = Stdout> {
    config: HarnessConfig,
    reporter: ConsoleReporter<W>,
}

impl BenchmarkRunner<Stdout> {
    /// Creates a runner that reports to standard output.
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_reporter(config, ConsoleReporter::stdout())
    }
}

impl<W: Write> BenchmarkRunner<W> {
    /// Creates a runner with a custom reporter.
    pub fn with_reporter(config: HarnessConfig, reporter: ConsoleReporter<W>) -> Self {
        Self { config, reporter }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Consumes the runner and returns its reporter.
    pub fn into_reporter(self) -> ConsoleReporter<W> {
        self.reporter
    }

    /// Runs the manual loop over the default simple workloads.
    pub fn run_simple<M: Matcher + ?Sized>(&mut self, matcher: &M) -> Result<RunSummary> {
        self.run(Engine::Manual, SIMPLE_WORKLOADS, matcher)
    }

    /// Runs the statistical suite over the default suite workloads.
    pub fn run_suite<M: Matcher + ?Sized>(&mut self, matcher: &M) -> Result<RunSummary> {
        self.run(Engine::Statistical, SUITE_WORKLOADS, matcher)
    }

    /// Runs `engine` over `specs`, honoring the configured name filter.
    pub fn run<M: Matcher + ?Sized>(
        &mut self,
        engine: Engine,
        specs: &[WorkloadSpec],
        matcher: &M,
    ) -> Result<RunSummary> {
        self.config.validate()?;

        let selected = filter_workloads(specs, self.config.filter.as_deref());
        let title = match engine {
            Engine::Manual => "Link Matcher Benchmark (manual loop)",
            Engine::Statistical => "Link Matcher Benchmark (statistical suite)",
        };
        self.reporter.print_banner(title)?;
        info!(%engine, workloads = selected.len(), "starting benchmark run");

        let mut summary = RunSummary::default();
        for spec in selected {
            let workload = spec.build()?;
            match self.measure(engine, spec, &workload, matcher) {
                Ok(sample) => {
                    self.reporter.print_sample(&sample)?;
                    summary.completed += 1;
                }
                Err(err) if err.is_workload_scoped() => {
                    warn!(workload = %workload.name, error = %err, "workload not measured");
                    self.reporter.print_failure(&workload.name, &err)?;
                    summary.failed += 1;
                }
                Err(err) => return Err(err),
            }
        }

        self.reporter.print_footer(&summary)?;
        info!(
            completed = summary.completed,
            failed = summary.failed,
            "benchmark run finished"
        );
        Ok(summary)
    }

    fn measure<M: Matcher + ?Sized>(
        &self,
        engine: Engine,
        spec: &WorkloadSpec,
        workload: &Workload,
        matcher: &M,
    ) -> Result<Sample> {
        match engine {
            Engine::Manual => benchmark_manual(
                &workload.name,
                &workload.text,
                self.config.iterations_for(spec),
                matcher,
            ),
            Engine::Statistical => {
                benchmark_statistical(&workload.name, &workload.text, matcher, &self.config.sampler)
            }
        }
    }
}
