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

//! Console reporter for benchmark samples.
//!
//! Writes a plain-text report: a banner, one block per workload and a
//! closing banner with the run totals.

use super::format::{format_millis, format_rate, group_thousands};
use crate::core::{Engine, Sample};
use crate::error::{BenchError, Result};
use crate::harness::RunSummary;
use chrono::Utc;
use std::io::{self, Stdout, Write};

/// Formats one sample as report lines.
pub fn format_sample(sample: &Sample) -> Vec<String> {
    let iterations = match sample.samples {
        Some(samples) => format!(
            "  Iterations: {} ({} samples)",
            group_thousands(sample.iterations),
            samples
        ),
        None => format!("  Iterations: {}", group_thousands(sample.iterations)),
    };
    let performance = match sample.rme_pct {
        Some(rme) => format!(
            "  Performance: {} ops/sec ±{:.2}%",
            format_rate(sample.ops_per_sec),
            rme
        ),
        None => format!("  Performance: {} ops/sec", format_rate(sample.ops_per_sec)),
    };
    let average = match sample.engine {
        Engine::Manual => format!("  Average: {:.4} ms/op", sample.avg_ms_per_op),
        Engine::Statistical => format!("  Average: {:.3} ms/op", sample.avg_ms_per_op),
    };

    vec![
        format!("{}:", sample.workload),
        format!("  Size: {} bytes", group_thousands(sample.text_bytes as u64)),
        iterations,
        format!("  Duration: {}", format_millis(sample.duration)),
        performance,
        average,
        format!("  Throughput: {:.2} MB/s", sample.throughput_mbs()),
    ]
}

/// Writes benchmark reports to a sink.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    /// Creates a reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the opening banner.
    pub fn print_banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(80))?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "Started: {}", Utc::now().to_rfc3339())?;
        writeln!(self.out, "{}", "=".repeat(80))?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints one workload block.
    pub fn print_sample(&mut self, sample: &Sample) -> Result<()> {
        for line in format_sample(sample) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints a workload that could not be measured.
    pub fn print_failure(&mut self, workload: &str, err: &BenchError) -> Result<()> {
        writeln!(self.out, "{}:", workload)?;
        match err {
            BenchError::IndeterminateRate { iterations, .. } => writeln!(
                self.out,
                "  Performance: indeterminate ({} iterations finished within clock resolution)",
                group_thousands(*iterations)
            )?,
            BenchError::SuiteFailed { message, .. } => writeln!(self.out, "  Error: {}", message)?,
            other => writeln!(self.out, "  Error: {}", other)?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints the closing banner.
    pub fn print_footer(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(80))?;
        writeln!(
            self.out,
            "Benchmark complete: {} completed, {} failed",
            summary.completed, summary.failed
        )?;
        writeln!(self.out, "{}", "=".repeat(80))?;
        self.out.flush()?;
        Ok(())
    }
}
