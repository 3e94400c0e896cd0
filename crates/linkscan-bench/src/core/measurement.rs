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

//! Benchmark samples and the metrics derived from them.
//!
//! Both timing engines produce a [`Sample`]. The manual loop starts from a
//! total duration and derives the rate; the statistical suite starts from a
//! rate and derives the per-operation latency. The two constructors keep
//! those derivations in one place.

use crate::error::{BenchError, Result};
use std::fmt;
use std::time::Duration;

/// The timing engine that produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Fixed-iteration blocking loop.
    Manual,
    /// Adaptive cycle sampler.
    Statistical,
}

impl Engine {
    /// Returns the engine as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Manual => "manual",
            Engine::Statistical => "statistical",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The measured performance of one workload.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Workload name.
    pub workload: String,
    /// Engine that produced this sample.
    pub engine: Engine,
    /// Size of the measured text in bytes.
    pub text_bytes: usize,
    /// Matcher calls made while measuring.
    pub iterations: u64,
    /// Timing samples collected (statistical engine only).
    pub samples: Option<usize>,
    /// Wall-clock time spent measuring.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_sec: f64,
    /// Average milliseconds per operation.
    pub avg_ms_per_op: f64,
    /// Relative margin of error in percent (statistical engine only).
    pub rme_pct: Option<f64>,
}

impl Sample {
    /// Derives a sample from a fixed-iteration run.
    ///
    /// `ops_per_sec` is floored to a whole number.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for zero iterations and
    /// [`BenchError::IndeterminateRate`] for a zero duration.
    pub fn from_manual_run(
        workload: impl Into<String>,
        text_bytes: usize,
        iterations: u64,
        duration: Duration,
    ) -> Result<Self> {
        let workload = workload.into();
        if iterations == 0 {
            return Err(BenchError::invalid_config("iterations", "must be positive"));
        }
        if duration.is_zero() {
            return Err(BenchError::IndeterminateRate {
                workload,
                iterations,
            });
        }

        let duration_ms = duration.as_secs_f64() * 1000.0;
        Ok(Self {
            workload,
            engine: Engine::Manual,
            text_bytes,
            iterations,
            samples: None,
            duration,
            ops_per_sec: (iterations as f64 / duration_ms * 1000.0).floor(),
            avg_ms_per_op: duration_ms / iterations as f64,
            rme_pct: None,
        })
    }

    /// Derives a sample from a rate reported by the cycle sampler.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::IndeterminateRate`] when `hz` is not a finite
    /// positive number.
    pub fn from_rate(
        workload: impl Into<String>,
        text_bytes: usize,
        hz: f64,
        iterations: u64,
        samples: usize,
        duration: Duration,
    ) -> Result<Self> {
        let workload = workload.into();
        if !hz.is_finite() || hz <= 0.0 {
            return Err(BenchError::IndeterminateRate {
                workload,
                iterations,
            });
        }

        Ok(Self {
            workload,
            engine: Engine::Statistical,
            text_bytes,
            iterations,
            samples: Some(samples),
            duration,
            ops_per_sec: hz,
            avg_ms_per_op: 1000.0 / hz,
            rme_pct: None,
        })
    }

    /// Attaches the relative margin of error of the rate.
    pub fn with_rme(mut self, rme_pct: f64) -> Self {
        self.rme_pct = Some(rme_pct);
        self
    }

    /// Returns the measuring time in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }

    /// Returns matcher throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.text_bytes as f64 * self.ops_per_sec / 1_000_000.0
    }
}
