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

//! Centralized benchmark configuration.
//!
//! Holds the iteration counts used by the manual loop engine and the
//! tuning knobs of the cycle sampler. The defaults are tuning choices, not
//! load-bearing behavior; every value can be overridden.

use crate::error::{BenchError, Result};
use crate::generators::WorkloadSpec;
use std::collections::HashMap;
use std::time::Duration;

/// Size of the small generated texts in bytes.
pub const SMALL_TEXT_BYTES: usize = 100;

/// Size of the medium generated texts in bytes.
pub const MEDIUM_TEXT_BYTES: usize = 1024;

/// Size of the large generated texts in bytes.
pub const LARGE_TEXT_BYTES: usize = 10 * 1024;

/// Size of the very large generated text in bytes.
pub const VERY_LARGE_TEXT_BYTES: usize = 50 * 1024;

/// Default iteration count for small texts.
pub const DEFAULT_ITERATIONS_SMALL: u64 = 50_000;

/// Default iteration count for medium texts.
pub const DEFAULT_ITERATIONS_MEDIUM: u64 = 20_000;

/// Default iteration count for large texts.
pub const DEFAULT_ITERATIONS_LARGE: u64 = 2_000;

/// Default iteration count for fixed-content workloads.
pub const DEFAULT_ITERATIONS_FIXED: u64 = 50_000;

/// Default minimum time for one timed batch.
pub const DEFAULT_MIN_SAMPLE_TIME: Duration = Duration::from_millis(10);

/// Default time budget for one workload.
pub const DEFAULT_MAX_TIME: Duration = Duration::from_secs(5);

/// Configuration for the cycle sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Minimum wall-clock time of one timed batch.
    pub min_sample_time: Duration,
    /// Time budget for calibration plus sampling.
    pub max_time: Duration,
    /// Samples to collect before checking stability.
    pub min_samples: usize,
    /// Hard cap on samples.
    pub max_samples: usize,
    /// Accepted relative standard error of the mean (0.01 = 1%).
    pub tolerance: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_sample_time: DEFAULT_MIN_SAMPLE_TIME,
            max_time: DEFAULT_MAX_TIME,
            min_samples: 5,
            max_samples: 100,
            tolerance: 0.01,
        }
    }
}

impl SamplerConfig {
    /// Sets the minimum batch time.
    pub fn with_min_sample_time(mut self, min_sample_time: Duration) -> Self {
        self.min_sample_time = min_sample_time;
        self
    }

    /// Sets the time budget.
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    /// Sets the minimum sample count.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Sets the maximum sample count.
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Sets the stability tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the configuration can drive a sampling run.
    pub fn validate(&self) -> Result<()> {
        if self.min_sample_time.is_zero() {
            return Err(BenchError::invalid_config("min_sample_time", "must be positive"));
        }
        if self.max_time < self.min_sample_time {
            return Err(BenchError::invalid_config(
                "max_time",
                "must be at least min_sample_time",
            ));
        }
        if self.min_samples < 2 {
            return Err(BenchError::invalid_config("min_samples", "must be at least 2"));
        }
        if self.max_samples < self.min_samples {
            return Err(BenchError::invalid_config(
                "max_samples",
                "must be at least min_samples",
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(BenchError::invalid_config(
                "tolerance",
                format!("must be a positive number, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}

/// Configuration for a benchmark run.
///
/// # Example
///
/// ```
/// use linkscan_bench::core::config::{HarnessConfig, SamplerConfig};
/// use std::time::Duration;
///
/// let config = HarnessConfig::default()
///     .with_iterations(1024, 5_000)
///     .with_filter("medium")
///     .with_sampler(SamplerConfig::default().with_max_time(Duration::from_secs(1)));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    /// Iteration counts per target size, overriding the size-class defaults.
    pub iterations: HashMap<usize, u64>,
    /// Iteration count applied to every workload.
    pub iteration_override: Option<u64>,
    /// Case-insensitive workload name filter.
    pub filter: Option<String>,
    /// Cycle sampler settings.
    pub sampler: SamplerConfig,
}

impl HarnessConfig {
    /// Returns the default iteration count for a target size.
    fn default_iterations_for_size(size: usize) -> u64 {
        match size {
            s if s <= SMALL_TEXT_BYTES => DEFAULT_ITERATIONS_SMALL,
            s if s <= MEDIUM_TEXT_BYTES => DEFAULT_ITERATIONS_MEDIUM,
            _ => DEFAULT_ITERATIONS_LARGE,
        }
    }

    /// Sets a custom iteration count for a specific target size.
    pub fn with_iterations(mut self, size: usize, iterations: u64) -> Self {
        self.iterations.insert(size, iterations);
        self
    }

    /// Uses the same iteration count for every workload.
    pub fn with_iteration_override(mut self, iterations: u64) -> Self {
        self.iteration_override = Some(iterations);
        self
    }

    /// Restricts the run to workloads whose name contains `filter`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the sampler configuration.
    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    /// Gets the manual-loop iteration count for a workload.
    pub fn iterations_for(&self, spec: &WorkloadSpec) -> u64 {
        if let Some(iterations) = self.iteration_override {
            return iterations;
        }
        if spec.is_fixed() {
            return DEFAULT_ITERATIONS_FIXED;
        }
        let size = spec.target_size_bytes();
        self.iterations
            .get(&size)
            .copied()
            .unwrap_or_else(|| Self::default_iterations_for_size(size))
    }

    /// Checks the configuration before a run starts.
    pub fn validate(&self) -> Result<()> {
        if self.iteration_override == Some(0) || self.iterations.values().any(|&n| n == 0) {
            return Err(BenchError::invalid_config("iterations", "must be positive"));
        }
        self.sampler.validate()
    }
}
