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

//! Adaptive cycle sampler.
//!
//! A unit of work is first calibrated: the batch size doubles until one
//! batch takes at least `min_sample_time`. Batches of that size are then
//! timed repeatedly until the relative standard error of the mean per-op
//! time drops under the tolerance, the sample cap is reached, or the time
//! budget runs out. The reported rate is the reciprocal of the mean.

use crate::core::SamplerConfig;
use crate::error::{BenchError, Result};
use crate::reporters::format::format_rate;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one completed sampling cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    /// Name of the unit of work.
    pub name: String,
    /// Operations per second.
    pub hz: f64,
    /// Mean seconds per operation.
    pub mean_secs: f64,
    /// Relative standard error of the mean, in percent.
    pub rme_pct: f64,
    /// Number of timed batches.
    pub samples: usize,
    /// Operations executed in timed batches.
    pub operations: u64,
    /// Time spent in timed batches.
    pub elapsed: Duration,
}

impl Cycle {
    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} x {} ops/sec ±{:.2}% ({} runs sampled)",
            self.name,
            format_rate(self.hz),
            self.rme_pct,
            self.samples
        )
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Runs units of work until their rate stabilizes.
#[derive(Debug, Clone)]
pub struct CycleSampler {
    config: SamplerConfig,
}

impl CycleSampler {
    /// Creates a sampler after validating its configuration.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the sampler configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Samples `work` and reports its rate.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::SuiteFailed`] when `work` returns an error or
    /// panics, or when every batch finished within clock resolution.
    pub fn run<F>(&self, name: &str, mut work: F) -> Result<Cycle>
    where
        F: FnMut() -> std::result::Result<(), String>,
    {
        let started = Instant::now();

        let mut count: u64 = 1;
        loop {
            let elapsed = time_batch(name, &mut work, count)?;
            if elapsed >= self.config.min_sample_time || started.elapsed() >= self.config.max_time {
                break;
            }
            count = count.saturating_mul(2);
        }
        debug!(workload = name, batch = count, "calibrated");

        let mut per_op = Vec::with_capacity(self.config.min_samples);
        let mut operations = 0u64;
        let mut elapsed = Duration::ZERO;
        loop {
            let batch = time_batch(name, &mut work, count)?;
            per_op.push(batch.as_secs_f64() / count as f64);
            operations = operations.saturating_add(count);
            elapsed += batch;

            let n = per_op.len();
            if n >= self.config.max_samples {
                break;
            }
            if n >= self.config.min_samples
                && (relative_std_error(&per_op) <= self.config.tolerance
                    || started.elapsed() >= self.config.max_time)
            {
                break;
            }
        }

        let mean_secs = mean(&per_op);
        if mean_secs <= 0.0 {
            return Err(BenchError::SuiteFailed {
                workload: name.to_string(),
                message: "every batch finished within clock resolution".to_string(),
            });
        }

        let cycle = Cycle {
            name: name.to_string(),
            hz: 1.0 / mean_secs,
            mean_secs,
            rme_pct: relative_std_error(&per_op) * 100.0,
            samples: per_op.len(),
            operations,
            elapsed,
        };
        debug!(workload = name, hz = cycle.hz, samples = cycle.samples, "cycle complete");
        Ok(cycle)
    }
}

type BatchResult = std::result::Result<Duration, String>;

fn time_batch<F>(name: &str, work: &mut F, count: u64) -> Result<Duration>
where
    F: FnMut() -> std::result::Result<(), String>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> BatchResult {
        let start = Instant::now();
        for _ in 0..count {
            work()?;
        }
        Ok(start.elapsed())
    }));

    match outcome {
        Ok(Ok(elapsed)) => Ok(elapsed),
        Ok(Err(message)) => Err(BenchError::SuiteFailed {
            workload: name.to_string(),
            message,
        }),
        Err(payload) => Err(BenchError::SuiteFailed {
            workload: name.to_string(),
            message: format!("panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard error of the mean divided by the mean.
fn relative_std_error(values: &[f64]) -> f64 {
    let n = values.len();
    let mean = mean(values);
    if n < 2 || mean <= 0.0 {
        return f64::INFINITY;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (variance.sqrt() / (n as f64).sqrt()) / mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    fn fast_config() -> SamplerConfig {
        SamplerConfig::default()
            .with_min_sample_time(Duration::from_millis(1))
            .with_max_time(Duration::from_millis(50))
            .with_min_samples(3)
            .with_max_samples(10)
    }

    #[test]
    fn test_sampler_reports_positive_rate() {
        let sampler = CycleSampler::new(fast_config()).unwrap();
        let cycle = sampler
            .run("sum", || {
                black_box((0..100u64).sum::<u64>());
                Ok(())
            })
            .unwrap();

        assert!(cycle.hz.is_finite() && cycle.hz > 0.0);
        assert!(cycle.samples >= 3 && cycle.samples <= 10);
        assert!(cycle.operations >= cycle.samples as u64);
        assert_eq!(cycle.hz, 1.0 / cycle.mean_secs);
    }

    #[test]
    fn test_batch_reaches_min_sample_time() {
        let sampler = CycleSampler::new(fast_config()).unwrap();
        let cycle = sampler
            .run("sleep", || {
                std::thread::sleep(Duration::from_micros(200));
                Ok(())
            })
            .unwrap();

        // Each timed batch covers at least the 1ms minimum.
        assert!(cycle.elapsed >= Duration::from_millis(cycle.samples as u64));
        assert!(cycle.hz < 5_000.0);
    }

    #[test]
    fn test_error_ends_cycle() {
        let sampler = CycleSampler::new(fast_config()).unwrap();
        let err = sampler.run("broken", || Err("bad input".to_string())).unwrap_err();
        assert_eq!(
            err,
            BenchError::SuiteFailed {
                workload: "broken".to_string(),
                message: "bad input".to_string(),
            }
        );
    }

    #[test]
    fn test_panic_is_caught() {
        let sampler = CycleSampler::new(fast_config()).unwrap();
        let err = sampler
            .run("panicky", || -> std::result::Result<(), String> { panic!("kaboom") })
            .unwrap_err();
        match err {
            BenchError::SuiteFailed { workload, message } => {
                assert_eq!(workload, "panicky");
                assert!(message.contains("kaboom"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(CycleSampler::new(SamplerConfig::default().with_min_samples(0)).is_err());
    }

    #[test]
    fn test_relative_std_error() {
        assert_eq!(relative_std_error(&[2.0, 2.0, 2.0]), 0.0);
        assert!(relative_std_error(&[1.0]).is_infinite());
        let rse = relative_std_error(&[1.0, 3.0]);
        // sd = sqrt(2), sem = 1, mean = 2
        assert!((rse - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_summary_format() {
        let cycle = Cycle {
            name: "Plain text (no URLs)".to_string(),
            hz: 1_234_567.4,
            mean_secs: 1.0 / 1_234_567.4,
            rme_pct: 0.854,
            samples: 42,
            operations: 1_000,
            elapsed: Duration::from_millis(10),
        };
        assert_eq!(
            cycle.summary(),
            "Plain text (no URLs) x 1,234,567 ops/sec ±0.85% (42 runs sampled)"
        );
    }
}
