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

//! Statistical benchmark suite.
//!
//! A [`Suite`] holds named units of work and samples them one after another
//! with a [`CycleSampler`]. Every unit ends in exactly one [`SuiteEvent`]
//! delivered to the listener passed to [`Suite::run`]: a completed cycle or
//! an error. A failing unit never prevents the units after it from running.

use super::sampler::{Cycle, CycleSampler};
use crate::core::{Sample, SamplerConfig};
use crate::error::{BenchError, Result};
use linkscan_core::Matcher;
use std::fmt;
use std::hint::black_box;
use tracing::{debug, warn};

type Work<'a> = Box<dyn FnMut() -> std::result::Result<(), String> + 'a>;

/// A unit of work that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteError {
    /// Name of the failing unit.
    pub name: String,
    /// Failure detail.
    pub message: String,
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Notification emitted once per unit of work.
#[derive(Debug, Clone, PartialEq)]
pub enum SuiteEvent {
    /// The unit was sampled successfully.
    Cycle(Cycle),
    /// The unit failed or panicked.
    Error(SuiteError),
}

/// Named units of work sampled in insertion order.
pub struct Suite<'a> {
    sampler: CycleSampler,
    units: Vec<(String, Work<'a>)>,
}

impl<'a> Suite<'a> {
    /// Creates an empty suite.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        Ok(Self {
            sampler: CycleSampler::new(config)?,
            units: Vec::new(),
        })
    }

    /// Adds a unit of work.
    pub fn add<F>(mut self, name: impl Into<String>, work: F) -> Self
    where
        F: FnMut() -> std::result::Result<(), String> + 'a,
    {
        self.units.push((name.into(), Box::new(work)));
        self
    }

    /// Number of units in the suite.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns whether the suite has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Samples every unit and reports each outcome to `listener`.
    pub fn run<L>(self, mut listener: L)
    where
        L: FnMut(SuiteEvent),
    {
        for (name, mut work) in self.units {
            debug!(workload = %name, "sampling");
            match self.sampler.run(&name, &mut work) {
                Ok(cycle) => listener(SuiteEvent::Cycle(cycle)),
                Err(err) => {
                    let message = match err {
                        BenchError::SuiteFailed { message, .. } => message,
                        other => other.to_string(),
                    };
                    warn!(workload = %name, %message, "unit failed");
                    listener(SuiteEvent::Error(SuiteError { name, message }));
                }
            }
        }
    }
}

impl fmt::Debug for Suite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("sampler", &self.sampler)
            .field("units", &self.units.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}

/// Measures `matcher` over `text` with a single-unit suite.
///
/// The rate comes from the completion event; an error event becomes
/// [`BenchError::SuiteFailed`].
pub fn benchmark_statistical<M>(
    label: &str,
    text: &str,
    matcher: &M,
    config: &SamplerConfig,
) -> Result<Sample>
where
    M: Matcher + ?Sized,
{
    let mut outcome = None;
    Suite::new(config.clone())?
        .add(label, || {
            let links = matcher.find_links(black_box(text)).map_err(|e| e.to_string())?;
            black_box(links);
            Ok(())
        })
        .run(|event| outcome = Some(event));

    match outcome {
        Some(SuiteEvent::Cycle(cycle)) => Ok(Sample::from_rate(
            label,
            text.len(),
            cycle.hz,
            cycle.operations,
            cycle.samples,
            cycle.elapsed,
        )?
        .with_rme(cycle.rme_pct)),
        Some(SuiteEvent::Error(err)) => Err(BenchError::SuiteFailed {
            workload: err.name,
            message: err.message,
        }),
        None => Err(BenchError::SuiteFailed {
            workload: label.to_string(),
            message: "suite finished without reporting".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PLAIN_TEXT;
    use linkscan_core::{LinkMatch, LinkMatcher, MatchError, MatchResult};
    use std::time::Duration;

    fn fast_config() -> SamplerConfig {
        SamplerConfig::default()
            .with_min_sample_time(Duration::from_millis(1))
            .with_max_time(Duration::from_millis(50))
            .with_min_samples(3)
            .with_max_samples(10)
    }

    #[test]
    fn test_plain_text_latency_is_reciprocal() {
        let sample = benchmark_statistical(
            "Plain text (no URLs)",
            PLAIN_TEXT,
            &LinkMatcher::new(),
            &fast_config(),
        )
        .unwrap();
        assert_eq!(sample.avg_ms_per_op, 1000.0 / sample.ops_per_sec);
        assert_eq!(sample.text_bytes, PLAIN_TEXT.len());
        assert!(sample.samples.unwrap() >= 3);
        assert!(sample.rme_pct.is_some());
    }

    #[test]
    fn test_failing_unit_does_not_stop_later_units() {
        let mut events = Vec::new();
        Suite::new(fast_config())
            .unwrap()
            .add("broken", || Err("nope".to_string()))
            .add("fine", || {
                black_box(1 + 1);
                Ok(())
            })
            .run(|event| events.push(event));

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            SuiteEvent::Error(SuiteError {
                name: "broken".to_string(),
                message: "nope".to_string(),
            })
        );
        assert!(matches!(&events[1], SuiteEvent::Cycle(c) if c.name == "fine"));
    }

    #[test]
    fn test_panicking_unit_reports_error() {
        let mut errors = Vec::new();
        Suite::new(fast_config())
            .unwrap()
            .add("panics", || -> std::result::Result<(), String> { panic!("matcher exploded") })
            .run(|event| {
                if let SuiteEvent::Error(err) = event {
                    errors.push(err);
                }
            });

        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("matcher exploded"));
    }

    #[test]
    fn test_matcher_error_becomes_suite_failure() {
        let failing = |_: &str| -> MatchResult<Vec<LinkMatch>> { Err(MatchError::engine("boom")) };
        let err = benchmark_statistical("w", "text", &failing, &fast_config()).unwrap_err();
        assert_eq!(
            err,
            BenchError::SuiteFailed {
                workload: "w".to_string(),
                message: "matcher failed: boom".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_sampler_config() {
        let config = SamplerConfig::default().with_tolerance(-1.0);
        assert!(Suite::new(config.clone()).is_err());
        let err = benchmark_statistical("w", "t", &LinkMatcher::new(), &config).unwrap_err();
        assert!(!err.is_workload_scoped());
    }

    #[test]
    fn test_len() {
        let suite = Suite::new(fast_config()).unwrap().add("a", || Ok(())).add("b", || Ok(()));
        assert_eq!(suite.len(), 2);
        assert!(!suite.is_empty());
    }
}
