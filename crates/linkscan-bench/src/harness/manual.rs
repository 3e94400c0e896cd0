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

//! Fixed-iteration timing loop.
//!
//! The matcher runs a set number of times back to back between two clock
//! readings. There is no warm-up and no retry, so a single run is noisier
//! than the cycle sampler but its iteration count is exactly reproducible.

use crate::core::Sample;
use crate::error::{BenchError, Result};
use linkscan_core::Matcher;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Runs `matcher` over `text` exactly `iterations` times and derives a sample.
///
/// # Errors
///
/// - [`BenchError::InvalidConfig`] if `iterations` is zero
/// - [`BenchError::Matcher`] if any call fails
/// - [`BenchError::IndeterminateRate`] if the run finished within clock resolution
///
/// # Example
///
/// ```
/// use linkscan_bench::harness::benchmark_manual;
/// use linkscan_core::LinkMatcher;
///
/// let sample = benchmark_manual("demo", "see www.github.com", 100, &LinkMatcher::new()).unwrap();
/// assert_eq!(sample.iterations, 100);
/// ```
pub fn benchmark_manual<M>(label: &str, text: &str, iterations: u64, matcher: &M) -> Result<Sample>
where
    M: Matcher + ?Sized,
{
    if iterations == 0 {
        return Err(BenchError::invalid_config("iterations", "must be positive"));
    }
    debug!(workload = label, iterations, bytes = text.len(), "starting manual loop");

    let start = Instant::now();
    for _ in 0..iterations {
        let links = matcher
            .find_links(black_box(text))
            .map_err(|source| BenchError::Matcher {
                workload: label.to_string(),
                source,
            })?;
        black_box(links);
    }
    let duration = start.elapsed();

    debug!(workload = label, ?duration, "manual loop finished");
    Sample::from_manual_run(label, text.len(), iterations, duration)
}
