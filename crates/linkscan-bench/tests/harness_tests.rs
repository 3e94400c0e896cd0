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

//! End-to-end tests for the timing engines and the runner.

use linkscan_bench::core::Engine;
use linkscan_bench::generators::{generate_text, WorkloadSpec, PLAIN_TEXT, URL_HEAVY_TEXT};
use linkscan_bench::{
    benchmark_manual, benchmark_statistical, BenchError, BenchmarkRunner, ConsoleReporter,
    HarnessConfig, RunSummary, SamplerConfig, Suite, SuiteEvent,
};
use linkscan_core::{LinkMatch, LinkMatcher, MatchError, MatchResult};
use std::time::Duration;

fn quick_sampler() -> SamplerConfig {
    SamplerConfig::default()
        .with_min_sample_time(Duration::from_millis(1))
        .with_max_time(Duration::from_millis(30))
        .with_min_samples(3)
        .with_max_samples(8)
}

fn noop(_: &str) -> MatchResult<Vec<LinkMatch>> {
    Ok(Vec::new())
}

fn always_fails(_: &str) -> MatchResult<Vec<LinkMatch>> {
    Err(MatchError::engine("injected failure"))
}

#[test]
fn test_small_generated_text_through_manual_loop() {
    let text = generate_text(100, 0.1).unwrap();
    let matcher = LinkMatcher::new();
    let sample = benchmark_manual("Small text (100 bytes, 10% links)", &text, 50_000, &matcher)
        .unwrap();

    assert_eq!(sample.iterations, 50_000);
    assert_eq!(sample.engine, Engine::Manual);
    // 16 words of at most 47 bytes each, single-space separated.
    assert!(sample.text_bytes >= 16 * 2 + 15 && sample.text_bytes <= 16 * 47 + 15);
    assert!(sample.duration_ms() >= 0.0);
    assert!(sample.ops_per_sec > 0.0);
}

#[test]
fn test_noop_matcher_rate_and_latency_are_reciprocal() {
    let text = generate_text(1024, 0.1).unwrap();
    match benchmark_manual("noop", &text, 10_000, &noop) {
        Ok(sample) => {
            assert!(sample.ops_per_sec.is_finite() && sample.ops_per_sec > 0.0);
            assert_eq!(sample.ops_per_sec, sample.ops_per_sec.floor());
            assert!(sample.avg_ms_per_op > 0.0);
            // Flooring the rate loses at most one op/sec.
            let product = sample.ops_per_sec * sample.avg_ms_per_op;
            assert!(product <= 1000.0 + 1e-6);
            assert!(product >= 1000.0 - sample.avg_ms_per_op - 1e-6);
        }
        // A no-op loop may finish within clock resolution on coarse clocks.
        Err(err) => assert!(matches!(
            err,
            BenchError::IndeterminateRate {
                iterations: 10_000,
                ..
            }
        )),
    }
}

#[test]
fn test_plain_text_statistical_latency_is_exact() {
    let matcher = LinkMatcher::new();
    let sample = benchmark_statistical("Plain text (no URLs)", PLAIN_TEXT, &matcher, &quick_sampler())
        .unwrap();
    assert_eq!(sample.engine, Engine::Statistical);
    assert_eq!(sample.avg_ms_per_op, 1000.0 / sample.ops_per_sec);
}

#[test]
fn test_failing_matcher_emits_error_event_and_suite_continues() {
    let mut events = Vec::new();
    Suite::new(quick_sampler())
        .unwrap()
        .add("URL-heavy content", || {
            always_fails(URL_HEAVY_TEXT).map(drop).map_err(|e| e.to_string())
        })
        .add("Plain text (no URLs)", || {
            noop(PLAIN_TEXT).map(drop).map_err(|e| e.to_string())
        })
        .run(|event| events.push(event));

    assert_eq!(events.len(), 2);
    match &events[0] {
        SuiteEvent::Error(err) => {
            assert_eq!(err.name, "URL-heavy content");
            assert!(err.message.contains("injected failure"));
        }
        other => panic!("expected an error event, got {:?}", other),
    }
    match &events[1] {
        SuiteEvent::Cycle(cycle) => {
            assert_eq!(cycle.name, "Plain text (no URLs)");
            assert!(cycle.summary().starts_with("Plain text (no URLs) x "));
        }
        other => panic!("expected a cycle event, got {:?}", other),
    }
}

#[test]
fn test_runner_reports_every_failing_workload() {
    let specs = [
        WorkloadSpec::generated("Small text (100 bytes, 10% links)", 100, 0.1),
        WorkloadSpec::fixed("URL-heavy content", URL_HEAVY_TEXT),
        WorkloadSpec::fixed("Plain text (no URLs)", PLAIN_TEXT),
    ];
    let config = HarnessConfig::default().with_sampler(quick_sampler());
    let mut runner = BenchmarkRunner::with_reporter(config, ConsoleReporter::new(Vec::new()));

    let summary = runner.run(Engine::Statistical, &specs, &always_fails).unwrap();
    assert_eq!(summary, RunSummary { completed: 0, failed: 3 });

    let out = String::from_utf8(runner.into_reporter().into_inner()).unwrap();
    assert_eq!(out.matches("injected failure").count(), 3);
    assert!(out.contains("Benchmark complete: 0 completed, 3 failed"));
}

#[test]
fn test_manual_run_with_iteration_override() {
    let specs = [WorkloadSpec::fixed("URL-heavy content", URL_HEAVY_TEXT)];
    let config = HarnessConfig::default().with_iteration_override(100);
    let mut runner = BenchmarkRunner::with_reporter(config, ConsoleReporter::new(Vec::new()));

    let summary = runner.run(Engine::Manual, &specs, &LinkMatcher::new()).unwrap();
    assert_eq!(summary.completed, 1);

    let out = String::from_utf8(runner.into_reporter().into_inner()).unwrap();
    assert!(out.contains("URL-heavy content:\n"));
    assert!(out.contains(&format!("  Size: {} bytes\n", URL_HEAVY_TEXT.len())));
    assert!(out.contains("  Iterations: 100\n"));
    assert!(out.contains(" ms/op\n"));
}
