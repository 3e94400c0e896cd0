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

//! Core benchmark infrastructure.
//!
//! # Modules
//!
//! - `config`: Iteration counts and sampler settings
//! - `measurement`: Samples and derived throughput/latency metrics

pub mod config;
pub mod measurement;

// Re-export commonly used types
pub use config::{
    HarnessConfig, SamplerConfig, DEFAULT_ITERATIONS_FIXED, DEFAULT_ITERATIONS_LARGE,
    DEFAULT_ITERATIONS_MEDIUM, DEFAULT_ITERATIONS_SMALL, LARGE_TEXT_BYTES, MEDIUM_TEXT_BYTES,
    SMALL_TEXT_BYTES, VERY_LARGE_TEXT_BYTES,
};
pub use measurement::{Engine, Sample};
