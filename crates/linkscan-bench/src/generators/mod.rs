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

//! Workload generation for linkscan benchmarks.
//!
//! - **vocabulary**: Filler words and link-like tokens
//! - **text**: Synthetic text with tunable link density
//! - **workloads**: Named workload presets for both timing engines

pub mod text;
pub mod vocabulary;
pub mod workloads;

pub use text::{generate_text, generate_text_with, link_interval, target_word_count, BYTES_PER_WORD};
pub use vocabulary::{is_filler_word, is_link_token, FILLER_WORDS, LINK_TOKENS};
pub use workloads::{
    filter_workloads, find_workload, Workload, WorkloadSource, WorkloadSpec, EMAIL_HEAVY_TEXT,
    MIXED_PROTOCOLS_TEXT, PLAIN_TEXT, SIMPLE_WORKLOADS, SUITE_WORKLOADS, URL_HEAVY_TEXT,
};
