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

//! Link detection for plain text.
//!
//! This crate finds URLs, email addresses and protocol-relative references in
//! free-form text. It is the engine measured by `linkscan-bench`, which only
//! sees it through the [`Matcher`] trait.
//!
//! # Recognized links
//!
//! - Explicit schemes: `http://`, `https://`, `ftp://`
//! - `mailto:` addresses and bare email addresses
//! - Protocol-relative references (`//cdn.example.com`)
//! - Scheme-less hosts with a known TLD (`www.github.com`, `example.org/api`)
//!
//! # Example
//!
//! ```
//! use linkscan_core::{LinkKind, LinkMatcher, Matcher};
//!
//! let matcher = LinkMatcher::new();
//! let links = matcher.find_links("Visit www.github.com or mail user@example.com").unwrap();
//!
//! assert_eq!(links.len(), 2);
//! assert_eq!(links[0].kind, LinkKind::Fuzzy);
//! assert_eq!(links[0].url, "http://www.github.com");
//! assert_eq!(links[1].url, "mailto:user@example.com");
//! ```

mod error;
mod limits;
mod matcher;

pub use error::{MatchError, MatchResult};
pub use limits::Limits;
pub use matcher::{LinkKind, LinkMatch, LinkMatcher, Matcher};
