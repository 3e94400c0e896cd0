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

//! Named workloads for the two timing engines.
//!
//! A [`WorkloadSpec`] is a static recipe; [`WorkloadSpec::build`] turns it
//! into a [`Workload`] holding the actual text. Generated workloads get fresh
//! random text every time they are built.

use super::text::generate_text_with;
use crate::core::config::{
    LARGE_TEXT_BYTES, MEDIUM_TEXT_BYTES, SMALL_TEXT_BYTES, VERY_LARGE_TEXT_BYTES,
};
use crate::error::Result;
use rand::Rng;

/// Links, emails and a trailing sentence in one short paragraph.
pub const URL_HEAVY_TEXT: &str = "Visit https://example.com or http://test.org and check www.github.com for updates. Email us at contact@example.com";

/// Prose without a single link.
pub const PLAIN_TEXT: &str = "The quick brown fox jumps over the lazy dog. Lorem ipsum dolor sit amet consectetur adipiscing elit.";

/// One link per scheme the matcher knows about.
pub const MIXED_PROTOCOLS_TEXT: &str = "https://secure.example.com http://legacy.site.org ftp://files.server.net //cdn.example.com mailto:user@example.com";

/// Comma-separated email addresses.
pub const EMAIL_HEAVY_TEXT: &str = "Contact john@example.com, mary@test.org, support@company.co.uk, admin@domain.net for more information";

/// Where a workload's text comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkloadSource {
    /// Synthetic text from the generator.
    Generated {
        /// Target size in bytes.
        target_size_bytes: usize,
        /// Fraction of words that are links.
        link_density: f64,
    },
    /// Literal text.
    Fixed(&'static str),
}

/// Static description of a workload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadSpec {
    /// Display name.
    pub name: &'static str,
    /// Text source.
    pub source: WorkloadSource,
}

impl WorkloadSpec {
    /// Describes a generated workload.
    pub const fn generated(
        name: &'static str,
        target_size_bytes: usize,
        link_density: f64,
    ) -> Self {
        Self {
            name,
            source: WorkloadSource::Generated {
                target_size_bytes,
                link_density,
            },
        }
    }

    /// Describes a fixed-content workload.
    pub const fn fixed(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            source: WorkloadSource::Fixed(text),
        }
    }

    /// Returns the requested size in bytes (the literal length for fixed text).
    pub fn target_size_bytes(&self) -> usize {
        match self.source {
            WorkloadSource::Generated {
                target_size_bytes, ..
            } => target_size_bytes,
            WorkloadSource::Fixed(text) => text.len(),
        }
    }

    /// Returns the link density for generated workloads.
    pub fn link_density(&self) -> Option<f64> {
        match self.source {
            WorkloadSource::Generated { link_density, .. } => Some(link_density),
            WorkloadSource::Fixed(_) => None,
        }
    }

    /// Returns whether the workload has literal content.
    pub fn is_fixed(&self) -> bool {
        matches!(self.source, WorkloadSource::Fixed(_))
    }

    /// Builds the workload with the thread-local RNG.
    pub fn build(&self) -> Result<Workload> {
        self.build_with(&mut rand::thread_rng())
    }

    /// Builds the workload with the supplied RNG.
    pub fn build_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Workload> {
        let text = match self.source {
            WorkloadSource::Generated {
                target_size_bytes,
                link_density,
            } => generate_text_with(rng, target_size_bytes, link_density)?,
            WorkloadSource::Fixed(text) => text.to_string(),
        };

        Ok(Workload {
            name: self.name.to_string(),
            text,
            target_size_bytes: self.target_size_bytes(),
            link_density: self.link_density(),
        })
    }
}

/// A named text ready to be measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    /// Display name.
    pub name: String,
    /// Text handed to the matcher.
    pub text: String,
    /// Requested size in bytes.
    pub target_size_bytes: usize,
    /// Link density for generated text.
    pub link_density: Option<f64>,
}

impl Workload {
    /// Returns the actual text size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.text.len()
    }
}

/// Workloads measured by the manual loop engine.
pub const SIMPLE_WORKLOADS: &[WorkloadSpec] = &[
    WorkloadSpec::generated("Small text (100 bytes, 0% links)", SMALL_TEXT_BYTES, 0.0),
    WorkloadSpec::generated("Small text (100 bytes, 10% links)", SMALL_TEXT_BYTES, 0.1),
    WorkloadSpec::generated("Small text (100 bytes, 50% links)", SMALL_TEXT_BYTES, 0.5),
    WorkloadSpec::generated("Medium text (1KB, 0% links)", MEDIUM_TEXT_BYTES, 0.0),
    WorkloadSpec::generated("Medium text (1KB, 10% links)", MEDIUM_TEXT_BYTES, 0.1),
    WorkloadSpec::generated("Medium text (1KB, 50% links)", MEDIUM_TEXT_BYTES, 0.5),
    WorkloadSpec::generated("Large text (10KB, 0% links)", LARGE_TEXT_BYTES, 0.0),
    WorkloadSpec::generated("Large text (10KB, 10% links)", LARGE_TEXT_BYTES, 0.1),
    WorkloadSpec::generated("Large text (10KB, 50% links)", LARGE_TEXT_BYTES, 0.5),
    WorkloadSpec::fixed("URL-heavy content", URL_HEAVY_TEXT),
    WorkloadSpec::fixed("Plain text (no URLs)", PLAIN_TEXT),
];

/// Workloads measured by the statistical suite.
pub const SUITE_WORKLOADS: &[WorkloadSpec] = &[
    WorkloadSpec::generated("Small text (100 bytes, 0% links)", SMALL_TEXT_BYTES, 0.0),
    WorkloadSpec::generated("Small text (100 bytes, 10% links)", SMALL_TEXT_BYTES, 0.1),
    WorkloadSpec::generated("Small text (100 bytes, 50% links)", SMALL_TEXT_BYTES, 0.5),
    WorkloadSpec::generated("Medium text (1KB, 0% links)", MEDIUM_TEXT_BYTES, 0.0),
    WorkloadSpec::generated("Medium text (1KB, 10% links)", MEDIUM_TEXT_BYTES, 0.1),
    WorkloadSpec::generated("Medium text (1KB, 50% links)", MEDIUM_TEXT_BYTES, 0.5),
    WorkloadSpec::generated("Large text (10KB, 0% links)", LARGE_TEXT_BYTES, 0.0),
    WorkloadSpec::generated("Large text (10KB, 10% links)", LARGE_TEXT_BYTES, 0.1),
    WorkloadSpec::generated("Large text (10KB, 50% links)", LARGE_TEXT_BYTES, 0.5),
    WorkloadSpec::generated("Very large text (50KB, 10% links)", VERY_LARGE_TEXT_BYTES, 0.1),
    WorkloadSpec::fixed("URL-heavy content", URL_HEAVY_TEXT),
    WorkloadSpec::fixed("Plain text (no URLs)", PLAIN_TEXT),
    WorkloadSpec::fixed("Mixed protocols", MIXED_PROTOCOLS_TEXT),
    WorkloadSpec::fixed("Email-heavy content", EMAIL_HEAVY_TEXT),
];

/// Keeps the specs whose name contains `filter`, ignoring case.
pub fn filter_workloads<'a>(
    specs: &'a [WorkloadSpec],
    filter: Option<&str>,
) -> Vec<&'a WorkloadSpec> {
    match filter {
        Some(needle) => {
            let needle = needle.to_lowercase();
            specs
                .iter()
                .filter(|spec| spec.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => specs.iter().collect(),
    }
}

/// Finds a spec by exact name.
pub fn find_workload<'a>(specs: &'a [WorkloadSpec], name: &str) -> Option<&'a WorkloadSpec> {
    specs.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkscan_core::{LinkMatcher, Matcher};
    use std::collections::HashSet;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(SIMPLE_WORKLOADS.len(), 11);
        assert_eq!(SUITE_WORKLOADS.len(), 14);
        assert_eq!(SUITE_WORKLOADS.iter().filter(|s| s.is_fixed()).count(), 4);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = SUITE_WORKLOADS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SUITE_WORKLOADS.len());
    }

    #[test]
    fn test_simple_workloads_are_in_suite() {
        for spec in SIMPLE_WORKLOADS {
            assert_eq!(find_workload(SUITE_WORKLOADS, spec.name), Some(spec));
        }
    }

    #[test]
    fn test_build_fixed() {
        let spec = find_workload(SUITE_WORKLOADS, "Plain text (no URLs)").unwrap();
        let workload = spec.build().unwrap();
        assert_eq!(workload.text, PLAIN_TEXT);
        assert_eq!(workload.target_size_bytes, PLAIN_TEXT.len());
        assert_eq!(workload.link_density, None);
    }

    #[test]
    fn test_build_generated() {
        let spec = WorkloadSpec::generated("custom", 1024, 0.1);
        let workload = spec.build().unwrap();
        assert_eq!(workload.target_size_bytes, 1024);
        assert_eq!(workload.link_density, Some(0.1));
        assert_eq!(workload.text.split(' ').count(), 170);
    }

    #[test]
    fn test_build_invalid_density() {
        let spec = WorkloadSpec::generated("broken", 1024, 2.0);
        assert!(spec.build().is_err());
    }

    #[test]
    fn test_fixed_texts_link_counts() {
        let matcher = LinkMatcher::new();
        let count = |text: &str| matcher.find_links(text).unwrap().len();
        assert_eq!(count(URL_HEAVY_TEXT), 4);
        assert_eq!(count(PLAIN_TEXT), 0);
        assert_eq!(count(MIXED_PROTOCOLS_TEXT), 5);
        assert_eq!(count(EMAIL_HEAVY_TEXT), 4);
    }

    #[test]
    fn test_filter_workloads() {
        assert_eq!(filter_workloads(SUITE_WORKLOADS, None).len(), 14);
        assert_eq!(filter_workloads(SUITE_WORKLOADS, Some("small")).len(), 3);
        assert_eq!(filter_workloads(SUITE_WORKLOADS, Some("50% LINKS")).len(), 3);
        assert!(filter_workloads(SUITE_WORKLOADS, Some("nothing")).is_empty());
    }
}
