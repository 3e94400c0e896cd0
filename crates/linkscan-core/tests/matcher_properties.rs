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

//! Property-based tests for link match spans.

use linkscan_core::{LinkKind, LinkMatcher, Matcher};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{1,10}").expect("valid word regex"),
        Just("https://example.com".to_string()),
        Just("www.github.com".to_string()),
        Just("user@example.com".to_string()),
        Just("//protocol-relative.com".to_string()),
        Just("example.org/api/v1/endpoint".to_string()),
        Just("(see".to_string()),
        Just("it).".to_string()),
    ]
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..40).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: spans are in bounds, ordered and non-overlapping, and `raw`
    /// is exactly the text under the span.
    #[test]
    fn prop_spans_are_consistent(text in sentence()) {
        let links = LinkMatcher::new().find_links(&text).unwrap();

        let mut last_end = 0;
        for link in &links {
            prop_assert!(link.start >= last_end, "overlap at {}", link.start);
            prop_assert!(link.end <= text.len());
            prop_assert_eq!(&text[link.start..link.end], link.raw.as_str());
            last_end = link.end;
        }
    }

    /// Property: normalized URLs always carry a scheme or a `//` prefix.
    #[test]
    fn prop_normalized_urls_have_scheme(text in sentence()) {
        for link in LinkMatcher::new().find_links(&text).unwrap() {
            let ok = match link.kind {
                LinkKind::ProtocolRelative => link.url.starts_with("//"),
                LinkKind::Email | LinkKind::Mailto => link.url.starts_with("mailto:"),
                LinkKind::Url | LinkKind::Fuzzy => link.url.contains("://"),
            };
            prop_assert!(ok, "unexpected url {:?} for {:?}", link.url, link.kind);
        }
    }

    /// Property: lowercase words without dots, `@` or slashes never match.
    #[test]
    fn prop_plain_words_never_match(words in prop::collection::vec("[a-z]{1,12}", 1..50)) {
        let text = words.join(" ");
        prop_assert!(LinkMatcher::new().find_links(&text).unwrap().is_empty());
    }
}
