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

//! Token vocabularies for synthetic text.
//!
//! The two sets are disjoint: no filler word contains link syntax, so a
//! generated word can always be attributed to exactly one set.

/// Filler words with no link syntax.
pub const FILLER_WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "lorem", "ipsum", "dolor",
    "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do", "eiusmod", "tempor",
    "incididunt", "ut", "labore",
];

/// Link-like tokens: URLs, emails and protocol-relative references.
pub const LINK_TOKENS: &[&str] = &[
    "https://example.com",
    "http://test.org/path/to/resource",
    "www.github.com",
    "example.org/api/v1/endpoint",
    "user@example.com",
    "https://subdomain.domain.co.uk/path?query=value",
    "ftp://files.server.net/download",
    "//protocol-relative.com",
];

/// Returns whether `token` belongs to the link vocabulary.
pub fn is_link_token(token: &str) -> bool {
    LINK_TOKENS.contains(&token)
}

/// Returns whether `token` belongs to the filler vocabulary.
pub fn is_filler_word(token: &str) -> bool {
    FILLER_WORDS.contains(&token)
}
