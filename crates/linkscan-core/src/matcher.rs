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

//! The link matcher and the `Matcher` seam used by the benchmark harness.

use crate::error::{MatchError, MatchResult};
use crate::limits::Limits;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

/// Known top-level domains accepted for scheme-less links.
const FUZZY_TLDS: &str = "com|org|net|edu|gov|mil|int|io|dev|app|info|biz|co|uk|de|fr|nl|eu|us|ca|au|jp|ru|ch|se|no|es|it";

// Alternatives are tried leftmost-first, so order matters: explicit schemes
// win over emails, and emails win over the fuzzy host rule.
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = [
        r#"(?P<url>\b(?:https?|ftp)://[^\s<>"']+)"#.to_string(),
        r"(?P<mailto>\bmailto:[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,})".to_string(),
        r"(?P<email>\b[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}\b)".to_string(),
        r#"(?:^|[\s(])(?P<rel>//[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+(?:[/?#][^\s<>"']*)?)"#.to_string(),
        format!(
            r#"(?P<fuzzy>\b(?:www\.[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*|[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.(?:{}))\b(?::\d{{2,5}})?(?:[/?#][^\s<>"']*)?)"#,
            FUZZY_TLDS
        ),
    ]
    .join("|");

    Regex::new(&pattern).expect("link pattern is a valid regex")
});

/// The kind of link that was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Link with an explicit `http`, `https` or `ftp` scheme.
    Url,
    /// `mailto:` link.
    Mailto,
    /// Bare email address.
    Email,
    /// Protocol-relative reference such as `//cdn.example.com`.
    ProtocolRelative,
    /// Scheme-less host with a known TLD, such as `www.github.com`.
    Fuzzy,
}

impl LinkKind {
    /// Returns a short identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Mailto => "mailto",
            Self::Email => "email",
            Self::ProtocolRelative => "relative",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single link found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Kind of link.
    pub kind: LinkKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// The link exactly as it appears in the text.
    pub raw: String,
    /// Normalized URL (`http://` added to fuzzy links, `mailto:` to emails).
    pub url: String,
}

/// Anything that can scan a text for links.
///
/// The benchmark harness is written against this trait only. Closures with
/// the right signature implement it, which keeps test doubles short:
///
/// ```
/// use linkscan_core::{LinkMatch, MatchResult, Matcher};
///
/// let never = |_text: &str| -> MatchResult<Vec<LinkMatch>> { Ok(Vec::new()) };
/// assert!(never.find_links("https://example.com").unwrap().is_empty());
/// ```
pub trait Matcher {
    /// Returns every link in `text`, in ascending order of position.
    fn find_links(&self, text: &str) -> MatchResult<Vec<LinkMatch>>;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> MatchResult<Vec<LinkMatch>>,
{
    fn find_links(&self, text: &str) -> MatchResult<Vec<LinkMatch>> {
        self(text)
    }
}

/// Regex-backed link matcher.
#[derive(Debug, Clone, Default)]
pub struct LinkMatcher {
    limits: Limits,
}

impl LinkMatcher {
    /// Creates a matcher with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    /// Returns the active limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Quick check for anything link-shaped.
    ///
    /// May report `true` for a candidate that `find_links` later drops after
    /// trimming trailing punctuation (for example a bare `http://.`).
    pub fn test(&self, text: &str) -> bool {
        text.len() <= self.limits.max_input_bytes && LINK_PATTERN.is_match(text)
    }

    fn check_input(&self, text: &str) -> MatchResult<()> {
        if text.len() > self.limits.max_input_bytes {
            return Err(MatchError::InputTooLarge {
                size: text.len(),
                max: self.limits.max_input_bytes,
            });
        }
        Ok(())
    }
}

impl Matcher for LinkMatcher {
    fn find_links(&self, text: &str) -> MatchResult<Vec<LinkMatch>> {
        self.check_input(text)?;

        let mut links = Vec::new();
        for caps in LINK_PATTERN.captures_iter(text) {
            let Some(link) = build_match(&caps) else {
                continue;
            };
            if links.len() == self.limits.max_matches {
                return Err(MatchError::TooManyMatches {
                    max: self.limits.max_matches,
                });
            }
            links.push(link);
        }

        Ok(links)
    }
}

fn build_match(caps: &Captures<'_>) -> Option<LinkMatch> {
    let (kind, m) = if let Some(m) = caps.name("url") {
        (LinkKind::Url, m)
    } else if let Some(m) = caps.name("mailto") {
        (LinkKind::Mailto, m)
    } else if let Some(m) = caps.name("email") {
        (LinkKind::Email, m)
    } else if let Some(m) = caps.name("rel") {
        (LinkKind::ProtocolRelative, m)
    } else {
        (LinkKind::Fuzzy, caps.name("fuzzy")?)
    };

    let raw = match kind {
        LinkKind::Url | LinkKind::ProtocolRelative | LinkKind::Fuzzy => {
            trim_link_end(m.as_str())
        }
        LinkKind::Mailto | LinkKind::Email => m.as_str(),
    };
    if kind == LinkKind::Url && raw.ends_with("://") {
        return None;
    }

    let url = match kind {
        LinkKind::Email => format!("mailto:{}", raw),
        LinkKind::Fuzzy => format!("http://{}", raw),
        _ => raw.to_string(),
    };

    Some(LinkMatch {
        kind,
        start: m.start(),
        end: m.start() + raw.len(),
        raw: raw.to_string(),
        url,
    })
}

/// Strips sentence punctuation and unbalanced closing brackets from the end
/// of a candidate link.
fn trim_link_end(raw: &str) -> &str {
    let mut end = raw.len();
    while let Some(c) = raw[..end].chars().next_back() {
        let strip = match c {
            '.' | ',' | ';' | ':' | '!' | '?' => true,
            ')' => unbalanced(&raw[..end], '(', ')'),
            ']' => unbalanced(&raw[..end], '[', ']'),
            '}' => unbalanced(&raw[..end], '{', '}'),
            _ => false,
        };
        if !strip {
            break;
        }
        end -= c.len_utf8();
    }
    &raw[..end]
}

fn unbalanced(s: &str, open: char, close: char) -> bool {
    let opens = s.chars().filter(|&c| c == open).count();
    let closes = s.chars().filter(|&c| c == close).count();
    closes > opens
}
