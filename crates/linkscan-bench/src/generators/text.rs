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

//! Synthetic text generation with tunable link density.
//!
//! Text is built word by word from the fixed vocabularies in
//! [`super::vocabulary`]. The requested byte size is converted into a word
//! budget with a fixed average word length, so the produced length is only
//! an approximation of the target.

use super::vocabulary::{FILLER_WORDS, LINK_TOKENS};
use crate::error::{BenchError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Average bytes per generated word, separator included.
pub const BYTES_PER_WORD: usize = 6;

/// Generates text of roughly `target_size_bytes` with the given link density.
///
/// Uses the thread-local RNG, so output differs between calls. See
/// [`generate_text_with`] for reproducible output.
///
/// # Arguments
///
/// * `target_size_bytes` - Approximate size of the text (at least [`BYTES_PER_WORD`])
/// * `link_density` - Fraction of words that are links, within `[0, 1]`
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] for a density outside `[0, 1]` or a
/// target size too small to hold one word.
///
/// # Examples
///
/// ```
/// use linkscan_bench::generators::generate_text;
///
/// let text = generate_text(1024, 0.1).unwrap();
/// assert_eq!(text.split(' ').count(), 1024 / 6);
/// ```
pub fn generate_text(target_size_bytes: usize, link_density: f64) -> Result<String> {
    generate_text_with(&mut rand::thread_rng(), target_size_bytes, link_density)
}

/// Generates text using the supplied random number generator.
pub fn generate_text_with<R: Rng + ?Sized>(
    rng: &mut R,
    target_size_bytes: usize,
    link_density: f64,
) -> Result<String> {
    let word_count = target_word_count(target_size_bytes)?;
    let interval = link_interval(link_density)?;

    let mut text = String::with_capacity(target_size_bytes + 64);
    for i in 0..word_count {
        let vocabulary = match interval {
            Some(every) if i > 0 && i % every == 0 => LINK_TOKENS,
            _ => FILLER_WORDS,
        };
        // Vocabularies are non-empty constants.
        if let Some(token) = vocabulary.choose(rng) {
            text.push(' ');
            text.push_str(token);
        }
    }

    Ok(text.trim().to_string())
}

/// Returns the word budget for a byte target.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] when the budget would be zero words.
pub fn target_word_count(target_size_bytes: usize) -> Result<usize> {
    if target_size_bytes < BYTES_PER_WORD {
        return Err(BenchError::invalid_config(
            "target_size_bytes",
            format!(
                "must be at least {} bytes, got {}",
                BYTES_PER_WORD, target_size_bytes
            ),
        ));
    }
    Ok(target_size_bytes / BYTES_PER_WORD)
}

/// Returns how many words separate two links, or `None` when no link is ever
/// inserted (density zero).
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] when the density is NaN or outside
/// `[0, 1]`.
pub fn link_interval(link_density: f64) -> Result<Option<usize>> {
    if !(0.0..=1.0).contains(&link_density) {
        return Err(BenchError::invalid_config(
            "link_density",
            format!("must be within [0, 1], got {}", link_density),
        ));
    }
    if link_density == 0.0 {
        return Ok(None);
    }
    // Saturates to usize::MAX for densities so small the reciprocal overflows.
    Ok(Some(((1.0 / link_density).floor() as usize).max(1)))
}
