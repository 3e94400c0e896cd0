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

//! Error types for link matching.

use thiserror::Error;

/// Result type for matcher operations.
pub type MatchResult<T> = std::result::Result<T, MatchError>;

/// An error raised while scanning text for links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Input exceeds the configured size limit.
    #[error("input of {size} bytes exceeds the maximum of {max} bytes")]
    InputTooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// Configured maximum in bytes.
        max: usize,
    },

    /// Input produced more matches than the configured limit.
    #[error("input produced more than {max} matches")]
    TooManyMatches {
        /// Configured maximum match count.
        max: usize,
    },

    /// A matcher implementation failed for a reason of its own.
    #[error("matcher failed: {0}")]
    Engine(String),
}

impl MatchError {
    /// Creates an engine error from any message.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }
}
