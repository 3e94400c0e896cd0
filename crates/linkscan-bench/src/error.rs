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

//! Error types for linkscan benchmarking operations.
//!
//! Generation and measurement failures are reported through [`BenchError`]
//! so the runner can decide which of them are fatal to a run and which only
//! affect a single workload.

use linkscan_core::MatchError;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The measured duration was below clock resolution, so no rate exists.
    #[error("Indeterminate rate for '{workload}': {iterations} iterations finished within clock resolution")]
    IndeterminateRate {
        /// Workload name
        workload: String,
        /// Iterations that were run
        iterations: u64,
    },

    /// The matcher under test returned an error.
    #[error("Matcher failed on '{workload}': {source}")]
    Matcher {
        /// Workload name
        workload: String,
        /// Underlying matcher error
        source: MatchError,
    },

    /// The statistical suite reported an error for a workload.
    #[error("Benchmark suite failed on '{workload}': {message}")]
    SuiteFailed {
        /// Workload name
        workload: String,
        /// Failure detail
        message: String,
    },

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

impl BenchError {
    /// Creates an [`BenchError::InvalidConfig`] error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns whether this error only affects the workload it names.
    ///
    /// Configuration and output errors abort a run. Every other variant is
    /// reported and the run moves on.
    pub fn is_workload_scoped(&self) -> bool {
        !matches!(self, BenchError::InvalidConfig { .. } | BenchError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::invalid_config("link_density", "must be within [0, 1]");
        let msg = err.to_string();
        assert!(msg.contains("link_density"));
        assert!(msg.contains("must be within [0, 1]"));

        let err = BenchError::IndeterminateRate {
            workload: "tiny".to_string(),
            iterations: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("tiny"));
        assert!(msg.contains("10 iterations"));
    }

    #[test]
    fn test_matcher_error_display() {
        let err = BenchError::Matcher {
            workload: "Plain text (no URLs)".to_string(),
            source: MatchError::engine("boom"),
        };
        assert!(err.to_string().contains("matcher failed: boom"));
    }

    #[test]
    fn test_workload_scoped() {
        assert!(!BenchError::invalid_config("x", "y").is_workload_scoped());
        assert!(!BenchError::Io("broken pipe".to_string()).is_workload_scoped());
        assert!(BenchError::SuiteFailed {
            workload: "w".to_string(),
            message: "m".to_string(),
        }
        .is_workload_scoped());
    }

    #[test]
    fn test_error_equality() {
        let err1 = BenchError::invalid_config("a", "b");
        let err2 = BenchError::invalid_config("a", "b");
        let err3 = BenchError::invalid_config("a", "c");

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
