//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types and results for the Rangetree library.

use std::fmt::Display;

/// A specialized Result type for Rangetree operations.
pub type RangetreeResult<T> = Result<T, RangetreeError>;

/// Errors that can occur during Rangetree operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangetreeError {
    /// A range was requested whose high endpoint lies below its low endpoint, or a
    /// Rust range expression that covers no values at all.
    #[error("invalid range: high ({high}) < low ({low})")]
    InvalidRange {
        /// Requested low endpoint.
        low: String,
        /// Requested high endpoint.
        high: String,
    },
}

impl RangetreeError {
    pub(crate) fn invalid_range<T: Display>(low: T, high: T) -> Self {
        RangetreeError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}
