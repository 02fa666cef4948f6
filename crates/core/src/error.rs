// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tempest-core operations.

use thiserror::Error;

/// All possible errors that can occur in tempest-core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid attribute value: '{0}'\n  hint: expected a quoted string, true, false, null or an integer")]
    Decode(String),

    #[error("invalid node: '{0}'\n  hint: nodes are written as <type>:<id>, e.g. user:alice")]
    InvalidNode(String),
}

/// A specialized Result type for tempest-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
