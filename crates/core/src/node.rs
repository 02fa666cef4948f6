// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Node records.
//!
//! TempestDB names a vertex by the pair of its node type and its
//! type-scoped identifier. Equality, hashing and ordering all follow that
//! pair, so nodes can key maps and be sorted for stable output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A graph vertex identified by `(type, id)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Node type, e.g. `user` or `book`.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Identifier, unique within the node type.
    pub id: String,
}

impl Node {
    pub fn new(node_type: impl Into<String>, id: impl Into<String>) -> Self {
        Node {
            node_type: node_type.into(),
            id: id.into(),
        }
    }

    /// Returns the node as a `(type, id)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.node_type, &self.id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node_type, self.id)
    }
}

/// Parses the `type:id` form. The id may itself contain colons.
impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((node_type, id)) if !node_type.is_empty() && !id.is_empty() => {
                Ok(Node::new(node_type, id))
            }
            _ => Err(Error::InvalidNode(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
