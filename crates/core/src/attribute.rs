// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Node attribute values.
//!
//! The attribute fetch procedures return every value as a JSON literal in a
//! string, whatever its logical type. [`AttributeValue::decode`] turns one of
//! those tokens back into a typed value:
//!
//! 1. a leading `"` marks a string, which must end with `"`; the delimiters
//!    are stripped and no escape processing is done,
//! 2. `true` and `false` are booleans,
//! 3. `null` is the absent value,
//! 4. anything else must be an integer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A decoded node attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Bool(bool),
    Null,
    Int(i64),
}

impl AttributeValue {
    /// Decodes one wire token.
    ///
    /// An unterminated string, or a token that is not a string, boolean or
    /// null and does not parse as an `i64`, is a server contract violation
    /// and yields [`Error::Decode`].
    pub fn decode(raw: &str) -> Result<Self> {
        if let Some(rest) = raw.strip_prefix('"') {
            return rest
                .strip_suffix('"')
                .map(|inner| AttributeValue::String(inner.to_string()))
                .ok_or_else(|| Error::Decode(raw.to_string()));
        }
        match raw {
            "true" => Ok(AttributeValue::Bool(true)),
            "false" => Ok(AttributeValue::Bool(false)),
            "null" => Ok(AttributeValue::Null),
            _ => raw
                .parse::<i64>()
                .map(AttributeValue::Int)
                .map_err(|_| Error::Decode(raw.to_string())),
        }
    }

    /// Encodes the value as the JSON literal the server stores.
    ///
    /// Strings are JSON-escaped but [`decode`](Self::decode) does no
    /// unescaping, so a string containing `"` or `\` does not round-trip:
    /// `say "hi"` is sent as `"say \"hi\""` and reads back as `say \"hi\"`.
    pub fn to_wire(&self) -> String {
        match self {
            // Serializing a str to JSON cannot fail.
            AttributeValue::String(s) => {
                serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
            }
            AttributeValue::Bool(b) => b.to_string(),
            AttributeValue::Null => "null".to_string(),
            AttributeValue::Int(i) => i.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "{}", s),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Null => write!(f, "null"),
            AttributeValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for AttributeValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AttributeValue::decode(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Int(i)
    }
}

/// Decodes every value of a batch attribute response, keeping the key set.
///
/// Stops at the first token that fails to decode.
pub fn decode_map<K: Eq + Hash>(raw: HashMap<K, String>) -> Result<HashMap<K, AttributeValue>> {
    raw.into_iter()
        .map(|(key, token)| AttributeValue::decode(&token).map(|value| (key, value)))
        .collect()
}

#[cfg(test)]
#[path = "attribute_tests.rs"]
mod tests;
