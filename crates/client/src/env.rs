// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by the client are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `TEMPEST_HOST` if set and non-empty.
pub fn host() -> Option<String> {
    std::env::var(vars::TEMPEST_HOST)
        .ok()
        .filter(|h| !h.is_empty())
}

/// Returns the raw value of `TEMPEST_PORT` if set.
///
/// Left unparsed so the caller can report a bad value.
pub fn port() -> Option<String> {
    std::env::var(vars::TEMPEST_PORT).ok()
}

/// Returns the value of `TEMPEST_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::TEMPEST_CONFIG).ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
