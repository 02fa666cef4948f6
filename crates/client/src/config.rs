// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Settings are resolved in layers, later layers winning:
//! built-in defaults, a TOML config file, the `TEMPEST_HOST` and
//! `TEMPEST_PORT` environment variables, then command-line flags.
//!
//! The config file is the first of:
//! - an explicitly given path (`--config`)
//! - `$TEMPEST_CONFIG`
//! - `<config dir>/tempest/config.toml`, if it exists

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::connection::{Endpoint, TransportOptions, DEFAULT_HOST, DEFAULT_PORT};
use crate::env;
use crate::error::{Error, Result};
use crate::session::DEFAULT_MAX_RETRIES;

const CONFIG_DIR_NAME: &str = "tempest";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Connection settings for a Tempest client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Reconnect-and-retry cycles per call.
    pub max_retries: u32,
    /// Pause before each reconnect, in milliseconds.
    pub reconnect_delay_ms: u64,
    /// Connect timeout in milliseconds. 0 = wait indefinitely.
    pub connect_timeout_ms: u64,
    /// Read/write timeout in milliseconds. 0 = wait indefinitely.
    pub io_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_retries: DEFAULT_MAX_RETRIES,
            reconnect_delay_ms: 0,
            connect_timeout_ms: duration_ms(TransportOptions::default().connect_timeout),
            io_timeout_ms: duration_ms(TransportOptions::default().io_timeout),
        }
    }
}

impl ClientConfig {
    /// Read a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the first config file that applies, or the defaults if none does.
    ///
    /// An explicit path or `$TEMPEST_CONFIG` must point at a readable file;
    /// the per-user file is only read when present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = env::config_path() {
            return Self::load(&path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Discover the config file, then apply the environment.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::discover(explicit)?.with_env()
    }

    /// Apply `TEMPEST_HOST` and `TEMPEST_PORT`.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(env::host(), env::port().as_deref())
    }

    /// Replace host and port with the given values where present.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<&str>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid port '{}'", port)))?;
        }
        Ok(self)
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            connect_timeout: ms_duration(self.connect_timeout_ms),
            io_timeout: ms_duration(self.io_timeout_ms),
        }
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}

/// The per-user config file location, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn ms_duration(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

fn duration_ms(duration: Option<Duration>) -> u64 {
    duration.map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
