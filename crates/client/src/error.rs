// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use tempest_rpc::{RemoteException, RpcError};

/// All possible errors that can occur in the tempest client.
///
/// Only the session's retry protocol acts on errors; every other layer
/// passes them up unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot connect to {endpoint}: {source}\n  hint: check that the Tempest server is running and reachable")]
    Connect {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    #[error("connection lost after {attempts} attempt(s): {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Application(RemoteException),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error(transparent)]
    Decode(#[from] tempest_core::Error),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("session is closed")]
    SessionClosed,

    #[error("clause '{clause}' matched {count} nodes, expected exactly one")]
    NotUnique { clause: String, count: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converts a non-transport RPC failure.
///
/// Transport faults only reach here from outside the retry protocol, where
/// they are reported as if retries were exhausted on the first attempt.
impl From<RpcError> for Error {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::Transport(source) => Error::RetriesExhausted {
                attempts: 1,
                source,
            },
            RpcError::Application(e) => Error::Application(e),
            RpcError::Protocol(msg) => Error::Protocol(msg),
        }
    }
}

/// A specialized Result type for tempest client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
