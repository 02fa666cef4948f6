// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for RPC exchanges.

use crate::message::RemoteException;

/// Failure of one remote procedure call.
///
/// The variants separate faults of the link itself, which a caller may cure
/// by reconnecting, from faults the server reported deliberately and from
/// messages that could not be understood.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The connection failed mid-call (I/O error, reset, EOF, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The server executed the call and raised a declared exception.
    #[error("remote exception: {0}")]
    Application(RemoteException),

    /// A frame could not be encoded or decoded, or did not match the call.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl RpcError {
    /// Returns true for faults of the underlying connection.
    pub fn is_transport(&self) -> bool {
        matches!(self, RpcError::Transport(_))
    }
}

/// Result type for RPC exchanges.
pub type RpcResult<T> = Result<T, RpcError>;
