// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call and reply messages.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{RpcError, RpcResult};

/// Outgoing call body: `{seq, method, args}` with positional arguments.
#[derive(Serialize)]
pub(crate) struct CallFrame<'a, A: ?Sized> {
    pub seq: u32,
    pub method: &'a str,
    pub args: &'a A,
}

/// A call as seen by the receiving side, with arguments left undecoded until
/// the method is known.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomingCall {
    pub seq: u32,
    pub method: String,
    pub args: rmpv::Value,
}

impl IncomingCall {
    /// Decodes the positional arguments into a typed tuple.
    pub fn args<A: DeserializeOwned>(&self) -> RpcResult<A> {
        rmpv::ext::from_value(self.args.clone()).map_err(|e| {
            RpcError::Protocol(format!("bad arguments for {}: {}", self.method, e))
        })
    }
}

/// Outcome of a call: a value, or an exception the server declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply<T> {
    Ok(T),
    Exception(RemoteException),
}

impl<T> Reply<T> {
    pub fn into_result(self) -> RpcResult<T> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Exception(e) => Err(RpcError::Application(e)),
        }
    }
}

/// Reply body: `{seq, reply}`; `seq` echoes the call.
#[derive(Serialize, Deserialize)]
pub(crate) struct ReplyFrame<T> {
    pub seq: u32,
    pub reply: Reply<T>,
}

/// Exception categories declared by the TempestDB service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// An argument was out of range or malformed.
    InvalidArgument,
    /// A SQL-like filter clause failed to compile or run.
    Sql,
    /// The named edge type or graph is not loaded.
    UndefinedGraph,
    /// The node does not exist.
    InvalidNodeId,
    /// A neighbor index was past the end of the neighbor list.
    InvalidIndex,
    /// Any other server-side failure.
    Internal,
}

impl ExceptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionKind::InvalidArgument => "invalid argument",
            ExceptionKind::Sql => "sql error",
            ExceptionKind::UndefinedGraph => "undefined graph",
            ExceptionKind::InvalidNodeId => "invalid node id",
            ExceptionKind::InvalidIndex => "invalid index",
            ExceptionKind::Internal => "internal error",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A declared exception raised by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RemoteException {
    pub kind: ExceptionKind,
    pub message: String,
}

impl RemoteException {
    pub fn new(kind: ExceptionKind, message: impl Into<String>) -> Self {
        RemoteException {
            kind,
            message: message.into(),
        }
    }
}
