// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RPC runtime for the TempestDB protocol.
//!
//! This crate defines the call and reply messages exchanged with a TempestDB
//! server and the framing used to carry them over a byte stream. Bodies are
//! MessagePack with length-prefixed framing. Both halves of the exchange are
//! exposed: clients use [`framing::write_call`] and [`framing::read_reply`],
//! servers (and test endpoints) use [`framing::read_call`] and
//! [`framing::write_reply`].

mod error;
pub mod framing;
mod message;

pub use error::{RpcError, RpcResult};
pub use message::{ExceptionKind, IncomingCall, RemoteException, Reply};

/// Re-exported so endpoints can build dynamic replies without naming the
/// crate themselves.
pub use rmpv::Value;
