// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message framing.
//!
//! Messages are framed as:
//! - 4 bytes: body length (big-endian u32)
//! - N bytes: MessagePack-encoded body (structs as maps)
//!
//! I/O failures surface as [`RpcError::Transport`]; bodies that cannot be
//! encoded or decoded, and lengths over [`MAX_FRAME_SIZE`], surface as
//! [`RpcError::Protocol`].

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{RpcError, RpcResult};
use crate::message::{CallFrame, IncomingCall, Reply, ReplyFrame};

/// Maximum frame body size (16MB). Traversal results can be large, but a
/// length beyond this means the stream is out of step.
pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// Write one length-prefixed frame and flush.
pub fn write_frame<W: Write>(writer: &mut W, body: &[u8]) -> RpcResult<()> {
    if body.len() > MAX_FRAME_SIZE {
        return Err(RpcError::Protocol(format!(
            "frame too large: {} bytes (max {})",
            body.len(),
            MAX_FRAME_SIZE
        )));
    }
    // Bounded by MAX_FRAME_SIZE above.
    let len = body.len() as u32;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(body)?;
    writer.flush()?;
    Ok(())
}

/// Read one length-prefixed frame.
pub fn read_frame<R: Read>(reader: &mut R) -> RpcResult<Vec<u8>> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let len = u32::from_be_bytes(len_buf) as usize;

    if len > MAX_FRAME_SIZE {
        return Err(RpcError::Protocol(format!(
            "frame too large: {} bytes (max {})",
            len, MAX_FRAME_SIZE
        )));
    }

    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Write a call with positional arguments (a tuple or slice).
pub fn write_call<W: Write, A: Serialize + ?Sized>(
    writer: &mut W,
    seq: u32,
    method: &str,
    args: &A,
) -> RpcResult<()> {
    let frame = CallFrame { seq, method, args };
    let body = rmp_serde::to_vec_named(&frame)
        .map_err(|e| RpcError::Protocol(format!("cannot encode {}: {}", method, e)))?;
    write_frame(writer, &body)
}

/// Read a reply, returning the echoed sequence number with it.
pub fn read_reply<R: Read, T: DeserializeOwned>(reader: &mut R) -> RpcResult<(u32, Reply<T>)> {
    let body = read_frame(reader)?;
    let frame: ReplyFrame<T> = rmp_serde::from_slice(&body)
        .map_err(|e| RpcError::Protocol(format!("cannot decode reply: {}", e)))?;
    Ok((frame.seq, frame.reply))
}

/// Read a call on the serving side.
pub fn read_call<R: Read>(reader: &mut R) -> RpcResult<IncomingCall> {
    let body = read_frame(reader)?;
    rmp_serde::from_slice(&body)
        .map_err(|e| RpcError::Protocol(format!("cannot decode call: {}", e)))
}

/// Write a reply on the serving side.
pub fn write_reply<W: Write, T: Serialize>(
    writer: &mut W,
    seq: u32,
    reply: Reply<T>,
) -> RpcResult<()> {
    let frame = ReplyFrame { seq, reply };
    let body = rmp_serde::to_vec_named(&frame)
        .map_err(|e| RpcError::Protocol(format!("cannot encode reply: {}", e)))?;
    write_frame(writer, &body)
}

#[cfg(test)]
#[path = "framing_tests.rs"]
mod tests;
