// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport connections to a Tempest server.
//!
//! A [`Connection`] owns one TCP socket, wrapped in a buffered reader and a
//! buffered writer, and the call sequence counter that pairs each reply with
//! its call. It is used from one thread at a time and is never reopened:
//! once closed, or once a call has failed at the transport or protocol
//! level, it stays dead and a fresh connection must be opened.

use std::fmt;
use std::io::{self, BufReader, BufWriter};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempest_rpc::{framing, RpcError, RpcResult};

use crate::error::{Error, Result};

/// Default server host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default server port.
pub const DEFAULT_PORT: u16 = 10001;
/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Address of a Tempest server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Endpoint {
            host: host.into(),
            port,
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Socket-level timeouts applied to every connection.
///
/// `None` means wait indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOptions {
    pub connect_timeout: Option<Duration>,
    /// Read and write timeout for calls in flight.
    pub io_timeout: Option<Duration>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        TransportOptions {
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            io_timeout: None,
        }
    }
}

/// Buffered halves of a live socket.
struct Channel {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

/// One transport connection and its encoder/decoder binding.
pub struct Connection {
    endpoint: Endpoint,
    channel: Option<Channel>,
    next_seq: u32,
}

impl Connection {
    /// Open a connection to the given endpoint.
    ///
    /// Every resolved address is tried in turn; the error of the last one is
    /// reported if none accepts.
    pub fn open(endpoint: &Endpoint, options: &TransportOptions) -> Result<Self> {
        let connect_error = |source: io::Error| Error::Connect {
            endpoint: endpoint.to_string(),
            source,
        };

        let stream = dial(endpoint, options.connect_timeout).map_err(connect_error)?;
        stream.set_nodelay(true).map_err(connect_error)?;
        stream
            .set_read_timeout(options.io_timeout)
            .map_err(connect_error)?;
        stream
            .set_write_timeout(options.io_timeout)
            .map_err(connect_error)?;
        let write_half = stream.try_clone().map_err(connect_error)?;

        tracing::debug!(endpoint = %endpoint, "connection opened");

        Ok(Connection {
            endpoint: endpoint.clone(),
            channel: Some(Channel {
                reader: BufReader::new(stream),
                writer: BufWriter::new(write_half),
            }),
            next_seq: 0,
        })
    }

    /// The endpoint this connection was opened to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Check if the socket is still usable.
    pub fn is_open(&self) -> bool {
        self.channel.is_some()
    }

    /// Invoke a remote procedure and wait for its reply.
    ///
    /// `args` is the positional argument list, normally a tuple. A transport
    /// or protocol failure closes the connection; a declared remote
    /// exception leaves it open.
    pub fn call<A, T>(&mut self, method: &str, args: &A) -> RpcResult<T>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let Some(channel) = self.channel.as_mut() else {
            return Err(RpcError::Transport(io::Error::new(
                io::ErrorKind::NotConnected,
                "connection is closed",
            )));
        };

        self.next_seq = self.next_seq.wrapping_add(1);
        let seq = self.next_seq;
        tracing::debug!(endpoint = %self.endpoint, method, seq, "call");

        let result = exchange(channel, seq, method, args);
        match &result {
            Ok(_) | Err(RpcError::Application(_)) => {}
            Err(e) => {
                tracing::debug!(endpoint = %self.endpoint, method, seq, error = %e, "call failed");
                self.close();
            }
        }
        result
    }

    /// Close the socket.
    ///
    /// Safe to call on a connection that is already closed or broken;
    /// shutdown errors are ignored.
    pub fn close(&mut self) {
        if let Some(channel) = self.channel.take() {
            let _ = channel.reader.get_ref().shutdown(Shutdown::Both);
            tracing::debug!(endpoint = %self.endpoint, "connection closed");
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("open", &self.is_open())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}

fn dial(endpoint: &Endpoint, timeout: Option<Duration>) -> io::Result<TcpStream> {
    let mut last_error = None;
    for addr in (endpoint.host.as_str(), endpoint.port).to_socket_addrs()? {
        let attempt = match timeout {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
            None => TcpStream::connect(addr),
        };
        match attempt {
            Ok(stream) => return Ok(stream),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "host resolved to no addresses")
    }))
}

fn exchange<A, T>(channel: &mut Channel, seq: u32, method: &str, args: &A) -> RpcResult<T>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    framing::write_call(&mut channel.writer, seq, method, args)?;
    let (reply_seq, reply) = framing::read_reply(&mut channel.reader)?;
    if reply_seq != seq {
        return Err(RpcError::Protocol(format!(
            "reply {} does not match call {} ({})",
            reply_seq, seq, method
        )));
    }
    reply.into_result()
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
