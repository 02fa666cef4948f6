// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Retry-through-reconnect sessions.
//!
//! A [`ResilientSession`] holds one stub, and through it one connection, to a
//! single endpoint. Every remote call goes through [`ResilientSession::execute`]:
//! when the call fails at the transport level the session reconnects, rebuilds
//! the stub and replays the call, up to `max_retries` times. Remote exceptions
//! and protocol errors are never retried.

use std::fmt;
use std::thread;
use std::time::Duration;

use tempest_rpc::{RpcError, RpcResult};

use crate::connection::{Connection, Endpoint, TransportOptions};
use crate::error::{Error, Result};
use crate::stub::ServiceStub;

/// Default number of reconnect-and-retry cycles per call.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

type StubFactory<S> = Box<dyn FnMut(Connection) -> S + Send>;

/// Configures and opens a [`ResilientSession`].
pub struct SessionBuilder<S> {
    endpoint: Endpoint,
    max_retries: u32,
    reconnect_delay: Duration,
    transport: TransportOptions,
    factory: Option<StubFactory<S>>,
}

impl<S: ServiceStub> SessionBuilder<S> {
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Pause before each reconnect. Zero (the default) reconnects at once.
    pub fn reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn transport(mut self, options: TransportOptions) -> Self {
        self.transport = options;
        self
    }

    /// Set how a stub is built on top of a fresh connection.
    pub fn stub_factory<F>(mut self, factory: F) -> Self
    where
        F: FnMut(Connection) -> S + Send + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Open the first connection and build the stub on it.
    pub fn connect(self) -> Result<ResilientSession<S>> {
        let Some(factory) = self.factory else {
            return Err(Error::NotImplemented("stub factory"));
        };

        let mut session = ResilientSession {
            endpoint: self.endpoint,
            max_retries: self.max_retries,
            reconnect_delay: self.reconnect_delay,
            transport: self.transport,
            factory,
            stub: None,
            reconnects: 0,
            closed: false,
        };
        session.stub = Some(session.open_stub()?);
        Ok(session)
    }
}

/// A stub that survives transport failures.
///
/// One session means one connection and one call at a time. `execute` takes
/// `&mut self`; share a session across threads behind a `Mutex`.
pub struct ResilientSession<S> {
    endpoint: Endpoint,
    max_retries: u32,
    reconnect_delay: Duration,
    transport: TransportOptions,
    factory: StubFactory<S>,
    stub: Option<S>,
    reconnects: u64,
    closed: bool,
}

impl<S: ServiceStub> ResilientSession<S> {
    pub fn builder(endpoint: Endpoint) -> SessionBuilder<S> {
        SessionBuilder {
            endpoint,
            max_retries: DEFAULT_MAX_RETRIES,
            reconnect_delay: Duration::ZERO,
            transport: TransportOptions::default(),
            factory: None,
        }
    }

    /// Connect with default transport options and no reconnect delay.
    pub fn new<F>(host: impl Into<String>, port: u16, factory: F, max_retries: u32) -> Result<Self>
    where
        F: FnMut(Connection) -> S + Send + 'static,
    {
        Self::builder(Endpoint::new(host, port))
            .max_retries(max_retries)
            .stub_factory(factory)
            .connect()
    }

    /// Run one remote call, reconnecting and retrying on transport faults.
    ///
    /// `call` may run up to `max_retries + 1` times, each time against a
    /// freshly built stub. A failed reconnect ends the call with
    /// [`Error::Connect`]; the next call dials again.
    pub fn execute<T, F>(&mut self, mut call: F) -> Result<T>
    where
        F: FnMut(&mut S) -> RpcResult<T>,
    {
        if self.closed {
            return Err(Error::SessionClosed);
        }

        let mut stub = match self.stub.take() {
            Some(mut stub) => {
                if stub.connection().is_open() {
                    stub
                } else {
                    drop(stub);
                    self.redial_before_call()?
                }
            }
            None => self.redial_before_call()?,
        };

        let mut attempt = 0;
        loop {
            let source = match call(&mut stub) {
                Ok(value) => {
                    self.stub = Some(stub);
                    return Ok(value);
                }
                Err(RpcError::Transport(source)) => source,
                Err(err) => {
                    self.stub = Some(stub);
                    return Err(err.into());
                }
            };

            if attempt == self.max_retries {
                self.stub = Some(stub);
                return Err(Error::RetriesExhausted {
                    attempts: attempt + 1,
                    source,
                });
            }

            attempt += 1;
            tracing::warn!(
                endpoint = %self.endpoint,
                attempt,
                max_retries = self.max_retries,
                error = %source,
                "reconnecting to {}",
                self.endpoint
            );
            if !self.reconnect_delay.is_zero() {
                thread::sleep(self.reconnect_delay);
            }

            stub.connection().close();
            drop(stub);
            stub = self.redial()?;
        }
    }

    /// Close the connection. Later calls fail with [`Error::SessionClosed`].
    pub fn close(&mut self) {
        if let Some(mut stub) = self.stub.take() {
            stub.connection().close();
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Reconnects performed over the life of the session.
    pub fn reconnects(&self) -> u64 {
        self.reconnects
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Replace a connection that was lost before this call started.
    fn redial_before_call(&mut self) -> Result<S> {
        tracing::warn!(
            endpoint = %self.endpoint,
            "reconnecting to {}: connection lost before call",
            self.endpoint
        );
        self.redial()
    }

    fn open_stub(&mut self) -> Result<S> {
        let connection = Connection::open(&self.endpoint, &self.transport)?;
        Ok((self.factory)(connection))
    }

    fn redial(&mut self) -> Result<S> {
        let stub = self.open_stub()?;
        self.reconnects += 1;
        Ok(stub)
    }
}

impl<S> fmt::Debug for ResilientSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResilientSession")
            .field("endpoint", &self.endpoint)
            .field("max_retries", &self.max_retries)
            .field("reconnect_delay", &self.reconnect_delay)
            .field("reconnects", &self.reconnects)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
