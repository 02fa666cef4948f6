// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-process Tempest endpoint for unit tests.
//!
//! Serves one connection at a time on a background thread, handing each
//! call to a handler that decides how to answer it.

#![allow(clippy::unwrap_used)]

use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use tempest_rpc::{framing, ExceptionKind, IncomingCall, RemoteException, Reply, Value};

use tempest_core::Node;

use crate::connection::Endpoint;

/// A node as the server encodes it.
pub fn node_value(node: &Node) -> Value {
    Value::Map(vec![
        (Value::from("type"), Value::from(node.node_type.as_str())),
        (Value::from("id"), Value::from(node.id.as_str())),
    ])
}

/// A list of nodes as the server encodes it.
pub fn nodes_value(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(node_value).collect())
}

/// How the endpoint answers one call.
pub enum Action {
    Reply(Reply<Value>),
    /// Reply with a sequence number that does not match the call.
    ReplyOutOfStep(Reply<Value>),
    /// Drop the connection without replying.
    Hangup,
}

impl Action {
    pub fn ok(value: impl Into<Value>) -> Self {
        Action::Reply(Reply::Ok(value.into()))
    }

    pub fn exception(kind: ExceptionKind, message: &str) -> Self {
        Action::Reply(Reply::Exception(RemoteException::new(kind, message)))
    }
}

pub struct TestEndpoint {
    addr: SocketAddr,
    accepted: Arc<AtomicUsize>,
    calls: Arc<Mutex<Vec<IncomingCall>>>,
}

impl TestEndpoint {
    /// Serve connections until the test process exits.
    pub fn spawn<H>(handler: H) -> Self
    where
        H: FnMut(&IncomingCall) -> Action + Send + 'static,
    {
        Self::start(None, handler)
    }

    /// Accept at most `max_connections`, then refuse further connects.
    ///
    /// The listener is closed as soon as the last connection is accepted,
    /// so a reconnect after that connection fails deterministically.
    pub fn spawn_limited<H>(max_connections: usize, handler: H) -> Self
    where
        H: FnMut(&IncomingCall) -> Action + Send + 'static,
    {
        Self::start(Some(max_connections), handler)
    }

    /// An endpoint nothing listens on.
    pub fn unreachable() -> Endpoint {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        Endpoint::new("127.0.0.1", port)
    }

    fn start<H>(limit: Option<usize>, mut handler: H) -> Self
    where
        H: FnMut(&IncomingCall) -> Action + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let accepted = Arc::new(AtomicUsize::new(0));
        let calls = Arc::new(Mutex::new(Vec::new()));

        let thread_accepted = Arc::clone(&accepted);
        let thread_calls = Arc::clone(&calls);
        thread::spawn(move || {
            let mut listener = Some(listener);
            while let Some(active) = listener.as_ref() {
                let Ok((stream, _)) = active.accept() else {
                    break;
                };
                let count = thread_accepted.fetch_add(1, Ordering::SeqCst) + 1;
                if limit.is_some_and(|max| count >= max) {
                    listener = None;
                }
                serve(stream, &mut handler, &thread_calls);
            }
        });

        TestEndpoint {
            addr,
            accepted,
            calls,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new("127.0.0.1", self.addr.port())
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Connections accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// Every call received, in order.
    pub fn calls(&self) -> Vec<IncomingCall> {
        self.calls.lock().unwrap().clone()
    }
}

fn serve<H>(mut stream: TcpStream, handler: &mut H, calls: &Mutex<Vec<IncomingCall>>)
where
    H: FnMut(&IncomingCall) -> Action,
{
    while let Ok(call) = framing::read_call(&mut stream) {
        calls.lock().unwrap().push(call.clone());
        let written = match handler(&call) {
            Action::Reply(reply) => framing::write_reply(&mut stream, call.seq, reply),
            Action::ReplyOutOfStep(reply) => {
                framing::write_reply(&mut stream, call.seq.wrapping_add(1), reply)
            }
            Action::Hangup => return,
        };
        if written.is_err() {
            return;
        }
    }
}
