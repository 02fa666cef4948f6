// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::test_endpoint::{Action, TestEndpoint};
use tempest_rpc::ExceptionKind;

fn open(endpoint: &TestEndpoint) -> Connection {
    Connection::open(&endpoint.endpoint(), &TransportOptions::default()).unwrap()
}

#[test]
fn endpoint_default_and_display() {
    let endpoint = Endpoint::default();
    assert_eq!(endpoint.host, "localhost");
    assert_eq!(endpoint.port, 10001);
    assert_eq!(endpoint.to_string(), "localhost:10001");
}

#[test]
fn transport_options_default() {
    let options = TransportOptions::default();
    assert_eq!(options.connect_timeout, Some(Duration::from_secs(5)));
    assert_eq!(options.io_timeout, None);
}

#[test]
fn open_refused_is_connect_error() {
    let endpoint = TestEndpoint::unreachable();
    let err = Connection::open(&endpoint, &TransportOptions::default()).unwrap_err();
    match err {
        Error::Connect { endpoint: name, .. } => assert_eq!(name, endpoint.to_string()),
        other => panic!("expected connect error, got {:?}", other),
    }
}

#[test]
fn call_returns_reply_value() {
    let endpoint = TestEndpoint::spawn(|_| Action::ok(7));
    let mut connection = open(&endpoint);

    let degree: i32 = connection.call("outDegree", &("follows", "alice")).unwrap();
    assert_eq!(degree, 7);
    assert!(connection.is_open());

    let calls = endpoint.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "outDegree");
}

#[test]
fn calls_are_numbered_in_order() {
    let endpoint = TestEndpoint::spawn(|_| Action::ok(0));
    let mut connection = open(&endpoint);

    for _ in 0..3 {
        let _: i64 = connection.call("nodeCount", &()).unwrap();
    }

    let seqs: Vec<u32> = endpoint.calls().iter().map(|c| c.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}

#[test]
fn remote_exception_keeps_connection_open() {
    let endpoint = TestEndpoint::spawn(|call| match call.method.as_str() {
        "nodes" => Action::exception(ExceptionKind::Sql, "no such column"),
        _ => Action::ok(1),
    });
    let mut connection = open(&endpoint);

    let err = connection
        .call::<_, Vec<String>>("nodes", &("user", "invalid_column = 'foo'"))
        .unwrap_err();
    assert!(matches!(err, RpcError::Application(ref e) if e.kind == ExceptionKind::Sql));
    assert!(connection.is_open());

    let count: i64 = connection.call("nodeCount", &()).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn hangup_is_transport_error_and_closes_connection() {
    let endpoint = TestEndpoint::spawn(|_| Action::Hangup);
    let mut connection = open(&endpoint);

    let err = connection.call::<_, i64>("nodeCount", &()).unwrap_err();
    assert!(err.is_transport());
    assert!(!connection.is_open());

    let err = connection.call::<_, i64>("nodeCount", &()).unwrap_err();
    match err {
        RpcError::Transport(e) => assert_eq!(e.kind(), io::ErrorKind::NotConnected),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[test]
fn reply_out_of_step_is_protocol_error() {
    let endpoint = TestEndpoint::spawn(|_| Action::ReplyOutOfStep(tempest_rpc::Reply::Ok(1.into())));
    let mut connection = open(&endpoint);

    let err = connection.call::<_, i64>("nodeCount", &()).unwrap_err();
    assert!(matches!(err, RpcError::Protocol(ref msg) if msg.contains("does not match")));
    assert!(!connection.is_open());
}

#[test]
fn close_is_idempotent() {
    let endpoint = TestEndpoint::spawn(|_| Action::ok(1));
    let mut connection = open(&endpoint);
    assert_eq!(connection.endpoint(), &endpoint.endpoint());

    connection.close();
    assert!(!connection.is_open());
    connection.close();
    assert!(!connection.is_open());
}
