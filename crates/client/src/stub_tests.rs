// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::connection::TransportOptions;
use crate::test_endpoint::{Action, TestEndpoint};
use tempest_rpc::Value;

fn stub(endpoint: &TestEndpoint) -> TempestDbStub {
    let connection = Connection::open(&endpoint.endpoint(), &TransportOptions::default()).unwrap();
    TempestDbStub::new(connection)
}

#[test]
fn procedures_use_server_names() {
    let endpoint = TestEndpoint::spawn(|call| match call.method.as_str() {
        "nodeCount" | "edgeCount" | "outDegree" | "inDegree" => Action::ok(0),
        "pprSingleTarget" => Action::ok(0.0),
        "getMultiNodeAttributeAsJSON" | "pprUndirected" => Action::ok(Value::Map(Vec::new())),
        "addNode" | "setNodeAttribute" | "addEdges" => Action::ok(Value::Nil),
        _ => Action::ok(Value::Array(Vec::new())),
    });
    let mut stub = stub(&endpoint);
    let alice = Node::new("user", "alice");
    let seeds = [alice.clone()];
    let edge_types = ["follows".to_string()];

    stub.node_count().unwrap();
    stub.edge_count("follows").unwrap();
    stub.out_degree("follows", &alice).unwrap();
    stub.in_degree("follows", &alice).unwrap();
    stub.out_neighbors("follows", &alice).unwrap();
    stub.in_neighbors("follows", &alice).unwrap();
    stub.k_step_out_neighbors_filtered("follows", &alice, 2, "", &DegreeFilter::new(), true)
        .unwrap();
    stub.k_step_in_neighbors_filtered("follows", &alice, 2, "", &DegreeFilter::new(), true)
        .unwrap();
    stub.nodes("user", "").unwrap();
    stub.get_multi_node_attribute_as_json(&seeds, "name").unwrap();
    stub.ppr_single_target("follows", &seeds, &alice, &BidirectionalPprParams::default())
        .unwrap();
    stub.ppr_undirected(&edge_types, &seeds, &MonteCarloPageRankParams::default())
        .unwrap();
    stub.connected_component(&alice, &edge_types, 10).unwrap();
    stub.add_node(&alice).unwrap();
    stub.set_node_attribute(&alice, "name", "\"Alice\"").unwrap();
    stub.add_edges("follows", &seeds, &seeds).unwrap();

    let methods: Vec<String> = endpoint.calls().into_iter().map(|c| c.method).collect();
    assert_eq!(
        methods,
        [
            "nodeCount",
            "edgeCount",
            "outDegree",
            "inDegree",
            "outNeighbors",
            "inNeighbors",
            "kStepOutNeighborsFiltered",
            "kStepInNeighborsFiltered",
            "nodes",
            "getMultiNodeAttributeAsJSON",
            "pprSingleTarget",
            "pprUndirected",
            "connectedComponent",
            "addNode",
            "setNodeAttribute",
            "addEdges",
        ]
    );
}

#[test]
fn arguments_are_positional() {
    let endpoint = TestEndpoint::spawn(|_| Action::ok(Value::Nil));
    let mut stub = stub(&endpoint);

    stub.set_node_attribute(&Node::new("user", "alice"), "age", "31")
        .unwrap();

    let call = &endpoint.calls()[0];
    let args = call.args.as_array().unwrap();
    assert_eq!(args.len(), 3);
    assert_eq!(args[1].as_str(), Some("age"));
    assert_eq!(args[2].as_str(), Some("31"));
}

#[test]
fn stub_exposes_its_connection() {
    let endpoint = TestEndpoint::spawn(|_| Action::ok(1));
    let mut stub = stub(&endpoint);

    assert!(stub.connection().is_open());
    stub.connection().close();
    assert!(stub.node_count().unwrap_err().is_transport());
}
