// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Service stubs.
//!
//! A stub is the local handle for a remote interface. It owns the
//! [`Connection`] it was built on, so a stub can never outlive or be
//! separated from its connection.

use std::collections::HashMap;

use tempest_core::{BidirectionalPprParams, DegreeFilter, MonteCarloPageRankParams, Node};
use tempest_rpc::RpcResult;

use crate::connection::Connection;

/// A remote-procedure handle bound to one connection.
///
/// Implementations expose their procedures as ordinary methods; the session
/// only needs access to the connection to tear it down.
pub trait ServiceStub: Send {
    /// The connection this stub is bound to.
    fn connection(&mut self) -> &mut Connection;
}

/// Stub for the TempestDB service.
///
/// One method per remote procedure, with the server's argument order.
#[derive(Debug)]
pub struct TempestDbStub {
    connection: Connection,
}

impl TempestDbStub {
    pub fn new(connection: Connection) -> Self {
        TempestDbStub { connection }
    }

    pub fn node_count(&mut self) -> RpcResult<i64> {
        self.connection.call("nodeCount", &())
    }

    pub fn edge_count(&mut self, edge_type: &str) -> RpcResult<i64> {
        self.connection.call("edgeCount", &(edge_type,))
    }

    pub fn out_degree(&mut self, edge_type: &str, node: &Node) -> RpcResult<i32> {
        self.connection.call("outDegree", &(edge_type, node))
    }

    pub fn in_degree(&mut self, edge_type: &str, node: &Node) -> RpcResult<i32> {
        self.connection.call("inDegree", &(edge_type, node))
    }

    pub fn out_neighbors(&mut self, edge_type: &str, node: &Node) -> RpcResult<Vec<Node>> {
        self.connection.call("outNeighbors", &(edge_type, node))
    }

    pub fn in_neighbors(&mut self, edge_type: &str, node: &Node) -> RpcResult<Vec<Node>> {
        self.connection.call("inNeighbors", &(edge_type, node))
    }

    pub fn out_neighbor(&mut self, edge_type: &str, node: &Node, i: i32) -> RpcResult<Node> {
        self.connection.call("outNeighbor", &(edge_type, node, i))
    }

    pub fn in_neighbor(&mut self, edge_type: &str, node: &Node, i: i32) -> RpcResult<Node> {
        self.connection.call("inNeighbor", &(edge_type, node, i))
    }

    pub fn k_step_out_neighbors_filtered(
        &mut self,
        edge_type: &str,
        source: &Node,
        k: i32,
        sql_clause: &str,
        degree_filter: &DegreeFilter,
        alternating: bool,
    ) -> RpcResult<Vec<Node>> {
        self.connection.call(
            "kStepOutNeighborsFiltered",
            &(edge_type, source, k, sql_clause, degree_filter, alternating),
        )
    }

    pub fn k_step_in_neighbors_filtered(
        &mut self,
        edge_type: &str,
        source: &Node,
        k: i32,
        sql_clause: &str,
        degree_filter: &DegreeFilter,
        alternating: bool,
    ) -> RpcResult<Vec<Node>> {
        self.connection.call(
            "kStepInNeighborsFiltered",
            &(edge_type, source, k, sql_clause, degree_filter, alternating),
        )
    }

    pub fn nodes(&mut self, node_type: &str, sql_clause: &str) -> RpcResult<Vec<Node>> {
        self.connection.call("nodes", &(node_type, sql_clause))
    }

    /// Attribute values come back JSON-encoded; see
    /// [`tempest_core::AttributeValue::decode`].
    pub fn get_multi_node_attribute_as_json(
        &mut self,
        nodes: &[Node],
        attribute_name: &str,
    ) -> RpcResult<HashMap<Node, String>> {
        self.connection
            .call("getMultiNodeAttributeAsJSON", &(nodes, attribute_name))
    }

    pub fn ppr_single_target(
        &mut self,
        edge_type: &str,
        seeds: &[Node],
        target: &Node,
        params: &BidirectionalPprParams,
    ) -> RpcResult<f64> {
        self.connection
            .call("pprSingleTarget", &(edge_type, seeds, target, params))
    }

    pub fn ppr_undirected(
        &mut self,
        edge_types: &[String],
        seeds: &[Node],
        params: &MonteCarloPageRankParams,
    ) -> RpcResult<HashMap<Node, f64>> {
        self.connection
            .call("pprUndirected", &(edge_types, seeds, params))
    }

    pub fn connected_component(
        &mut self,
        source: &Node,
        edge_types: &[String],
        max_size: i32,
    ) -> RpcResult<Vec<Node>> {
        self.connection
            .call("connectedComponent", &(source, edge_types, max_size))
    }

    pub fn add_node(&mut self, node: &Node) -> RpcResult<()> {
        self.connection.call("addNode", &(node,))
    }

    pub fn set_node_attribute(
        &mut self,
        node: &Node,
        attribute_name: &str,
        attribute_value: &str,
    ) -> RpcResult<()> {
        self.connection.call(
            "setNodeAttribute",
            &(node, attribute_name, attribute_value),
        )
    }

    pub fn add_edges(
        &mut self,
        edge_type: &str,
        sources: &[Node],
        targets: &[Node],
    ) -> RpcResult<()> {
        self.connection
            .call("addEdges", &(edge_type, sources, targets))
    }
}

impl ServiceStub for TempestDbStub {
    fn connection(&mut self) -> &mut Connection {
        &mut self.connection
    }
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod tests;
