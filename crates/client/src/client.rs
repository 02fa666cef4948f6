// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Tempest graph client.
//!
//! [`TempestClient`] is the typed entry point for applications. Each method
//! runs exactly one remote procedure through a [`ResilientSession`], so every
//! call gets the same reconnect-and-retry treatment.

use std::collections::HashMap;

use tempest_core::{
    decode_map, AttributeValue, BidirectionalPprParams, MonteCarloPageRankParams, Node,
    TraversalFilter,
};

use crate::config::ClientConfig;
use crate::connection::Endpoint;
use crate::error::{Error, Result};
use crate::session::{ResilientSession, DEFAULT_MAX_RETRIES};
use crate::stub::TempestDbStub;

/// Component size limit used when the caller does not give one.
pub const DEFAULT_MAX_COMPONENT_SIZE: i32 = i32::MAX;

/// Client for a TempestDB graph server.
#[derive(Debug)]
pub struct TempestClient {
    session: ResilientSession<TempestDbStub>,
}

impl TempestClient {
    /// Connect with default settings and the default retry budget.
    pub fn connect(host: impl Into<String>, port: u16) -> Result<Self> {
        let session = ResilientSession::new(host, port, TempestDbStub::new, DEFAULT_MAX_RETRIES)?;
        Ok(Self::with_session(session))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let session = ResilientSession::builder(config.endpoint())
            .max_retries(config.max_retries)
            .reconnect_delay(config.reconnect_delay())
            .transport(config.transport_options())
            .stub_factory(TempestDbStub::new)
            .connect()?;
        Ok(Self::with_session(session))
    }

    pub fn with_session(session: ResilientSession<TempestDbStub>) -> Self {
        TempestClient { session }
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.session.endpoint()
    }

    /// Reconnects performed so far.
    pub fn reconnects(&self) -> u64 {
        self.session.reconnects()
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    pub fn node_count(&mut self) -> Result<i64> {
        self.session.execute(|stub| stub.node_count())
    }

    pub fn edge_count(&mut self, edge_type: &str) -> Result<i64> {
        self.session.execute(|stub| stub.edge_count(edge_type))
    }

    pub fn out_degree(&mut self, edge_type: &str, node: &Node) -> Result<i32> {
        self.session.execute(|stub| stub.out_degree(edge_type, node))
    }

    pub fn in_degree(&mut self, edge_type: &str, node: &Node) -> Result<i32> {
        self.session.execute(|stub| stub.in_degree(edge_type, node))
    }

    pub fn out_neighbors(&mut self, edge_type: &str, node: &Node) -> Result<Vec<Node>> {
        self.session.execute(|stub| stub.out_neighbors(edge_type, node))
    }

    pub fn in_neighbors(&mut self, edge_type: &str, node: &Node) -> Result<Vec<Node>> {
        self.session.execute(|stub| stub.in_neighbors(edge_type, node))
    }

    /// The `i`-th out-neighbor, in the server's adjacency order.
    pub fn out_neighbor(&mut self, edge_type: &str, node: &Node, i: i32) -> Result<Node> {
        self.session
            .execute(|stub| stub.out_neighbor(edge_type, node, i))
    }

    /// The `i`-th in-neighbor, in the server's adjacency order.
    pub fn in_neighbor(&mut self, edge_type: &str, node: &Node, i: i32) -> Result<Node> {
        self.session
            .execute(|stub| stub.in_neighbor(edge_type, node, i))
    }

    /// Nodes reachable from `source` in at most `max_hops` steps along
    /// outgoing edges, restricted by `filter`.
    pub fn multi_hop_out_neighbors(
        &mut self,
        edge_type: &str,
        source: &Node,
        max_hops: i32,
        filter: &TraversalFilter,
    ) -> Result<Vec<Node>> {
        self.session.execute(|stub| {
            stub.k_step_out_neighbors_filtered(
                edge_type,
                source,
                max_hops,
                &filter.sql_clause,
                &filter.degree_filter,
                filter.alternating,
            )
        })
    }

    /// Like [`Self::multi_hop_out_neighbors`], along incoming edges.
    pub fn multi_hop_in_neighbors(
        &mut self,
        edge_type: &str,
        source: &Node,
        max_hops: i32,
        filter: &TraversalFilter,
    ) -> Result<Vec<Node>> {
        self.session.execute(|stub| {
            stub.k_step_in_neighbors_filtered(
                edge_type,
                source,
                max_hops,
                &filter.sql_clause,
                &filter.degree_filter,
                filter.alternating,
            )
        })
    }

    /// Nodes of `node_type` matching an SQL `WHERE` clause.
    pub fn nodes(&mut self, node_type: &str, sql_clause: &str) -> Result<Vec<Node>> {
        self.session.execute(|stub| stub.nodes(node_type, sql_clause))
    }

    /// The single node matching `sql_clause`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotUnique`] if zero or several nodes match.
    pub fn unique_node(&mut self, node_type: &str, sql_clause: &str) -> Result<Node> {
        let nodes = self.nodes(node_type, sql_clause)?;
        match <[Node; 1]>::try_from(nodes) {
            Ok([node]) => Ok(node),
            Err(nodes) => Err(Error::NotUnique {
                clause: sql_clause.to_string(),
                count: nodes.len(),
            }),
        }
    }

    /// One attribute for many nodes, decoded.
    ///
    /// Nodes without the attribute may be missing from the result.
    pub fn multi_node_attribute(
        &mut self,
        nodes: &[Node],
        attribute_name: &str,
    ) -> Result<HashMap<Node, AttributeValue>> {
        let raw = self
            .session
            .execute(|stub| stub.get_multi_node_attribute_as_json(nodes, attribute_name))?;
        Ok(decode_map(raw)?)
    }

    /// One attribute of one node; [`AttributeValue::Null`] when absent.
    pub fn node_attribute(&mut self, node: &Node, attribute_name: &str) -> Result<AttributeValue> {
        let mut values = self.multi_node_attribute(std::slice::from_ref(node), attribute_name)?;
        Ok(values.remove(node).unwrap_or(AttributeValue::Null))
    }

    /// Personalized PageRank of `target` from `seeds`, estimated bidirectionally.
    pub fn ppr_single_target(
        &mut self,
        edge_type: &str,
        seeds: &[Node],
        target: &Node,
        params: &BidirectionalPprParams,
    ) -> Result<f64> {
        self.session
            .execute(|stub| stub.ppr_single_target(edge_type, seeds, target, params))
    }

    /// Personalized PageRank from `seeds` over undirected edges, by Monte Carlo walks.
    pub fn ppr_undirected(
        &mut self,
        edge_types: &[String],
        seeds: &[Node],
        params: &MonteCarloPageRankParams,
    ) -> Result<HashMap<Node, f64>> {
        self.session
            .execute(|stub| stub.ppr_undirected(edge_types, seeds, params))
    }

    /// The connected component containing `source`, capped at `max_size`
    /// nodes ([`DEFAULT_MAX_COMPONENT_SIZE`] if `None`).
    pub fn connected_component(
        &mut self,
        source: &Node,
        edge_types: &[String],
        max_size: Option<i32>,
    ) -> Result<Vec<Node>> {
        let max_size = max_size.unwrap_or(DEFAULT_MAX_COMPONENT_SIZE);
        self.session
            .execute(|stub| stub.connected_component(source, edge_types, max_size))
    }

    pub fn add_node(&mut self, node: &Node) -> Result<()> {
        self.session.execute(|stub| stub.add_node(node))
    }

    pub fn set_node_attribute(
        &mut self,
        node: &Node,
        attribute_name: &str,
        value: &AttributeValue,
    ) -> Result<()> {
        let wire = value.to_wire();
        self.session
            .execute(|stub| stub.set_node_attribute(node, attribute_name, &wire))
    }

    /// Add an edge from each `sources[i]` to `targets[i]`.
    pub fn add_edges(&mut self, edge_type: &str, sources: &[Node], targets: &[Node]) -> Result<()> {
        self.session
            .execute(|stub| stub.add_edges(edge_type, sources, targets))
    }

    pub fn add_edge(&mut self, edge_type: &str, source: &Node, target: &Node) -> Result<()> {
        self.add_edges(
            edge_type,
            std::slice::from_ref(source),
            std::slice::from_ref(target),
        )
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
