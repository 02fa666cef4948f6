// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tempest_core::{Node, TraversalFilter};

use crate::cli::OutputFormat;
use crate::client::TempestClient;
use crate::error::Result;
use crate::output::{format_node, format_nodes, format_scalar};

pub fn degree(
    client: &mut TempestClient,
    edge_type: &str,
    node: &Node,
    incoming: bool,
    format: OutputFormat,
) -> Result<String> {
    let degree = if incoming {
        client.in_degree(edge_type, node)?
    } else {
        client.out_degree(edge_type, node)?
    };
    format_scalar(&degree, format)
}

pub fn neighbors(
    client: &mut TempestClient,
    edge_type: &str,
    node: &Node,
    incoming: bool,
    format: OutputFormat,
) -> Result<String> {
    let found = if incoming {
        client.in_neighbors(edge_type, node)?
    } else {
        client.out_neighbors(edge_type, node)?
    };
    format_nodes(&found, format)
}

pub fn neighbor(
    client: &mut TempestClient,
    edge_type: &str,
    node: &Node,
    index: i32,
    incoming: bool,
    format: OutputFormat,
) -> Result<String> {
    let found = if incoming {
        client.in_neighbor(edge_type, node, index)?
    } else {
        client.out_neighbor(edge_type, node, index)?
    };
    format_node(&found, format)
}

pub fn multi_hop(
    client: &mut TempestClient,
    edge_type: &str,
    source: &Node,
    max_hops: i32,
    filter: &TraversalFilter,
    incoming: bool,
    format: OutputFormat,
) -> Result<String> {
    let found = if incoming {
        client.multi_hop_in_neighbors(edge_type, source, max_hops, filter)?
    } else {
        client.multi_hop_out_neighbors(edge_type, source, max_hops, filter)?
    };
    format_nodes(&found, format)
}

pub fn component(
    client: &mut TempestClient,
    source: &Node,
    edge_types: &[String],
    max_size: Option<i32>,
    format: OutputFormat,
) -> Result<String> {
    format_nodes(&client.connected_component(source, edge_types, max_size)?, format)
}

#[cfg(test)]
#[path = "traverse_tests.rs"]
mod tests;
