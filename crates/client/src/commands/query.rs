// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tempest_core::Node;

use crate::cli::OutputFormat;
use crate::client::TempestClient;
use crate::error::Result;
use crate::output::{format_attributes, format_node, format_nodes, format_scalar};

pub fn node_count(client: &mut TempestClient, format: OutputFormat) -> Result<String> {
    format_scalar(&client.node_count()?, format)
}

pub fn edge_count(client: &mut TempestClient, edge_type: &str, format: OutputFormat) -> Result<String> {
    format_scalar(&client.edge_count(edge_type)?, format)
}

pub fn nodes(
    client: &mut TempestClient,
    node_type: &str,
    sql_clause: &str,
    format: OutputFormat,
) -> Result<String> {
    format_nodes(&client.nodes(node_type, sql_clause)?, format)
}

pub fn unique_node(
    client: &mut TempestClient,
    node_type: &str,
    sql_clause: &str,
    format: OutputFormat,
) -> Result<String> {
    format_node(&client.unique_node(node_type, sql_clause)?, format)
}

pub fn attribute(
    client: &mut TempestClient,
    name: &str,
    nodes: &[Node],
    format: OutputFormat,
) -> Result<String> {
    let values = client.multi_node_attribute(nodes, name)?;
    format_attributes(nodes, &values, format)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
