// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Graph mutations. Text output confirms the change; JSON output is empty.

use tempest_core::{AttributeValue, Node};

use crate::cli::OutputFormat;
use crate::client::TempestClient;
use crate::error::Result;

pub fn add_node(client: &mut TempestClient, node: &Node, format: OutputFormat) -> Result<String> {
    client.add_node(node)?;
    Ok(confirm(format, format!("added node {}", node)))
}

/// Set an attribute. `value` is a JSON literal unless `as_string` is set.
pub fn set_attribute(
    client: &mut TempestClient,
    node: &Node,
    name: &str,
    value: &str,
    as_string: bool,
    format: OutputFormat,
) -> Result<String> {
    let value = if as_string {
        AttributeValue::from(value)
    } else {
        value.parse()?
    };
    client.set_node_attribute(node, name, &value)?;
    Ok(confirm(format, format!("set {}.{} = {}", node, name, value.to_wire())))
}

pub fn add_edge(
    client: &mut TempestClient,
    edge_type: &str,
    source: &Node,
    target: &Node,
    format: OutputFormat,
) -> Result<String> {
    client.add_edge(edge_type, source, target)?;
    Ok(confirm(
        format,
        format!("added edge {} -[{}]-> {}", source, edge_type, target),
    ))
}

fn confirm(format: OutputFormat, message: String) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", message),
        OutputFormat::Json => String::new(),
    }
}

#[cfg(test)]
#[path = "mutate_tests.rs"]
mod tests;
