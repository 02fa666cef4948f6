// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of command results.
//!
//! Text output writes nodes as `type:id`, one result per line, with
//! tab-separated columns. JSON output is a single document per command.

use std::collections::HashMap;
use std::fmt::Display;

use serde::Serialize;
use tempest_core::{AttributeValue, Node};

use crate::cli::OutputFormat;
use crate::error::Result;

static MISSING: AttributeValue = AttributeValue::Null;

#[derive(Serialize)]
struct NodeValue<'a, T: Serialize> {
    node: &'a Node,
    value: T,
}

/// A single scalar result: a count, a degree or a score.
pub fn format_scalar<T: Display + Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", value)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(value)?)),
    }
}

pub fn format_node(node: &Node, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", node)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(node)?)),
    }
}

pub fn format_nodes(nodes: &[Node], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(nodes.iter().map(|n| format!("{}\n", n)).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(nodes)?)),
    }
}

/// Attribute values in the order the nodes were requested.
///
/// Nodes the server left out are shown as `null`.
pub fn format_attributes(
    nodes: &[Node],
    values: &HashMap<Node, AttributeValue>,
    format: OutputFormat,
) -> Result<String> {
    let rows: Vec<NodeValue<'_, &AttributeValue>> = nodes
        .iter()
        .map(|node| NodeValue {
            node,
            value: values.get(node).unwrap_or(&MISSING),
        })
        .collect();
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}\t{}\n", row.node, row.value))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&rows)?)),
    }
}

/// PageRank scores, highest first.
pub fn format_scores(scores: &HashMap<Node, f64>, format: OutputFormat) -> Result<String> {
    let mut rows: Vec<NodeValue<'_, f64>> = scores
        .iter()
        .map(|(node, score)| NodeValue {
            node,
            value: *score,
        })
        .collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.node.cmp(b.node)));
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}\t{}\n", row.node, row.value))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&rows)?)),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
