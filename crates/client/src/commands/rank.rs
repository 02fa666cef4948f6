// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tempest_core::{BidirectionalPprParams, MonteCarloPageRankParams, Node};

use crate::cli::OutputFormat;
use crate::client::TempestClient;
use crate::error::Result;
use crate::output::{format_scalar, format_scores};

pub fn ppr_target(
    client: &mut TempestClient,
    edge_type: &str,
    seeds: &[Node],
    target: &Node,
    params: &BidirectionalPprParams,
    format: OutputFormat,
) -> Result<String> {
    format_scalar(&client.ppr_single_target(edge_type, seeds, target, params)?, format)
}

pub fn ppr(
    client: &mut TempestClient,
    edge_types: &[String],
    seeds: &[Node],
    params: &MonteCarloPageRankParams,
    format: OutputFormat,
) -> Result<String> {
    format_scores(&client.ppr_undirected(edge_types, seeds, params)?, format)
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
