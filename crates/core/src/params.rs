// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter records for the Personalized PageRank procedures.
//!
//! Field names follow the server's record layout (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Parameters for bidirectional single-target PPR estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidirectionalPprParams {
    /// Target relative error for estimates above `min_probability`.
    pub relative_error: f64,
    pub reset_probability: f64,
    /// Estimates below this are reported as 0.0. The server defaults it to
    /// `0.25 / node_count` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_probability: Option<f64>,
}

impl Default for BidirectionalPprParams {
    fn default() -> Self {
        BidirectionalPprParams {
            relative_error: 0.1,
            reset_probability: 0.3,
            min_probability: None,
        }
    }
}

/// Parameters for Monte Carlo PPR over undirected walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloPageRankParams {
    /// Total random walk steps.
    pub num_steps: i64,
    pub reset_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_result_count: Option<i32>,
}

impl Default for MonteCarloPageRankParams {
    fn default() -> Self {
        MonteCarloPageRankParams {
            num_steps: 100_000,
            reset_probability: 0.3,
            max_result_count: None,
        }
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
