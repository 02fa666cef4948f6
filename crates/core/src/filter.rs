// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Traversal filters for the multi-hop neighbor procedures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Degree bound kinds understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DegreeFilterType {
    #[serde(rename = "INDEGREE_MIN")]
    InDegreeMin,
    #[serde(rename = "INDEGREE_MAX")]
    InDegreeMax,
    #[serde(rename = "OUTDEGREE_MIN")]
    OutDegreeMin,
    #[serde(rename = "OUTDEGREE_MAX")]
    OutDegreeMax,
}

/// Inclusive degree bounds applied to every node a traversal returns.
///
/// An empty filter places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreeFilter(BTreeMap<DegreeFilterType, i32>);

impl DegreeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one bound, replacing any previous value for the same kind.
    pub fn with(mut self, kind: DegreeFilterType, bound: i32) -> Self {
        self.0.insert(kind, bound);
        self
    }

    pub fn min_in_degree(self, bound: i32) -> Self {
        self.with(DegreeFilterType::InDegreeMin, bound)
    }

    pub fn max_in_degree(self, bound: i32) -> Self {
        self.with(DegreeFilterType::InDegreeMax, bound)
    }

    pub fn min_out_degree(self, bound: i32) -> Self {
        self.with(DegreeFilterType::OutDegreeMin, bound)
    }

    pub fn max_out_degree(self, bound: i32) -> Self {
        self.with(DegreeFilterType::OutDegreeMax, bound)
    }

    pub fn get(&self, kind: DegreeFilterType) -> Option<i32> {
        self.0.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Optional arguments of a multi-hop traversal.
///
/// Defaults to no SQL clause, no degree bounds and alternating steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalFilter {
    /// SQL-like predicate over node attributes; empty matches every node.
    pub sql_clause: String,
    pub degree_filter: DegreeFilter,
    /// When true, hops alternate between following out-edges and in-edges.
    pub alternating: bool,
}

impl Default for TraversalFilter {
    fn default() -> Self {
        TraversalFilter {
            sql_clause: String::new(),
            degree_filter: DegreeFilter::default(),
            alternating: true,
        }
    }
}

impl TraversalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sql_clause(mut self, clause: impl Into<String>) -> Self {
        self.sql_clause = clause.into();
        self
    }

    pub fn degree_filter(mut self, filter: DegreeFilter) -> Self {
        self.degree_filter = filter;
        self
    }

    pub fn alternating(mut self, alternating: bool) -> Self {
        self.alternating = alternating;
        self
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
