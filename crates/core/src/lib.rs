// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tempest-core: Shared types for the Tempest graph client
//!
//! This crate provides the value types exchanged with a TempestDB server
//! (node records, attribute values, traversal filters and PageRank
//! parameters) together with the attribute decoding rules. It has no
//! knowledge of sockets or framing.

pub mod attribute;
pub mod error;
pub mod filter;
pub mod node;
pub mod params;

pub use attribute::{decode_map, AttributeValue};
pub use error::{Error, Result};
pub use filter::{DegreeFilter, DegreeFilterType, TraversalFilter};
pub use node::Node;
pub use params::{BidirectionalPprParams, MonteCarloPageRankParams};
