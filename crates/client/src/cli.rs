// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tempest_core::Node;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Examples:
  tempest node-count                          Count every node
  tempest degree follows user:alice           Out-degree of user:alice
  tempest neighbors follows user:alice --in   Who follows user:alice
  tempest nodes user --where \"age > 30\"       Query nodes with SQL
  tempest attribute name user:1 user:2        Fetch an attribute for several nodes";

#[derive(Parser, Debug)]
#[command(name = "tempest", version)]
#[command(about = "Command-line client for the TempestDB graph service")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log reconnects and calls to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where and how to connect. Flags override the config file and environment.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Server host [env: TEMPEST_HOST]
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Server port [env: TEMPEST_PORT]
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Config file [env: TEMPEST_CONFIG]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reconnect-and-retry cycles per call
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,
}

/// Edge direction for neighborhood queries.
#[derive(Args, Debug, Clone, Copy)]
pub struct DirectionArgs {
    /// Follow incoming edges instead of outgoing ones
    #[arg(long = "in")]
    pub incoming: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count all nodes in the graph
    NodeCount,

    /// Count edges of one type
    EdgeCount {
        edge_type: String,
    },

    /// Degree of a node
    Degree {
        edge_type: String,
        /// Node as type:id
        node: Node,
        #[command(flatten)]
        direction: DirectionArgs,
    },

    /// Direct neighbors of a node
    Neighbors {
        edge_type: String,
        /// Node as type:id
        node: Node,
        #[command(flatten)]
        direction: DirectionArgs,
    },

    /// The neighbor at an index in adjacency order
    Neighbor {
        edge_type: String,
        /// Node as type:id
        node: Node,
        index: i32,
        #[command(flatten)]
        direction: DirectionArgs,
    },

    /// Nodes reachable within a number of hops
    #[command(after_help = "Examples:\n  \
        tempest multi-hop follows user:alice --max-hops 3\n  \
        tempest multi-hop follows user:alice --where \"age > 30\" --min-in-degree 5")]
    MultiHop {
        edge_type: String,
        /// Source node as type:id
        node: Node,
        #[command(flatten)]
        direction: DirectionArgs,
        /// Maximum number of hops
        #[arg(long, default_value_t = 2)]
        max_hops: i32,
        /// SQL clause every visited node must match
        #[arg(long = "where", value_name = "CLAUSE", default_value = "")]
        sql_clause: String,
        #[arg(long)]
        min_in_degree: Option<i32>,
        #[arg(long)]
        max_in_degree: Option<i32>,
        #[arg(long)]
        min_out_degree: Option<i32>,
        #[arg(long)]
        max_out_degree: Option<i32>,
        /// Follow the same direction on every hop
        #[arg(long)]
        no_alternating: bool,
    },

    /// Nodes of a type matching an SQL clause
    Nodes {
        node_type: String,
        #[arg(long = "where", value_name = "CLAUSE", default_value = "")]
        sql_clause: String,
    },

    /// The single node matching an SQL clause
    UniqueNode {
        node_type: String,
        #[arg(value_name = "CLAUSE")]
        sql_clause: String,
    },

    /// One attribute of one or more nodes
    Attribute {
        name: String,
        /// Nodes as type:id
        #[arg(required = true)]
        nodes: Vec<Node>,
    },

    /// Personalized PageRank of a target node
    PprTarget {
        edge_type: String,
        /// Target node as type:id
        target: Node,
        /// Seed node as type:id (repeatable)
        #[arg(long = "seed", required = true)]
        seeds: Vec<Node>,
        #[arg(long, default_value_t = 0.1)]
        relative_error: f64,
        #[arg(long, default_value_t = 0.3)]
        reset_probability: f64,
        #[arg(long)]
        min_probability: Option<f64>,
    },

    /// Personalized PageRank over undirected edges
    Ppr {
        /// Edge type (repeatable)
        #[arg(long = "edge-type", required = true)]
        edge_types: Vec<String>,
        /// Seed node as type:id (repeatable)
        #[arg(long = "seed", required = true)]
        seeds: Vec<Node>,
        #[arg(long, default_value_t = 100_000)]
        num_steps: i64,
        #[arg(long, default_value_t = 0.3)]
        reset_probability: f64,
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// The connected component containing a node
    Component {
        /// Node as type:id
        node: Node,
        /// Edge type (repeatable)
        #[arg(long = "edge-type", required = true)]
        edge_types: Vec<String>,
        #[arg(long)]
        max_size: Option<i32>,
    },

    /// Add a node
    AddNode {
        /// Node as type:id
        node: Node,
    },

    /// Set an attribute on a node
    #[command(after_help = "Values are JSON literals: '\"Alice\"', 42, true, null.\n\
        Pass --string to store the value as a string without quoting it.\n\
        Strings containing '\"' or '\\' do not round-trip: they read back with the escapes kept.")]
    SetAttribute {
        /// Node as type:id
        node: Node,
        name: String,
        value: String,
        /// Store the value as a plain string (quotes and backslashes read back escaped)
        #[arg(long)]
        string: bool,
    },

    /// Add an edge
    AddEdge {
        edge_type: String,
        /// Source node as type:id
        source: Node,
        /// Target node as type:id
        target: Node,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
