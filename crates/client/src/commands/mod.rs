// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod mutate;
pub mod query;
pub mod rank;
pub mod traverse;

use tempest_core::{BidirectionalPprParams, DegreeFilter, MonteCarloPageRankParams, TraversalFilter};

use crate::cli::{Command, ConnectionArgs, OutputFormat};
use crate::client::TempestClient;
use crate::config::ClientConfig;
use crate::error::Result;

/// Resolve the client configuration, letting flags win over everything else.
pub fn resolve_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let config = ClientConfig::resolve(args.config.as_deref())?;
    Ok(apply_flags(config, args))
}

pub(crate) fn apply_flags(mut config: ClientConfig, args: &ConnectionArgs) -> ClientConfig {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(max_retries) = args.max_retries {
        config.max_retries = max_retries;
    }
    config
}

/// Run one remote command and render its result.
///
/// `Completions` needs no server and is handled by the caller.
pub fn dispatch(client: &mut TempestClient, command: Command, format: OutputFormat) -> Result<String> {
    match command {
        Command::NodeCount => query::node_count(client, format),
        Command::EdgeCount { edge_type } => query::edge_count(client, &edge_type, format),
        Command::Nodes {
            node_type,
            sql_clause,
        } => query::nodes(client, &node_type, &sql_clause, format),
        Command::UniqueNode {
            node_type,
            sql_clause,
        } => query::unique_node(client, &node_type, &sql_clause, format),
        Command::Attribute { name, nodes } => query::attribute(client, &name, &nodes, format),
        Command::Degree {
            edge_type,
            node,
            direction,
        } => traverse::degree(client, &edge_type, &node, direction.incoming, format),
        Command::Neighbors {
            edge_type,
            node,
            direction,
        } => traverse::neighbors(client, &edge_type, &node, direction.incoming, format),
        Command::Neighbor {
            edge_type,
            node,
            index,
            direction,
        } => traverse::neighbor(client, &edge_type, &node, index, direction.incoming, format),
        Command::MultiHop {
            edge_type,
            node,
            direction,
            max_hops,
            sql_clause,
            min_in_degree,
            max_in_degree,
            min_out_degree,
            max_out_degree,
            no_alternating,
        } => {
            let mut degree_filter = DegreeFilter::new();
            if let Some(bound) = min_in_degree {
                degree_filter = degree_filter.min_in_degree(bound);
            }
            if let Some(bound) = max_in_degree {
                degree_filter = degree_filter.max_in_degree(bound);
            }
            if let Some(bound) = min_out_degree {
                degree_filter = degree_filter.min_out_degree(bound);
            }
            if let Some(bound) = max_out_degree {
                degree_filter = degree_filter.max_out_degree(bound);
            }
            let filter = TraversalFilter::new()
                .sql_clause(sql_clause)
                .degree_filter(degree_filter)
                .alternating(!no_alternating);
            traverse::multi_hop(
                client,
                &edge_type,
                &node,
                max_hops,
                &filter,
                direction.incoming,
                format,
            )
        }
        Command::Component {
            node,
            edge_types,
            max_size,
        } => traverse::component(client, &node, &edge_types, max_size, format),
        Command::PprTarget {
            edge_type,
            target,
            seeds,
            relative_error,
            reset_probability,
            min_probability,
        } => {
            let params = BidirectionalPprParams {
                relative_error,
                reset_probability,
                min_probability,
            };
            rank::ppr_target(client, &edge_type, &seeds, &target, &params, format)
        }
        Command::Ppr {
            edge_types,
            seeds,
            num_steps,
            reset_probability,
            max_results,
        } => {
            let params = MonteCarloPageRankParams {
                num_steps,
                reset_probability,
                max_result_count: max_results,
            };
            rank::ppr(client, &edge_types, &seeds, &params, format)
        }
        Command::AddNode { node } => mutate::add_node(client, &node, format),
        Command::SetAttribute {
            node,
            name,
            value,
            string,
        } => mutate::set_attribute(client, &node, &name, &value, string, format),
        Command::AddEdge {
            edge_type,
            source,
            target,
        } => mutate::add_edge(client, &edge_type, &source, &target, format),
        Command::Completions { .. } => Ok(String::new()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
