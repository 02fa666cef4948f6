// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tempest - a resilient client for the TempestDB graph service.
//!
//! # Main Components
//!
//! - [`TempestClient`] - typed operations on the remote graph
//! - [`ResilientSession`] - reconnect-and-retry around any [`ServiceStub`]
//! - [`Connection`] - one framed TCP connection to a server
//! - [`ClientConfig`] - layered configuration (file, environment, flags)
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! use tempest::{Node, TempestClient};
//!
//! let mut client = TempestClient::connect("localhost", 10001)?;
//! let alice: Node = "user:alice".parse()?;
//! let friends = client.out_neighbors("follows", &alice)?;
//! ```

mod cli;
mod commands;
mod output;

pub mod client;
pub mod config;
pub mod connection;
pub mod env;
pub mod error;
pub mod session;
pub mod stub;

#[cfg(test)]
mod test_endpoint;

pub use cli::{Cli, Command, ConnectionArgs, DirectionArgs, OutputFormat};
pub use client::{TempestClient, DEFAULT_MAX_COMPONENT_SIZE};
pub use config::ClientConfig;
pub use connection::{Connection, Endpoint, TransportOptions, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{Error, Result};
pub use session::{ResilientSession, SessionBuilder, DEFAULT_MAX_RETRIES};
pub use stub::{ServiceStub, TempestDbStub};
pub use tempest_core::{
    AttributeValue, BidirectionalPprParams, DegreeFilter, DegreeFilterType,
    MonteCarloPageRankParams, Node, TraversalFilter,
};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. Prints the command's result to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        connection,
        output,
        command,
        ..
    } = cli;

    if let Command::Completions { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "tempest", &mut std::io::stdout());
        return Ok(());
    }

    let config = commands::resolve_config(&connection)?;
    tracing::debug!(endpoint = %config.endpoint(), max_retries = config.max_retries, "connecting");
    let mut client = TempestClient::from_config(&config)?;
    let rendered = commands::dispatch(&mut client, command, output);
    client.close();
    print!("{}", rendered?);
    Ok(())
}
