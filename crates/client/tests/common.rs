// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::collections::{BTreeSet, HashMap};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempest::Node;
use tempest_rpc::{framing, ExceptionKind, IncomingCall, RemoteException, Reply, RpcResult, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `tempest` binary, isolated from the caller's config and environment.
pub fn tempest(server: &FakeServer, config_home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("tempest");
    cmd.env_remove("TEMPEST_HOST")
        .env_remove("TEMPEST_PORT")
        .env_remove("TEMPEST_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg(server.port().to_string());
    cmd
}

pub fn node(text: &str) -> Node {
    text.parse().unwrap()
}

/// In-memory graph served over the Tempest wire protocol.
///
/// Starts with `user:alice`, `user:bob` and `user:carol`, each with a
/// `name` attribute, and `follows` edges alice->bob, alice->carol and
/// bob->carol.
#[derive(Default)]
struct Graph {
    nodes: BTreeSet<Node>,
    edges: Vec<(String, Node, Node)>,
    attributes: HashMap<(Node, String), String>,
}

impl Graph {
    fn sample() -> Self {
        let mut graph = Graph::default();
        for (id, name) in [("alice", "Alice"), ("bob", "Bob"), ("carol", "Carol")] {
            let user = Node::new("user", id);
            graph
                .attributes
                .insert((user.clone(), "name".to_string()), format!("\"{}\"", name));
            graph.nodes.insert(user);
        }
        graph
            .attributes
            .insert((Node::new("user", "alice"), "age".to_string()), "34".to_string());
        for (from, to) in [("alice", "bob"), ("alice", "carol"), ("bob", "carol")] {
            graph.edges.push((
                "follows".to_string(),
                Node::new("user", from),
                Node::new("user", to),
            ));
        }
        graph
    }

    fn require(&self, node: &Node) -> Result<(), RemoteException> {
        if self.nodes.contains(node) {
            Ok(())
        } else {
            Err(RemoteException::new(
                ExceptionKind::InvalidNodeId,
                format!("no such node: {}", node),
            ))
        }
    }

    fn out_neighbors(&self, edge_type: &str, node: &Node) -> Vec<Node> {
        self.edges
            .iter()
            .filter(|(t, from, _)| t == edge_type && from == node)
            .map(|(_, _, to)| to.clone())
            .collect()
    }

    fn in_neighbors(&self, edge_type: &str, node: &Node) -> Vec<Node> {
        self.edges
            .iter()
            .filter(|(t, _, to)| t == edge_type && to == node)
            .map(|(_, from, _)| from.clone())
            .collect()
    }

    /// Supports an empty clause and `name = 'X'`.
    fn matching(&self, node_type: &str, clause: &str) -> Result<Vec<Node>, RemoteException> {
        let wanted = match clause.trim() {
            "" => None,
            other => match other
                .strip_prefix("name = '")
                .and_then(|rest| rest.strip_suffix('\''))
            {
                Some(name) => Some(format!("\"{}\"", name)),
                None => {
                    return Err(RemoteException::new(
                        ExceptionKind::Sql,
                        format!("cannot evaluate clause: {}", clause),
                    ))
                }
            },
        };
        Ok(self
            .nodes
            .iter()
            .filter(|n| n.node_type == node_type)
            .filter(|n| match &wanted {
                None => true,
                Some(value) => {
                    self.attributes.get(&((*n).clone(), "name".to_string())) == Some(value)
                }
            })
            .cloned()
            .collect())
    }
}

fn node_value(node: &Node) -> Value {
    Value::Map(vec![
        (Value::from("type"), Value::from(node.node_type.as_str())),
        (Value::from("id"), Value::from(node.id.as_str())),
    ])
}

fn nodes_value(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(node_value).collect())
}

fn answer(graph: &Mutex<Graph>, call: &IncomingCall) -> RpcResult<Result<Value, RemoteException>> {
    let mut graph = graph.lock().unwrap();
    let reply = match call.method.as_str() {
        "nodeCount" => Ok(Value::from(graph.nodes.len() as u64)),
        "edgeCount" => {
            let (edge_type,): (String,) = call.args()?;
            let count = graph.edges.iter().filter(|(t, _, _)| *t == edge_type).count();
            Ok(Value::from(count as u64))
        }
        "outDegree" | "inDegree" | "outNeighbors" | "inNeighbors" => {
            let (edge_type, node): (String, Node) = call.args()?;
            graph.require(&node).map(|()| {
                let found = if call.method.starts_with("out") {
                    graph.out_neighbors(&edge_type, &node)
                } else {
                    graph.in_neighbors(&edge_type, &node)
                };
                if call.method.ends_with("Degree") {
                    Value::from(found.len() as u64)
                } else {
                    nodes_value(&found)
                }
            })
        }
        "nodes" => {
            let (node_type, clause): (String, String) = call.args()?;
            graph.matching(&node_type, &clause).map(|n| nodes_value(&n))
        }
        "getMultiNodeAttributeAsJSON" => {
            let (nodes, name): (Vec<Node>, String) = call.args()?;
            let entries = nodes
                .iter()
                .filter_map(|n| {
                    graph
                        .attributes
                        .get(&(n.clone(), name.clone()))
                        .map(|raw| (node_value(n), Value::from(raw.as_str())))
                })
                .collect();
            Ok(Value::Map(entries))
        }
        "addNode" => {
            let (node,): (Node,) = call.args()?;
            graph.nodes.insert(node);
            Ok(Value::Nil)
        }
        "setNodeAttribute" => {
            let (node, name, raw): (Node, String, String) = call.args()?;
            graph.require(&node).map(|()| {
                graph.attributes.insert((node, name), raw);
                Value::Nil
            })
        }
        "addEdges" => {
            let (edge_type, sources, targets): (String, Vec<Node>, Vec<Node>) = call.args()?;
            for (from, to) in sources.into_iter().zip(targets) {
                graph.edges.push((edge_type.clone(), from, to));
            }
            Ok(Value::Nil)
        }
        other => Err(RemoteException::new(
            ExceptionKind::Internal,
            format!("unsupported procedure {}", other),
        )),
    };
    Ok(reply)
}

/// A fake Tempest server on a loopback port.
///
/// Each connection is served on its own thread. The first `hangups` calls
/// received (across all connections) are answered by dropping the
/// connection.
pub struct FakeServer {
    port: u16,
    calls: Arc<AtomicUsize>,
}

impl FakeServer {
    pub fn start() -> Self {
        Self::with_hangups(0)
    }

    pub fn with_hangups(hangups: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let graph = Arc::new(Mutex::new(Graph::sample()));
        let calls = Arc::new(AtomicUsize::new(0));

        let server_calls = Arc::clone(&calls);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let graph = Arc::clone(&graph);
                let calls = Arc::clone(&server_calls);
                thread::spawn(move || serve(stream, &graph, &calls, hangups));
            }
        });

        FakeServer { port, calls }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Calls received so far, including ones answered by hanging up.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn serve(mut stream: TcpStream, graph: &Mutex<Graph>, calls: &AtomicUsize, hangups: usize) {
    while let Ok(call) = framing::read_call(&mut stream) {
        if calls.fetch_add(1, Ordering::SeqCst) < hangups {
            return;
        }
        let reply = match answer(graph, &call) {
            Ok(Ok(value)) => Reply::Ok(value),
            Ok(Err(exception)) => Reply::Exception(exception),
            Err(e) => Reply::Exception(RemoteException::new(
                ExceptionKind::InvalidArgument,
                e.to_string(),
            )),
        };
        if framing::write_reply(&mut stream, call.seq, reply).is_err() {
            return;
        }
    }
}
