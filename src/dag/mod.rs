// src/dag/mod.rs

//! DAG representation and queries.
//!
//! [`graph`] holds the directed acyclic graph of tasks declared by a
//! [`Workflow`](crate::config::Workflow): adjacency in both directions,
//! roots, leaves, and a topological order. There is no scheduling here;
//! executing the order is the external orchestrator's job.

pub mod graph;

pub use graph::DagGraph;
