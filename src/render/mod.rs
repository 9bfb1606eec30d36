// src/render/mod.rs

//! Renderings of a checked workflow declaration.
//!
//! Rendering is how the declaration is handed to the external orchestrator;
//! nothing in this crate executes a task.
//!
//! - [`summary`]: human-readable text for the terminal.
//! - [`json`]: canonical JSON artifact for orchestrator ingestion.
//! - [`dot`]: Graphviz digraph of the task DAG.

pub mod dot;
pub mod json;
pub mod summary;

pub use dot::render_dot;
pub use json::render_json;
pub use summary::render_summary;
