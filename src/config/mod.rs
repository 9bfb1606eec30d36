// src/config/mod.rs

//! Loading and validation of workflow declaration files.
//!
//! - [`model`] maps the TOML declaration onto serde types and holds the
//!   checked [`Workflow`](model::Workflow).
//! - [`loader`] reads a declaration from disk.
//! - [`validate`] turns the raw form into the checked form, rejecting
//!   structurally invalid declarations.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{RawWorkflowFile, TaskDecl, Workflow, WorkflowMeta};
