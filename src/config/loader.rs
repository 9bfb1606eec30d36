// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawWorkflowFile, Workflow};
use crate::errors::Result;

/// Load a workflow declaration from a given path and return the raw
/// [`RawWorkflowFile`].
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (DAG correctness, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawWorkflowFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawWorkflowFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a workflow declaration from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - empty names and commands,
///   - unknown or self-referencing `after` entries,
///   - cycles in the dependency edges.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Workflow> {
    let raw = load_from_path(&path)?;
    let workflow = Workflow::try_from(raw)?;
    Ok(workflow)
}

/// Resolve the default declaration path used by the CLI.
///
/// Currently this just returns `Workflow.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `DAGSPEC_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Workflow.toml")
}
