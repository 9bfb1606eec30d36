// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::loader::default_config_path;

/// Command-line arguments for `dagspec`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagspec",
    version,
    about = "Declare, validate and render workflow DAGs for an external orchestrator.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the workflow declaration file (TOML).
    ///
    /// Default: `Workflow.toml` in the current working directory.
    #[arg(
        long,
        value_name = "PATH",
        default_value_t = default_config_path().display().to_string()
    )]
    pub config: String,

    /// Validate the declaration and exit; print nothing on success.
    #[arg(long)]
    pub check: bool,

    /// Output format for the rendered declaration.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "summary")]
    pub render: RenderFormat,

    /// Write the rendering to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGSPEC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Rendering format as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Human-readable text.
    Summary,
    /// JSON artifact for orchestrator ingestion.
    Json,
    /// Graphviz digraph.
    Dot,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_workflow_toml() {
        let args = CliArgs::parse_from(["dagspec"]);
        assert_eq!(args.config, "Workflow.toml");
        assert_eq!(args.render, RenderFormat::Summary);
        assert!(!args.check);
    }
}
