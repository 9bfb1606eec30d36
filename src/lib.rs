// src/lib.rs

pub mod builder;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, RenderFormat};
use crate::config::loader::load_and_validate;
use crate::config::model::Workflow;
use crate::dag::DagGraph;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - declaration loading + validation
/// - rendering (summary / JSON / dot)
/// - output to stdout or a file
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let workflow = load_and_validate(&config_path)?;

    // Keep `--check` silent at the default level; success is the exit code.
    let graph = DagGraph::from_workflow(&workflow);
    debug!(
        workflow = %workflow.meta().name,
        tasks = workflow.task_count(),
        edges = graph.edges().len(),
        "declaration validated"
    );
    debug!(roots = ?graph.roots(), leaves = ?graph.leaves(), "DAG shape");

    if args.check {
        return Ok(());
    }

    let rendered = render_workflow(&workflow, args.render)?;

    match args.out {
        Some(ref path) => {
            fs::write(path, &rendered)?;
            info!(path = %path, format = ?args.render, "declaration written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Render a checked workflow in the requested format.
pub fn render_workflow(workflow: &Workflow, format: RenderFormat) -> Result<String> {
    let rendered = match format {
        RenderFormat::Summary => render::render_summary(workflow),
        RenderFormat::Json => {
            let mut s = render::render_json(workflow)?;
            s.push('\n');
            s
        }
        RenderFormat::Dot => render::render_dot(workflow),
    };
    Ok(rendered)
}
