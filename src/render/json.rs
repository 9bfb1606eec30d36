// src/render/json.rs

//! Canonical JSON artifact for orchestrator ingestion.
//!
//! The edge list is materialized explicitly (as `[predecessor, successor]`
//! pairs) so consumers do not have to re-derive it from the per-task
//! `after` lists.

use serde::Serialize;

use crate::config::model::Workflow;
use crate::dag::DagGraph;
use crate::errors::Result;

#[derive(Serialize)]
struct JsonArtifact<'a> {
    workflow: JsonWorkflow<'a>,
    tasks: Vec<JsonTask<'a>>,
    edges: Vec<(&'a str, &'a str)>,
}

#[derive(Serialize)]
struct JsonWorkflow<'a> {
    name: &'a str,
    start_date: String,
    schedule: String,
    catchup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonTask<'a> {
    name: &'a str,
    cmd: &'a str,
    after: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Render the declaration as pretty-printed JSON.
pub fn render_json(workflow: &Workflow) -> Result<String> {
    let graph = DagGraph::from_workflow(workflow);
    let meta = workflow.meta();

    let artifact = JsonArtifact {
        workflow: JsonWorkflow {
            name: &meta.name,
            start_date: meta.start_date.to_string(),
            schedule: meta.schedule.to_string(),
            catchup: meta.catchup,
            description: meta.description.as_deref(),
        },
        tasks: workflow
            .tasks()
            .map(|(name, task)| JsonTask {
                name,
                cmd: &task.cmd,
                after: &task.after,
                description: task.description.as_deref(),
            })
            .collect(),
        edges: graph.edges(),
    };

    Ok(serde_json::to_string_pretty(&artifact)?)
}
