// src/render/summary.rs

use std::fmt::Write;

use crate::config::model::Workflow;
use crate::dag::DagGraph;

/// Human-readable summary: workflow metadata, tasks with deps and commands,
/// and one valid topological order.
pub fn render_summary(workflow: &Workflow) -> String {
    let graph = DagGraph::from_workflow(workflow);
    let meta = workflow.meta();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "workflow: {}", meta.name);
    let _ = writeln!(out, "  start_date: {}", meta.start_date);
    let _ = writeln!(out, "  schedule: {}", meta.schedule);
    let _ = writeln!(out, "  catchup: {}", meta.catchup);
    if let Some(ref desc) = meta.description {
        let _ = writeln!(out, "  description: {desc}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "tasks ({}):", workflow.task_count());
    for (name, task) in workflow.tasks() {
        let _ = writeln!(out, "  - {name}");
        let _ = writeln!(out, "      cmd: {}", task.cmd);
        if !task.after.is_empty() {
            let _ = writeln!(out, "      after: {:?}", task.after);
        }
        if let Some(ref desc) = task.description {
            let _ = writeln!(out, "      description: {desc}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "topological order: {:?}", graph.topo_order());

    out
}
