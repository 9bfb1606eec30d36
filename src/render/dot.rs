// src/render/dot.rs

use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;

use crate::config::model::Workflow;
use crate::dag::DagGraph;

/// Render the task DAG as a Graphviz digraph.
pub fn render_dot(workflow: &Workflow) -> String {
    let dag = DagGraph::from_workflow(workflow);

    // Edge weights carry no information; `Config::EdgeNoLabel` keeps them
    // out of the output.
    let mut graph: DiGraphMap<&str, i32> = DiGraphMap::new();
    for name in dag.tasks() {
        graph.add_node(name);
    }
    for (pred, succ) in dag.edges() {
        graph.add_edge(pred, succ, 0);
    }

    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}
