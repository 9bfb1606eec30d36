// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::Workflow;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct DagNode {
    /// Direct dependencies: tasks that must complete before this one may begin.
    deps: Vec<String>,
    /// Direct dependents: tasks that depend on this one.
    dependents: Vec<String>,
}

/// In-memory DAG view of a workflow declaration, keyed by task name.
///
/// This is intentionally lightweight; acyclicity is already guaranteed by
/// `config::validate`, so here we just keep adjacency information for
/// queries and rendering.
#[derive(Debug, Clone)]
pub struct DagGraph {
    nodes: HashMap<String, DagNode>,
    /// Task names in declaration (name) order; used for deterministic output.
    order: Vec<String>,
}

impl DagGraph {
    /// Build a DAG from a checked [`Workflow`].
    ///
    /// Assumes that:
    /// - all `after` references are valid
    /// - there are no cycles
    pub fn from_workflow(workflow: &Workflow) -> Self {
        let mut nodes: HashMap<String, DagNode> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        // First pass: create nodes with their dependency lists.
        for (name, task) in workflow.tasks() {
            nodes.insert(
                name.to_string(),
                DagNode {
                    deps: task.after.clone(),
                    dependents: Vec::new(),
                },
            );
            order.push(name.to_string());
        }

        // Second pass: populate dependents based on deps.
        for task_name in order.clone() {
            let deps = nodes
                .get(&task_name)
                .map(|n| n.deps.clone())
                .unwrap_or_default();

            for dep in deps {
                if let Some(dep_node) = nodes.get_mut(&dep) {
                    dep_node.dependents.push(task_name.clone());
                }
            }
        }

        Self { nodes, order }
    }

    /// All task names, in name order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Immediate dependencies of a task (the tasks listed in its `after`).
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.nodes
            .get(name)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks that list this one in their `after`).
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.nodes
            .get(name)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Tasks with no declared predecessors.
    pub fn roots(&self) -> Vec<&str> {
        self.tasks()
            .filter(|name| self.dependencies_of(name).is_empty())
            .collect()
    }

    /// Tasks no other task depends on.
    pub fn leaves(&self) -> Vec<&str> {
        self.tasks()
            .filter(|name| self.dependents_of(name).is_empty())
            .collect()
    }

    /// All declared edges as `(predecessor, successor)` pairs, successor-ordered.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for name in self.tasks() {
            for dep in self.dependencies_of(name) {
                edges.push((dep.as_str(), name));
            }
        }
        edges
    }

    /// One linearization of the tasks consistent with every declared edge.
    ///
    /// The graph is known acyclic, so this cannot fail.
    pub fn topo_order(&self) -> Vec<&str> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for name in self.tasks() {
            graph.add_node(name);
        }
        for (pred, succ) in self.edges() {
            graph.add_edge(pred, succ, ());
        }

        toposort(&graph, None)
            .unwrap_or_else(|_| panic!("validated workflow contained a cycle"))
    }
}
