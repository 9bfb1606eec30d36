// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{RawWorkflowFile, Workflow};
use crate::errors::{DagspecError, Result};

impl TryFrom<RawWorkflowFile> for Workflow {
    type Error = DagspecError;

    fn try_from(raw: RawWorkflowFile) -> std::result::Result<Self, Self::Error> {
        validate_raw(&raw)?;
        Ok(Workflow::new_unchecked(raw.workflow, raw.task))
    }
}

fn validate_raw(raw: &RawWorkflowFile) -> Result<()> {
    validate_workflow_meta(raw)?;
    ensure_has_tasks(raw)?;
    validate_tasks(raw)?;
    validate_dependencies(raw)?;
    validate_dag(raw)?;
    Ok(())
}

fn validate_workflow_meta(raw: &RawWorkflowFile) -> Result<()> {
    if raw.workflow.name.trim().is_empty() {
        return Err(DagspecError::DeclarationError(
            "[workflow].name must be non-empty".to_string(),
        ));
    }
    Ok(())
}

fn ensure_has_tasks(raw: &RawWorkflowFile) -> Result<()> {
    if raw.task.is_empty() {
        return Err(DagspecError::DeclarationError(
            "declaration must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_tasks(raw: &RawWorkflowFile) -> Result<()> {
    for (name, task) in raw.task.iter() {
        if name.trim().is_empty() {
            return Err(DagspecError::DeclarationError(
                "task names must be non-empty".to_string(),
            ));
        }
        if task.cmd.trim().is_empty() {
            return Err(DagspecError::DeclarationError(format!(
                "task '{}' has an empty `cmd`",
                name
            )));
        }
    }
    Ok(())
}

fn validate_dependencies(raw: &RawWorkflowFile) -> Result<()> {
    for (name, task) in raw.task.iter() {
        let mut seen: HashSet<&str> = HashSet::new();
        for dep in task.after.iter() {
            if !raw.task.contains_key(dep) {
                return Err(DagspecError::DeclarationError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
            if dep == name {
                return Err(DagspecError::DeclarationError(format!(
                    "task '{}' cannot depend on itself in `after`",
                    name
                )));
            }
            if !seen.insert(dep.as_str()) {
                return Err(DagspecError::DeclarationError(format!(
                    "task '{}' lists dependency '{}' more than once in `after`",
                    name, dep
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(raw: &RawWorkflowFile) -> Result<()> {
    // Build a petgraph graph from the tasks and their dependencies.
    //
    // Edge direction: dep -> task
    // For:
    //   [task.task_3]
    //   after = ["task_1"]
    // we add edge task_1 -> task_3.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in raw.task.keys() {
        graph.add_node(name.as_str());
    }

    for (name, task) in raw.task.iter() {
        for dep in task.after.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(DagspecError::DagCycle(format!(
                "cycle detected in task DAG involving task '{}'",
                node
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Workflow> {
        let raw: RawWorkflowFile = ::toml::from_str(toml).expect("test TOML should parse");
        Workflow::try_from(raw)
    }

    #[test]
    fn accepts_fan_in_declaration() {
        let wf = parse(
            r#"
            [workflow]
            name = "parallel_tasks"
            start_date = "2024-01-01"

            [task.task_1]
            cmd = "sleep 10"

            [task.task_2]
            cmd = "sleep 10"

            [task.task_3]
            cmd = "sleep 10"
            after = ["task_1", "task_2"]
            "#,
        )
        .unwrap();
        assert_eq!(wf.task_count(), 3);
    }

    #[test]
    fn rejects_unknown_dependency() {
        let err = parse(
            r#"
            [workflow]
            name = "wf"
            start_date = "2024-01-01"

            [task.a]
            cmd = "echo a"
            after = ["ghost"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, DagspecError::DeclarationError(_)));
        assert!(err.to_string().contains("unknown dependency 'ghost'"));
    }

    #[test]
    fn rejects_self_dependency() {
        let err = parse(
            r#"
            [workflow]
            name = "wf"
            start_date = "2024-01-01"

            [task.a]
            cmd = "echo a"
            after = ["a"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot depend on itself"));
    }

    #[test]
    fn rejects_duplicate_dependency() {
        // Edges are a set; the same predecessor listed twice must not slip
        // through into duplicate edges downstream.
        let err = parse(
            r#"
            [workflow]
            name = "wf"
            start_date = "2024-01-01"

            [task.task_1]
            cmd = "sleep 10"

            [task.task_3]
            cmd = "sleep 10"
            after = ["task_1", "task_1"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once in `after`"));
    }

    #[test]
    fn rejects_cycle() {
        let err = parse(
            r#"
            [workflow]
            name = "wf"
            start_date = "2024-01-01"

            [task.a]
            cmd = "echo a"
            after = ["b"]

            [task.b]
            cmd = "echo b"
            after = ["a"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, DagspecError::DagCycle(_)));
    }

    #[test]
    fn rejects_empty_cmd() {
        let err = parse(
            r#"
            [workflow]
            name = "wf"
            start_date = "2024-01-01"

            [task.a]
            cmd = "   "
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty `cmd`"));
    }

    #[test]
    fn rejects_empty_workflow_name() {
        let err = parse(
            r#"
            [workflow]
            name = ""
            start_date = "2024-01-01"

            [task.a]
            cmd = "echo a"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("[workflow].name"));
    }

    #[test]
    fn rejects_declaration_without_tasks() {
        let err = parse(
            r#"
            [workflow]
            name = "wf"
            start_date = "2024-01-01"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least one [task.<name>]"));
    }
}
