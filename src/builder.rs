// src/builder.rs

//! Programmatic workflow declaration.
//!
//! The TOML file is the usual surface, but embedders can declare a workflow
//! in code. The fan-in from the bundled demo looks like:
//!
//! ```
//! use dagspec::builder::{TaskBuilder, WorkflowBuilder};
//!
//! let workflow = WorkflowBuilder::new("parallel_tasks")
//!     .task(TaskBuilder::new("task_1", "sleep 10"))
//!     .task(TaskBuilder::new("task_2", "sleep 10"))
//!     .task(TaskBuilder::new("task_3", "sleep 10").after(["task_1", "task_2"]))
//!     .build()
//!     .unwrap();
//! assert_eq!(workflow.task_count(), 3);
//! ```
//!
//! `build()` runs the same validation as the TOML loader, so a successfully
//! built [`Workflow`] carries the same guarantees.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::model::{RawWorkflowFile, TaskDecl, Workflow, WorkflowMeta};
use crate::errors::Result;
use crate::types::Schedule;

/// Builder for a [`Workflow`] declaration.
pub struct WorkflowBuilder {
    meta: WorkflowMeta,
    tasks: BTreeMap<String, TaskDecl>,
}

impl WorkflowBuilder {
    /// Start a declaration with the given workflow name.
    ///
    /// Defaults: start date 1970-01-01, no schedule, catchup off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: WorkflowMeta {
                name: name.into(),
                start_date: NaiveDate::default(),
                schedule: Schedule::None,
                catchup: false,
                description: None,
            },
            tasks: BTreeMap::new(),
        }
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.meta.start_date = date;
        self
    }

    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.meta.schedule = schedule;
        self
    }

    pub fn catchup(mut self, catchup: bool) -> Self {
        self.meta.catchup = catchup;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    /// Add a task node. A task added twice under the same name replaces the
    /// earlier declaration.
    pub fn task(mut self, task: TaskBuilder) -> Self {
        let (name, decl) = task.into_parts();
        self.tasks.insert(name, decl);
        self
    }

    /// Validate and produce the checked [`Workflow`].
    pub fn build(self) -> Result<Workflow> {
        let raw = RawWorkflowFile {
            workflow: self.meta,
            task: self.tasks,
        };
        Workflow::try_from(raw)
    }
}

/// Builder for one task node.
pub struct TaskBuilder {
    name: String,
    decl: TaskDecl,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decl: TaskDecl {
                cmd: cmd.into(),
                after: Vec::new(),
                description: None,
            },
        }
    }

    /// Declare predecessors: this task may not begin until every task named
    /// here completes. Mirrors `after = [...]` in the TOML form; calling it
    /// repeatedly appends. Listing the same predecessor twice is rejected
    /// at `build()`.
    pub fn after<I, S>(mut self, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decl
            .after
            .extend(predecessors.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.decl.description = Some(description.into());
        self
    }

    fn into_parts(self) -> (String, TaskDecl) {
        (self.name, self.decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DagspecError;

    #[test]
    fn builder_matches_toml_validation() {
        let err = WorkflowBuilder::new("wf")
            .task(TaskBuilder::new("a", "echo a").after(["b"]))
            .task(TaskBuilder::new("b", "echo b").after(["a"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, DagspecError::DagCycle(_)));
    }

    #[test]
    fn builder_sets_metadata() {
        let wf = WorkflowBuilder::new("nightly")
            .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .schedule(Schedule::Daily)
            .catchup(true)
            .task(TaskBuilder::new("only", "true"))
            .build()
            .unwrap();

        assert_eq!(wf.meta().name, "nightly");
        assert_eq!(wf.meta().schedule, Schedule::Daily);
        assert!(wf.meta().catchup);
    }

    #[test]
    fn duplicate_predecessors_are_rejected() {
        let err = WorkflowBuilder::new("wf")
            .task(TaskBuilder::new("task_1", "sleep 10"))
            .task(TaskBuilder::new("task_3", "sleep 10").after(["task_1", "task_1"]))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("more than once in `after`"));
    }

    #[test]
    fn redeclaring_a_task_replaces_it() {
        let wf = WorkflowBuilder::new("wf")
            .task(TaskBuilder::new("a", "echo old"))
            .task(TaskBuilder::new("a", "echo new"))
            .build()
            .unwrap();

        assert_eq!(wf.task_count(), 1);
        assert_eq!(wf.task("a").unwrap().cmd, "echo new");
    }
}
