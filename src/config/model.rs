// src/config/model.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::Schedule;

/// Top-level workflow declaration as read from a TOML file.
///
/// This is a direct mapping of the declaration format:
///
/// ```toml
/// [workflow]
/// name = "parallel_tasks"
/// start_date = "2024-01-01"
/// schedule = "none"
/// catchup = false
///
/// [task.task_1]
/// cmd = "sleep 10"
///
/// [task.task_3]
/// cmd = "sleep 10"
/// after = ["task_1", "task_2"]
/// ```
///
/// This raw form is unvalidated; use `Workflow::try_from` (or
/// [`crate::config::load_and_validate`]) to obtain a checked [`Workflow`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawWorkflowFile {
    /// Workflow metadata from `[workflow]`.
    pub workflow: WorkflowMeta,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the *task names* (e.g. `"task_1"`).
    #[serde(default)]
    pub task: BTreeMap<String, TaskDecl>,
}

/// `[workflow]` section: the container's name and scheduling metadata.
///
/// Everything here is declarative; the external orchestrator owns what these
/// attributes mean at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowMeta {
    /// Workflow name, unique within the orchestrator's registry.
    pub name: String,

    /// Date from which the orchestrator starts scheduling intervals.
    pub start_date: NaiveDate,

    /// Cadence: `"none"`, a preset like `"@daily"`, or a cron expression.
    #[serde(default)]
    pub schedule: Schedule,

    /// Whether the orchestrator backfills intervals missed while the
    /// workflow was not deployed.
    #[serde(default)]
    pub catchup: bool,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// `[task.<name>]` section: one shell-command task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDecl {
    /// The shell command the orchestrator will execute for this task.
    pub cmd: String,

    /// Dependency list: this task may not begin until all tasks listed
    /// here complete.
    ///
    /// This is the TOML `after = ["task_1", "task_2"]` field.
    #[serde(default)]
    pub after: Vec<String>,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A checked workflow declaration.
///
/// Only constructible through validation (`TryFrom<RawWorkflowFile>` or
/// [`crate::builder::WorkflowBuilder`]), so holding one guarantees:
/// - the workflow name and every task command are non-empty,
/// - every `after` reference names a declared task (and not itself),
/// - the declared dependency edges form a DAG.
#[derive(Debug, Clone)]
pub struct Workflow {
    meta: WorkflowMeta,
    tasks: BTreeMap<String, TaskDecl>,
}

impl Workflow {
    /// Construct without validation. Callers must have validated the raw
    /// form first; see `config::validate`.
    pub(crate) fn new_unchecked(meta: WorkflowMeta, tasks: BTreeMap<String, TaskDecl>) -> Self {
        Self { meta, tasks }
    }

    /// Workflow metadata (`[workflow]` section).
    pub fn meta(&self) -> &WorkflowMeta {
        &self.meta
    }

    /// All tasks, keyed by name, in name order.
    pub fn tasks(&self) -> impl Iterator<Item = (&str, &TaskDecl)> {
        self.tasks.iter().map(|(name, decl)| (name.as_str(), decl))
    }

    /// Look up one task by name.
    pub fn task(&self, name: &str) -> Option<&TaskDecl> {
        self.tasks.get(name)
    }

    /// Number of declared tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
