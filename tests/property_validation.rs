//! Property tests over generated declarations.

use std::collections::HashSet;

use proptest::prelude::*;

use dagspec::builder::{TaskBuilder, WorkflowBuilder};
use dagspec::config::Workflow;
use dagspec::dag::DagGraph;
use dagspec::errors::DagspecError;

// Strategy to generate a valid workflow declaration.
// We ensure acyclicity by only allowing task N to depend on tasks 0..N-1.
fn workflow_strategy(max_tasks: usize) -> impl Strategy<Value = Workflow> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );

        deps_strat.prop_map(move |raw_deps| {
            let mut builder = WorkflowBuilder::new("generated");
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let name = format!("task_{i}");
                let mut task = TaskBuilder::new(&name, format!("echo {name}"));

                // Sanitize dependencies: only allow deps < i.
                let mut valid_deps = HashSet::new();
                for dep_idx in potential_deps {
                    if i > 0 {
                        valid_deps.insert(dep_idx % i);
                    }
                }
                for dep_idx in valid_deps {
                    task = task.after([format!("task_{dep_idx}")]);
                }

                builder = builder.task(task);
            }
            builder.build().expect("forward-only deps must validate")
        })
    })
}

proptest! {
    #[test]
    fn topo_order_is_a_permutation_respecting_every_edge(
        wf in workflow_strategy(10)
    ) {
        let graph = DagGraph::from_workflow(&wf);
        let order = graph.topo_order();

        prop_assert_eq!(order.len(), wf.task_count());

        let pos = |name: &str| order.iter().position(|t| *t == name);
        for (pred, succ) in graph.edges() {
            let p = pos(pred).expect("edge endpoint missing from order");
            let s = pos(succ).expect("edge endpoint missing from order");
            prop_assert!(p < s, "edge {} -> {} violated by order {:?}", pred, succ, order);
        }
    }

    #[test]
    fn dependents_are_the_mirror_of_dependencies(
        wf in workflow_strategy(10)
    ) {
        let graph = DagGraph::from_workflow(&wf);

        for name in graph.tasks() {
            for dep in graph.dependencies_of(name) {
                prop_assert!(
                    graph.dependents_of(dep).contains(&name.to_string()),
                    "{} lists {} in after, but is not among its dependents",
                    name,
                    dep
                );
            }
        }
    }

    #[test]
    fn closing_a_chain_into_a_ring_is_rejected(num_tasks in 2..8usize) {
        // task_0 <- task_1 <- ... <- task_{n-1}, then task_0 after task_{n-1}.
        let mut builder = WorkflowBuilder::new("ring")
            .task(TaskBuilder::new("task_0", "true").after([format!("task_{}", num_tasks - 1)]));
        for i in 1..num_tasks {
            builder = builder.task(
                TaskBuilder::new(format!("task_{i}"), "true").after([format!("task_{}", i - 1)]),
            );
        }

        let err = builder.build().unwrap_err();
        prop_assert!(matches!(err, DagspecError::DagCycle(_)));
    }
}
