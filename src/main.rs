//! Demo: schedule a fixed set of tasks by deadline, list them in order and
//! look one up.
//!
//! ```bash
//! RUST_LOG=deadline_btree=trace cargo run --features tracing
//! ```

use deadline_btree::{CompletionStatus, MinDegree, Task, TaskTree};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tasks = vec![
        ("Task1", "Description1", 10, CompletionStatus::NotStarted),
        ("Task2", "Description2", 20, CompletionStatus::JustStarted),
        ("Task3", "Description3", 5, CompletionStatus::HalfCompleted),
        ("Task4", "Description4", 6, CompletionStatus::AlmostCompleted),
        ("Task5", "Description5", 12, CompletionStatus::Finished),
        ("Task6", "Description6", 30, CompletionStatus::NotStarted),
        ("Task7", "Description7", 7, CompletionStatus::HalfCompleted),
        ("Task8", "Description8", 17, CompletionStatus::AlmostCompleted),
    ];

    let mut tree = TaskTree::with_min_degree(MinDegree::default());
    for (name, description, deadline, status) in tasks {
        tree.insert_task(Task::new(name, description, deadline, status));
    }

    println!("Traversal of the constructed B-tree is:");
    for task in tree.values() {
        println!("{}", task);
    }

    let search_deadline = 6;
    match tree.search(&search_deadline) {
        Some(task) => println!(
            "Task with deadline {} found: {}",
            search_deadline, task.name
        ),
        None => println!("Task with deadline {} not found!", search_deadline),
    }
}
