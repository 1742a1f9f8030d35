use crate::btree::BTree;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompletionStatus {
    NotStarted,
    JustStarted,
    HalfCompleted,
    AlmostCompleted,
    Finished,
}

impl Default for CompletionStatus {
    fn default() -> Self {
        CompletionStatus::NotStarted
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompletionStatus::NotStarted => "Not Started",
            CompletionStatus::JustStarted => "Just Started",
            CompletionStatus::HalfCompleted => "Half Completed",
            CompletionStatus::AlmostCompleted => "Almost Completed",
            CompletionStatus::Finished => "Finished",
        })
    }
}

/// A task record, scheduled by its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub deadline: i64,
    pub status: CompletionStatus,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        deadline: i64,
        status: CompletionStatus,
    ) -> Self {
        Task {
            name: name.into(),
            description: description.into(),
            deadline,
            status,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task: {}, Deadline: {}, Status: {}",
            self.name, self.deadline, self.status
        )
    }
}

/// Tasks keyed by deadline. Several tasks may share a deadline
pub type TaskTree = BTree<i64, Task>;

impl BTree<i64, Task> {
    /// Insert a task keyed by its own deadline
    pub fn insert_task(&mut self, task: Task) {
        self.insert(task.deadline, task);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let task = Task::new("Task4", "Description4", 6, CompletionStatus::AlmostCompleted);
        assert_eq!(
            task.to_string(),
            "Task: Task4, Deadline: 6, Status: Almost Completed"
        );
        assert_eq!(CompletionStatus::default().to_string(), "Not Started");
        assert_eq!(CompletionStatus::JustStarted.to_string(), "Just Started");
        assert_eq!(CompletionStatus::HalfCompleted.to_string(), "Half Completed");
        assert_eq!(CompletionStatus::Finished.to_string(), "Finished");
    }

    #[test]
    fn keyed_by_deadline() {
        let mut tree = TaskTree::new();
        tree.insert_task(Task::new("late", "", 30, CompletionStatus::NotStarted));
        tree.insert_task(Task::new("early", "", 5, CompletionStatus::Finished));
        assert_eq!(tree.search(&5).map(|t| t.name.as_str()), Some("early"));
        assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), vec![5, 30]);
    }
}
