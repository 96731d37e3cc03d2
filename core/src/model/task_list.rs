use crate::error::{PipError, Result};
use crate::model::task::Task;

pub const EMPTY_LIST_MESSAGE: &str = "Your list is empty! Add some tasks first :))";

/// Ordered, exclusively owned collection of tasks. Insertion order is both
/// display order and storage order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        let size = self.size();
        self.tasks
            .get(index)
            .ok_or(PipError::IndexOutOfRange { index, size })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let size = self.size();
        self.tasks
            .get_mut(index)
            .ok_or(PipError::IndexOutOfRange { index, size })
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.size() {
            return Err(PipError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn render(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }
        let mut out = String::from("Here are the tasks in your list:");
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, task));
        }
        out
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
