use crate::error::Result;
use crate::model::task::Task;

/// A record that could not be decoded during a load and was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadedTasks {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedLine>,
}

pub trait TaskStore {
    fn load(&self) -> Result<LoadedTasks>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
