pub mod file;
pub mod traits;

pub use file::FileTaskStore;
pub use traits::{LoadedTasks, SkippedLine, TaskStore};
