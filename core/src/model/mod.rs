pub mod task;
pub mod task_list;

pub use task::{Task, TaskKind};
pub use task_list::TaskList;
