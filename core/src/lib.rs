pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod repository;
pub mod search;
pub mod service;
pub mod time;

pub use command::Command;
pub use config::resolve_data_file;
pub use error::{PipError, Result};
pub use model::{Task, TaskKind, TaskList};
pub use parser::{parse, parse_index};
pub use repository::{FileTaskStore, LoadedTasks, SkippedLine, TaskStore};
pub use service::{Response, Session};
pub use time::{format_date_time, parse_date_time};
