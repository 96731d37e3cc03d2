use log::{debug, warn};

use crate::model::TaskList;
use crate::parser::parse;
use crate::repository::TaskStore;

const WELCOME: &str = "Hi! I'm Pip :))\nWhat can I do for you?";
const LOAD_FAILED: &str = "Warning: could not load save file. Starting with an empty list.";

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub text: String,
    pub is_exit: bool,
    pub is_error: bool,
}

/// Owns the task list and its store for the lifetime of one front end
/// (terminal loop or window). Every input line goes through [`Session::respond`].
pub struct Session<S: TaskStore> {
    store: S,
    tasks: TaskList,
    startup_warnings: Vec<String>,
    exit_requested: bool,
}

impl<S: TaskStore> Session<S> {
    /// Loads the store. A failed load starts with an empty list instead of failing.
    pub fn open(store: S) -> Self {
        let mut startup_warnings = Vec::new();
        let tasks = match store.load() {
            Ok(loaded) => {
                for skipped in &loaded.skipped {
                    startup_warnings.push(format!(
                        "Warning: skipped line {} of the save file ({})",
                        skipped.line_number, skipped.reason
                    ));
                }
                TaskList::from(loaded.tasks)
            }
            Err(e) => {
                warn!("load failed: {}", e);
                startup_warnings.push(LOAD_FAILED.to_string());
                TaskList::new()
            }
        };

        Self {
            store,
            tasks,
            startup_warnings,
            exit_requested: false,
        }
    }

    pub fn greeting(&self) -> String {
        let mut out = WELCOME.to_string();
        for warning in &self.startup_warnings {
            out.push('\n');
            out.push_str(warning);
        }
        out
    }

    pub fn startup_warnings(&self) -> &[String] {
        &self.startup_warnings
    }

    pub fn respond(&mut self, input: &str) -> Response {
        let result = parse(input).and_then(|command| {
            let text = command.execute(&mut self.tasks, &self.store)?;
            Ok((text, command.is_exit()))
        });

        match result {
            Ok((text, is_exit)) => {
                self.exit_requested |= is_exit;
                Response {
                    text,
                    is_exit,
                    is_error: false,
                }
            }
            Err(e) => {
                debug!("command failed: {}", e);
                Response {
                    text: e.to_string(),
                    is_exit: false,
                    is_error: true,
                }
            }
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}
