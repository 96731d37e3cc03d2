use log::debug;

use crate::error::{PipError, Result};
use crate::model::{Task, TaskList};
use crate::parser::parse_index;
use crate::repository::TaskStore;
use crate::search::find_matches;
use crate::time::parse_date_time;

const TOKEN_BY: &str = "/by";
const TOKEN_FROM: &str = "/from";
const TOKEN_TO: &str = "/to";

const MSG_EMPTY_TODO: &str = "The description of a todo cannot be empty :((";
const MSG_USAGE_DEADLINE: &str = "Usage: deadline <desc> /by <time>";
const MSG_EMPTY_DEADLINE: &str = "Deadline description/time cannot be empty :((";
const MSG_USAGE_EVENT: &str = "Usage: event <desc> /from <start> /to <end>";
const MSG_EMPTY_EVENT: &str = "Event description/times cannot be empty :((";

pub const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// One user action. Holds only the raw argument text until executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddTodo(String),
    AddDeadline(String),
    AddEvent(String),
    Delete(String),
    Mark(String),
    Unmark(String),
    List,
    Find(String),
    Exit,
}

impl Command {
    /// Runs the command and returns the text to show the user.
    ///
    /// Mutating commands save the whole list before returning. A failed save
    /// is reported as an error but the in-memory change is kept.
    pub fn execute<S: TaskStore + ?Sized>(&self, tasks: &mut TaskList, store: &S) -> Result<String> {
        match self {
            Command::AddTodo(args) => {
                let description = require_non_empty(args, MSG_EMPTY_TODO)?;
                add_and_persist(Task::todo(description), tasks, store)
            }
            Command::AddDeadline(args) => {
                let (description, by) =
                    split_once(args, TOKEN_BY).ok_or(PipError::MissingToken {
                        usage: MSG_USAGE_DEADLINE,
                    })?;
                let description = require_non_empty(description, MSG_EMPTY_DEADLINE)?;
                let by = require_non_empty(by, MSG_EMPTY_DEADLINE)?;
                let by = parse_date_time(by)?;
                add_and_persist(Task::deadline(description, by), tasks, store)
            }
            Command::AddEvent(args) => {
                let missing = || PipError::MissingToken {
                    usage: MSG_USAGE_EVENT,
                };
                // "/to" only counts when it follows "/from".
                let (description, rest) = split_once(args, TOKEN_FROM).ok_or_else(missing)?;
                let (from, to) = split_once(rest, TOKEN_TO).ok_or_else(missing)?;
                let description = require_non_empty(description, MSG_EMPTY_EVENT)?;
                let from = require_non_empty(from, MSG_EMPTY_EVENT)?;
                let to = require_non_empty(to, MSG_EMPTY_EVENT)?;
                add_and_persist(Task::event(description, from, to), tasks, store)
            }
            Command::Delete(args) => {
                if tasks.is_empty() {
                    return Err(PipError::EmptyList);
                }
                let index = parse_index(args, tasks.size())?;
                let removed = tasks.remove(index)?;
                store.save(tasks.snapshot())?;
                Ok(format!(
                    "Noted. I've removed this task:\n  {}\n{}",
                    removed,
                    count_line(tasks)
                ))
            }
            Command::Mark(args) => {
                let index = parse_index(args, tasks.size())?;
                tasks.get_mut(index)?.mark();
                store.save(tasks.snapshot())?;
                Ok(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    tasks.get(index)?
                ))
            }
            Command::Unmark(args) => {
                let index = parse_index(args, tasks.size())?;
                tasks.get_mut(index)?.unmark();
                store.save(tasks.snapshot())?;
                Ok(format!(
                    "OK, I've marked this task as not done yet:\n  {}",
                    tasks.get(index)?
                ))
            }
            Command::List => Ok(tasks.render()),
            Command::Find(args) => {
                let keyword = args.trim();
                if keyword.is_empty() {
                    return Err(PipError::EmptyKeyword);
                }
                let matches = find_matches(tasks.snapshot(), keyword);
                debug!("find {:?}: {} matches", keyword, matches.len());
                if matches.is_empty() {
                    return Ok(format!("No matching tasks found for: {}", keyword));
                }
                let mut out = String::from("Here are the matching tasks in your list:");
                for (n, (_, task)) in matches.into_iter().enumerate() {
                    out.push_str(&format!("\n{}. {}", n + 1, task));
                }
                Ok(out)
            }
            Command::Exit => Ok(FAREWELL.to_string()),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

fn require_non_empty<'a>(raw: &'a str, on_empty: &'static str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PipError::EmptyDescription(on_empty));
    }
    Ok(trimmed)
}

/// Splits at the first occurrence of `token`; both halves are trimmed.
fn split_once<'a>(text: &'a str, token: &str) -> Option<(&'a str, &'a str)> {
    text.split_once(token)
        .map(|(left, right)| (left.trim(), right.trim()))
}

fn add_and_persist<S: TaskStore + ?Sized>(task: Task, tasks: &mut TaskList, store: &S) -> Result<String> {
    let shown = task.to_string();
    tasks.add(task);
    store.save(tasks.snapshot())?;
    Ok(format!(
        "Got it. I've added this task:\n  {}\n{}",
        shown,
        count_line(tasks)
    ))
}

fn count_line(tasks: &TaskList) -> String {
    format!("Now you have {} tasks in the list.", tasks.size())
}
