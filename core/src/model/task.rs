use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{PipError, Result};
use crate::time::{format_date_time, parse_date_time, to_iso_string};

const FIELD_SEPARATOR: &str = " | ";
// Stands in for '|' inside free-text fields on disk.
const PIPE_SUBSTITUTE: char = '\u{00A6}';

#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDateTime },
    Event { from: String, to: String },
}

impl TaskKind {
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(
            description,
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn tag(&self) -> char {
        self.kind.tag()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// Encodes the task as one storage line: `tag | done | description | extra...`.
    pub fn to_record(&self) -> String {
        let mut fields = vec![
            self.tag().to_string(),
            if self.done { "1" } else { "0" }.to_string(),
            escape(&self.description),
        ];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => fields.push(to_iso_string(by)),
            TaskKind::Event { from, to } => {
                fields.push(escape(from));
                fields.push(escape(to));
            }
        }
        fields.join(FIELD_SEPARATOR)
    }

    /// Decodes a storage line produced by [`Task::to_record`].
    pub fn from_record(line: &str) -> Result<Task> {
        let line = line.trim();
        let mut fields: Vec<&str> = line.split('|').map(str::trim).collect();
        // Trailing empty fields carry no data; "T | 0 |" is as short as "T | 0".
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        if fields.len() < 3 {
            return Err(corrupted(line));
        }

        let done = fields[1] == "1";
        let description = unescape(fields[2]);

        let kind = match fields[0] {
            "T" => TaskKind::Todo,
            "D" => {
                if fields.len() < 4 {
                    return Err(corrupted(line));
                }
                TaskKind::Deadline {
                    by: parse_date_time(fields[3])?,
                }
            }
            "E" => {
                if fields.len() < 5 {
                    return Err(corrupted(line));
                }
                TaskKind::Event {
                    from: unescape(fields[3]),
                    to: unescape(fields[4]),
                }
            }
            other => {
                return Err(PipError::UnknownTaskType {
                    tag: other.to_string(),
                })
            }
        };

        Ok(Task {
            description,
            done,
            kind,
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_date_time(by)),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('|', &PIPE_SUBSTITUTE.to_string())
}

fn unescape(text: &str) -> String {
    text.replace(PIPE_SUBSTITUTE, "|")
}

fn corrupted(line: &str) -> PipError {
    PipError::CorruptedLine {
        line: line.to_string(),
    }
}
