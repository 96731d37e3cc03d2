use std::io;

use thiserror::Error;

use crate::parser::KEYWORDS_HELP;
use crate::time::ACCEPTED_FORMATS_HINT;

/// Every failure the core can report.
///
/// The `Display` text of each variant is the message shown to the user, so
/// callers can print `err.to_string()` as-is.
#[derive(Error, Debug)]
pub enum PipError {
    #[error("Please type a command!")]
    EmptyInput,

    #[error("I'm not sure what '{keyword}' means. Sorry!{hint} Try one of: {}", KEYWORDS_HELP)]
    UnknownCommand { keyword: String, hint: String },

    #[error("{0}")]
    EmptyDescription(&'static str),

    #[error("{usage}")]
    MissingToken { usage: &'static str },

    #[error("Invalid date/time '{input}'. {}", ACCEPTED_FORMATS_HINT)]
    InvalidDateTime { input: String },

    #[error("Please provide a valid task number between 1 and {size}.")]
    InvalidIndex { size: usize },

    #[error("Task index {index} is out of range for a list of {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Your list is empty! Add some tasks first :))")]
    EmptyList,

    #[error("Usage: find <keyword>")]
    EmptyKeyword,

    #[error("Corrupted save line: {line}")]
    CorruptedLine { line: String },

    #[error("Unknown task type: {tag}")]
    UnknownTaskType { tag: String },

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

impl PipError {
    pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> PipError {
        move |source| PipError::Io { context, source }
    }
}

pub type Result<T> = std::result::Result<T, PipError>;
