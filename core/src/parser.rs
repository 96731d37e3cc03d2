use log::debug;

use crate::command::Command;
use crate::error::{PipError, Result};

pub const KEYWORDS: [&str; 9] = [
    "bye", "list", "mark", "unmark", "delete", "todo", "deadline", "event", "find",
];

pub const KEYWORDS_HELP: &str = "bye, list, mark, unmark, delete, todo, deadline, event, find";

/// Turns one raw input line into a [`Command`].
///
/// The first whitespace-separated word is the keyword (case-sensitive); the
/// rest of the line is handed to the command untouched apart from trimming.
pub fn parse(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(PipError::EmptyInput);
    }

    let (keyword, args) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (trimmed, ""),
    };
    let args = args.to_string();

    let command = match keyword {
        "bye" => Command::Exit,
        "list" => Command::List,
        "mark" => Command::Mark(args),
        "unmark" => Command::Unmark(args),
        "delete" => Command::Delete(args),
        "todo" => Command::AddTodo(args),
        "deadline" => Command::AddDeadline(args),
        "event" => Command::AddEvent(args),
        "find" => Command::Find(args),
        other => {
            let hint = suggest_keyword(other)
                .map(|k| format!(" Did you mean '{}'?", k))
                .unwrap_or_default();
            return Err(PipError::UnknownCommand {
                keyword: other.to_string(),
                hint,
            });
        }
    };

    debug!("parsed {:?} from {:?}", command, trimmed);
    Ok(command)
}

/// Suggests the keyword the user most likely meant: a case-insensitive exact
/// match first, then an unambiguous prefix.
pub fn suggest_keyword(word: &str) -> Option<&'static str> {
    let lowered = word.to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    if let Some(exact) = KEYWORDS.iter().copied().find(|k| *k == lowered) {
        return Some(exact);
    }

    let matches: Vec<&'static str> = KEYWORDS
        .iter()
        .copied()
        .filter(|k| k.starts_with(&lowered))
        .collect();

    match matches.len() {
        1 => Some(matches[0]),
        _ => None,
    }
}

/// Parses a 1-based task number into a 0-based index.
///
/// Blank, non-numeric and out-of-range input all yield the same
/// [`PipError::InvalidIndex`] carrying the valid range.
pub fn parse_index(text: &str, size: usize) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(n) if (1..=size).contains(&n) => Ok(n - 1),
        _ => Err(PipError::InvalidIndex { size }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse("bye").unwrap(), Command::Exit);
        assert_eq!(parse("  list  ").unwrap(), Command::List);
        assert_eq!(parse("mark 2").unwrap(), Command::Mark("2".to_string()));
        assert_eq!(
            parse("todo   read  book ").unwrap(),
            Command::AddTodo("read  book".to_string())
        );
        assert_eq!(
            parse("deadline return book /by 2/12/2019 1800").unwrap(),
            Command::AddDeadline("return book /by 2/12/2019 1800".to_string())
        );
        assert_eq!(parse("find").unwrap(), Command::Find(String::new()));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse(""), Err(PipError::EmptyInput)));
        assert!(matches!(parse("   \t "), Err(PipError::EmptyInput)));
    }

    #[test]
    fn test_parse_unknown() {
        let err = parse("blah blah").unwrap_err();
        assert!(matches!(err, PipError::UnknownCommand { ref keyword, .. } if keyword == "blah"));
        assert!(err.to_string().contains("todo"));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let err = parse("LIST").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'list'?"));
    }

    #[test]
    fn test_suggest_keyword() {
        assert_eq!(suggest_keyword("dead"), Some("deadline"));
        assert_eq!(suggest_keyword("Todo"), Some("todo"));
        assert_eq!(suggest_keyword("unm"), Some("unmark"));
        // Ambiguous: delete, deadline
        assert_eq!(suggest_keyword("de"), None);
        assert_eq!(suggest_keyword("xyz"), None);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 1 ", 3).unwrap(), 0);
        assert_eq!(parse_index("3", 3).unwrap(), 2);
        for bad in ["", "0", "4", "-1", "abc", "1.5"] {
            assert!(
                matches!(parse_index(bad, 3), Err(PipError::InvalidIndex { size: 3 })),
                "input: {:?}",
                bad
            );
        }
    }
}
