//! Typo-tolerant keyword matching for `find`.
//!
//! A description matches a keyword string when it matches every whitespace
//! separated term. A term matches when the description contains it, or when
//! some substring of the description is within Levenshtein distance 1 of it.

use crate::model::task::Task;

/// Returns `(index, task)` for every task whose description matches all terms.
pub fn find_matches<'a>(tasks: &'a [Task], keyword: &str) -> Vec<(usize, &'a Task)> {
    let lowered = keyword.to_lowercase();
    let terms: Vec<&str> = lowered.split_whitespace().collect();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches_all(&task.description().to_lowercase(), &terms))
        .collect()
}

pub fn matches_all(description: &str, terms: &[&str]) -> bool {
    terms.iter().all(|term| matches_term(description, term))
}

pub fn matches_term(description: &str, term: &str) -> bool {
    if term.is_empty() || description.contains(term) {
        return true;
    }
    let hay: Vec<char> = description.chars().collect();
    let needle: Vec<char> = term.chars().collect();
    contains_within_one_edit(&hay, &needle)
}

// A substring one edit away from the needle is one char shorter, the same
// length, or one char longer, so only those window sizes are scanned.
// Windows are never empty; an empty description matches no non-empty term.
fn contains_within_one_edit(hay: &[char], needle: &[char]) -> bool {
    let n = needle.len();
    if n == 0 {
        return true;
    }
    for width in (n - 1).max(1)..=(n + 1) {
        if width > hay.len() {
            break;
        }
        if hay.windows(width).any(|w| within_one_edit(w, needle)) {
            return true;
        }
    }
    false
}

fn within_one_edit(a: &[char], b: &[char]) -> bool {
    let (la, lb) = (a.len(), b.len());
    if la.abs_diff(lb) > 1 {
        return false;
    }
    let (mut i, mut j, mut edits) = (0, 0, 0);
    while i < la && j < lb {
        if a[i] == b[j] {
            i += 1;
            j += 1;
            continue;
        }
        edits += 1;
        if edits > 1 {
            return false;
        }
        match la.cmp(&lb) {
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Greater => i += 1,
            std::cmp::Ordering::Less => j += 1,
        }
    }
    edits + (la - i) + (lb - j) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn descriptions(list: &[&str]) -> Vec<Task> {
        list.iter().map(|d| Task::todo(*d)).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let tasks = descriptions(&["Buy milk", "Read book", "Book flights"]);
        let found: Vec<usize> = find_matches(&tasks, "BOOK").into_iter().map(|(i, _)| i).collect();
        assert_eq!(found, vec![1, 2]);
    }

    #[test]
    fn test_all_terms_required() {
        let tasks = descriptions(&["Read book", "Book flights", "read the news"]);
        let found: Vec<usize> = find_matches(&tasks, "read book").into_iter().map(|(i, _)| i).collect();
        assert_eq!(found, vec![0]);
    }

    #[test]
    fn test_one_typo_tolerated() {
        assert!(matches_term("read book", "boko"));
        assert!(matches_term("read book", "bok"));
        assert!(matches_term("read book", "boook"));
        assert!(matches_term("read book", "bxok"));
    }

    #[test]
    fn test_two_typos_rejected() {
        assert!(!matches_term("read book", "bxxk"));
        assert!(!matches_term("buy milk", "boko"));
        assert!(!matches_term("read book", "zz"));
    }

    #[test]
    fn test_single_char_term_is_one_edit_from_any_char() {
        assert!(matches_term("read book", "k"));
        assert!(matches_term("read book", "z"));
        assert!(!matches_term("", "z"));
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(matches_term("anything", ""));
        assert!(matches_all("anything", &[]));
    }

    #[test]
    fn test_within_one_edit() {
        assert!(within_one_edit(&chars("book"), &chars("book")));
        assert!(within_one_edit(&chars("book"), &chars("boo")));
        assert!(within_one_edit(&chars("boo"), &chars("book")));
        assert!(within_one_edit(&chars("book"), &chars("look")));
        assert!(!within_one_edit(&chars("book"), &chars("boko")));
        assert!(!within_one_edit(&chars("bo"), &chars("book")));
    }

    #[test]
    fn test_unicode_descriptions() {
        assert!(matches_term("café au lait", "cafe"));
        assert!(matches_term("ünïcode", "ünï"));
    }
}
