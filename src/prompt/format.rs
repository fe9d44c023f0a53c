//! Text-formatting helpers for prompt sections.
//!
//! Section builders receive an explicit indent level and a running
//! counter; a number is consumed only when a section actually renders,
//! which is what keeps the numbering contiguous when optional sections
//! drop out.

use once_cell::sync::Lazy;
use regex::Regex;

/// One indent step, the column width the block templates align to.
const INDENT: &str = "    ";

static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\r?\n").expect("valid regex"));

/// Running requirement counter for one block.
#[derive(Debug)]
pub struct SectionCounter {
    next: usize,
}

impl SectionCounter {
    pub fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    /// Consume and return the next section number.
    pub fn take(&mut self) -> usize {
        let number = self.next;
        self.next += 1;
        number
    }
}

pub fn push_numbered(lines: &mut Vec<String>, level: usize, number: usize, text: &str) {
    lines.push(format!("{}{number}. {text}", INDENT.repeat(level)));
}

pub fn push_bullet(lines: &mut Vec<String>, level: usize, text: &str) {
    lines.push(format!("{}* {text}", INDENT.repeat(level)));
}

/// Bullet with the text quoted, used for structure formats and extra
/// requirement entries taken from the rule files.
pub fn push_quoted_bullet(lines: &mut Vec<String>, level: usize, text: &str) {
    lines.push(format!("{}* \"{text}\"", INDENT.repeat(level)));
}

/// Number each item 1-based within its own sub-list.
pub fn push_numbered_list(lines: &mut Vec<String>, level: usize, items: &[String]) {
    for (index, item) in items.iter().enumerate() {
        push_numbered(lines, level, index + 1, item);
    }
}

/// Remove fully blank lines from a rendered block.
pub fn strip_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "").into_owned()
}

pub fn comma_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_consumes_numbers_in_order() {
        let mut counter = SectionCounter::starting_at(3);
        assert_eq!(counter.take(), 3);
        assert_eq!(counter.take(), 4);
    }

    #[test]
    fn numbered_lines_indent_by_level() {
        let mut lines = Vec::new();
        push_numbered(&mut lines, 0, 1, "top");
        push_numbered(&mut lines, 2, 7, "deep");
        assert_eq!(lines[0], "1. top");
        assert_eq!(lines[1], "        7. deep");
    }

    #[test]
    fn quoted_bullets_wrap_the_text() {
        let mut lines = Vec::new();
        push_quoted_bullet(&mut lines, 1, "a {placeholder} format");
        assert_eq!(lines[0], "    * \"a {placeholder} format\"");
    }

    #[test]
    fn strip_blank_lines_removes_whitespace_only_lines() {
        let text = "first\n\n   \nsecond\n\t\nthird\n";
        assert_eq!(strip_blank_lines(text), "first\nsecond\nthird\n");
    }

    #[test]
    fn comma_list_joins_entries() {
        let items = vec!["user".to_string(), "order".to_string()];
        assert_eq!(comma_list(&items), "user, order");
    }
}
