#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::lexer::lexer::tokenize;

/// Character offset into the text handed to the lexer.
///
/// Offsets are limited to `u32::MAX`; `tokenize` rejects longer input with
/// `ErrorImpl::InputTooLong` before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub u32);

impl Position {
    /// Converts a cursor offset. Callers must have checked the input length.
    pub fn from_offset(offset: usize) -> Position {
        debug_assert!(u32::try_from(offset).is_ok(), "offset {} exceeds u32", offset);
        Position(u32::try_from(offset).unwrap_or(u32::MAX))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open `[start, end)` range of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line text (including its trailing
/// newline, if any) and the 0-based column. A position one past the last
/// character maps onto the final line, anything further is `None`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = String::new();

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
        last_line = line.to_string();
    }

    if pos != start {
        return None;
    }

    if last_line.is_empty() {
        Some((1, last_line, 0))
    } else {
        let column = last_line.chars().count();
        Some((line_number - 1, last_line, column))
    }
}

/// Renders `error` against the text it came from.
///
/// `line_offset` is the number of lines that precede `source` in `origin`,
/// for callers that lex one line at a time.
///
/// ```text
/// Error: UnexpectedCharacter (Unexpected character `$`, ...)
/// -> stdin:1
///   |
/// 1 | 5 $ 3
///   | --^
/// ```
pub fn render_error(error: &Error, source: &str, origin: &str, line_offset: usize) -> String {
    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        out.push_str(&format!("-> {}\n", origin));
        return out;
    };

    let line = line + line_offset;
    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("-> {}:{}\n", origin, line));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}
