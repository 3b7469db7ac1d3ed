#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    errors::errors::{ErrorTip, EvaluatorError},
    evaluator::evaluator::evaluate,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }

    /// Converts a byte offset, saturating at `u32::MAX` for sources past 4 GiB.
    pub fn from_offset(offset: usize) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position::from_offset(start),
            end: Position::from_offset(end),
        }
    }
}

/// Runs the whole pipeline: tokenize, parse, evaluate.
///
/// Each stage's error is lifted into [`EvaluatorError`] and returned as soon
/// as it occurs.
///
/// ```
/// assert_eq!(calc::evaluate_expression("(2 + 3) * 4"), Ok(20.0));
/// assert!(calc::evaluate_expression("4 / 0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, EvaluatorError> {
    let tokens = tokenize(source)?;
    let ast = parse(tokens)?;

    Ok(evaluate(&ast)?)
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text without its line break and
/// the column of `position` within that line, counted in characters.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if pos < end || end == source.len() {
            let column = source.get(start..pos).map_or(0, |text| text.chars().count());
            let text = line.trim_end_matches(['\n', '\r']).to_string();
            return (line_number, text, column);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position, Span};

    #[test]
    fn test_get_line_at_position() {
        let source = "1 + 2\n  3 * #\n4";

        let (line_number, line, line_pos) = get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + 2");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position(source, 12);
        assert_eq!(line_number, 2);
        assert_eq!(line, "  3 * #");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = get_line_at_position("2 + ", 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "2 + ");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_span_offsets() {
        let span = Span::new(3, 7);
        assert_eq!(span.start, Position(3));
        assert_eq!(span.end, Position(7));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_span_offsets_saturate() {
        let past_u32 = u32::MAX as usize + 10;

        assert_eq!(Position::from_offset(past_u32), Position(u32::MAX));
        assert_eq!(
            Span::new(past_u32 - 20, past_u32),
            Span {
                start: Position(u32::MAX - 10),
                end: Position(u32::MAX),
            }
        );
    }

    #[test]
    fn test_get_line_counts_characters() {
        let (_, _, line_pos) = get_line_at_position("é + ?", 5);
        assert_eq!(line_pos, 4);
    }
}

/// Renders an error as a caret diagnostic pointing into `source`.
///
/// ```text
/// Error: UnexpectedToken (Expression ended early, expected a number, `-` or `(`)
/// -> <arg 1>
///   |
/// 1 | 2 +
///   | ----^
/// ```
pub fn render_error(error: &EvaluatorError, source: &str, label: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", label));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
