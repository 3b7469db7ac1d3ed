use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, parser::parser::MAX_NESTING_DEPTH, Position, Span};

/// A character the lexer has no pattern for.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("unrecognised character {character:?} at position {position}")]
pub struct LexError {
    pub position: Position,
    pub character: char,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
    /// An operand was expected but something else was found, including the
    /// end of input.
    #[error("unexpected token `{found}` at position {position}")]
    UnexpectedToken { found: TokenKind, position: Position },
    /// A `(` whose nested expression is not followed by `)`.
    #[error("unmatched parenthesis opened at position {open}")]
    UnmatchedParen { open: Position },
    /// A complete expression followed by tokens that are not `End`.
    #[error("trailing input `{found}` at position {position}")]
    TrailingInput { found: TokenKind, position: Position },
    /// A `(` opened while `MAX_NESTING_DEPTH` parentheses are already open.
    #[error("parentheses nested too deeply at position {open}")]
    NestingTooDeep { open: Position },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero at position {}", .span.start)]
    DivisionByZero { span: Span },
}

/// Any failure of the tokenize, parse, evaluate pipeline.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvaluatorError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl EvaluatorError {
    pub fn get_position(&self) -> Position {
        match self {
            EvaluatorError::Lex(error) => error.position,
            EvaluatorError::Parse(ParseError::UnexpectedToken { position, .. }) => *position,
            EvaluatorError::Parse(ParseError::UnmatchedParen { open }) => *open,
            EvaluatorError::Parse(ParseError::TrailingInput { position, .. }) => *position,
            EvaluatorError::Parse(ParseError::NestingTooDeep { open }) => *open,
            EvaluatorError::Eval(EvalError::DivisionByZero { span }) => span.start,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            EvaluatorError::Lex(_) => "UnrecognisedCharacter",
            EvaluatorError::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
            EvaluatorError::Parse(ParseError::UnmatchedParen { .. }) => "UnmatchedParen",
            EvaluatorError::Parse(ParseError::TrailingInput { .. }) => "TrailingInput",
            EvaluatorError::Parse(ParseError::NestingTooDeep { .. }) => "NestingTooDeep",
            EvaluatorError::Eval(EvalError::DivisionByZero { .. }) => "DivisionByZero",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            EvaluatorError::Lex(_) => ErrorTip::None,
            EvaluatorError::Parse(ParseError::UnexpectedToken {
                found: TokenKind::End,
                ..
            }) => ErrorTip::Suggestion(String::from(
                "Expression ended early, expected a number, `-` or `(`",
            )),
            EvaluatorError::Parse(ParseError::UnexpectedToken { found, .. }) => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, expected a number, `-` or `(`",
                    found
                ))
            }
            EvaluatorError::Parse(ParseError::UnmatchedParen { .. }) => {
                ErrorTip::Suggestion(String::from("This `(` is never closed"))
            }
            EvaluatorError::Parse(ParseError::TrailingInput { found, .. }) => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}` after a complete expression, did you miss an operator?",
                    found
                ))
            }
            EvaluatorError::Parse(ParseError::NestingTooDeep { .. }) => ErrorTip::Suggestion(
                format!(
                    "Parentheses may be nested at most {} levels deep",
                    MAX_NESTING_DEPTH
                ),
            ),
            EvaluatorError::Eval(EvalError::DivisionByZero { .. }) => ErrorTip::Suggestion(
                String::from("The right operand of `/` evaluates to zero"),
            ),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
