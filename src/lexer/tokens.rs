use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind {
    End,
    Number(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LParen,
    RParen,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::End => "End",
            TokenKind::Number(_) => "Number",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
        }
    }
}

/// Displays the token as it appears in source; `End` has no lexeme.
impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::End => write!(f, "end of input"),
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number(value) => write!(
                f,
                "{} ({}) {}..{}",
                self.kind.name(),
                value,
                self.span.start,
                self.span.end
            ),
            _ => write!(
                f,
                "{} {}..{}",
                self.kind.name(),
                self.span.start,
                self.span.end
            ),
        }
    }
}

impl Token {
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}
