//! Parser state and entry points.
//!
//! The `Parser` owns the token vector and a cursor into it. Grammar
//! productions live in `expr.rs` and advance the cursor through `&mut Parser`.

use crate::{
    ast::ast::Expr,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::expr::parse_expression;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Tokens to parse, always ending in exactly one `End`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Number of currently open parentheses
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Anything after the first `End` is dropped, and an `End` is appended if
    /// the vector has none, so the cursor always rests on a valid token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        match tokens.iter().position(Token::is_end) {
            Some(index) => tokens.truncate(index + 1),
            None => {
                let at = tokens.last().map_or(Position::null(), |token| token.span.end);
                tokens.push(Token {
                    kind: TokenKind::End,
                    span: Span { start: at, end: at },
                });
            }
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `End`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current_token();
        if !token.is_end() {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of the expected kind, or fails with `error`.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: ParseError,
    ) -> Result<Token, ParseError> {
        if self.current_token_kind() != expected_kind {
            Err(error)
        } else {
            Ok(self.advance())
        }
    }

    /// Opens one parenthesis level, failing past `MAX_NESTING_DEPTH`.
    pub fn enter_group(&mut self, open: Position) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { open });
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are tokens left before `End`.
    pub fn has_tokens(&self) -> bool {
        !self.current_token().is_end()
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

/// A successfully parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub root: Expr,
    /// Tokens accepted by the grammar, not counting `End`
    pub consumed: usize,
}

/// Parses a whole token sequence into a single expression.
///
/// The expression must be followed directly by `End`; anything else is
/// `ParseError::TrailingInput`.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Parsed, ParseError> {
    let mut parser = Parser::new(tokens);

    let root = parse_expression(&mut parser)?;

    if parser.has_tokens() {
        return Err(ParseError::TrailingInput {
            found: parser.current_token_kind(),
            position: parser.get_position(),
        });
    }

    Ok(Parsed {
        root,
        consumed: parser.consumed(),
    })
}

/// Parses a stream of tokens into an expression tree.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    parse_tokens(tokens).map(|parsed| parsed.root)
}
