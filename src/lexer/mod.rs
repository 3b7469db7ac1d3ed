//! Lexical analysis.
//!
//! Converts expression text into a token vector terminated by a single
//! `End` token. Tokens are recognised by an ordered table of anchored regex
//! patterns; whitespace is skipped and any other character is a `LexError`.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
