//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a recursive descent parser over the grammar
//!
//! ```text
//! expression := term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := '-' factor | NUMBER | '(' expression ')'
//! ```
//!
//! Precedence comes from the layering of the productions: each level only
//! ever calls the level below it, and repetition folds to the left.

pub mod expr;
pub mod parser;
