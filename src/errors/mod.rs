//! Error types for every stage of the pipeline.
//!
//! - `LexError` for characters the lexer cannot place in any token
//! - `ParseError` for grammar violations
//! - `EvalError` for runtime failures (division by zero)
//! - `EvaluatorError`, the union returned by `evaluate_expression`, with the
//!   name/tip/position accessors used to render diagnostics

pub mod errors;
