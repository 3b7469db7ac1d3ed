//! Evaluation of expression trees.
//!
//! A post-order walk over `Expr` in `f64` arithmetic. Division by an exact
//! zero is reported as `EvalError::DivisionByZero` instead of producing an
//! infinity or NaN.

pub mod evaluator;
