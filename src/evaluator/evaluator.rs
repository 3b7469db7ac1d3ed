use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BinaryOperator},
    },
    errors::errors::EvalError,
};

/// Computes the value of `expr`.
///
/// Operands are evaluated left before right; the first error aborts the
/// whole evaluation. Runs of `-` and left-folded operator chains are walked
/// with loops, so only parenthesized nesting deepens the recursion.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Literal(number) => Ok(number.value),
        Expr::UnaryMinus(prefix) => {
            let (count, operand) = prefix.negations();
            let value = evaluate(operand)?;

            Ok(if count % 2 == 1 { -value } else { value })
        }
        Expr::BinaryOp(binary) => evaluate_chain(binary),
    }
}

fn evaluate_chain(outermost: &BinaryExpr) -> Result<f64, EvalError> {
    let (spine, leftmost) = outermost.left_spine();
    let mut value = evaluate(leftmost)?;

    for binary in spine.into_iter().rev() {
        let right = evaluate(&binary.right)?;
        value = apply(binary, value, right)?;
    }

    Ok(value)
}

fn apply(binary: &BinaryExpr, left: f64, right: f64) -> Result<f64, EvalError> {
    match binary.operator {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            // Also catches -0.0.
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { span: binary.span });
            }

            Ok(left / right)
        }
    }
}
