use std::{fmt::Display, mem};

use crate::Span;

use super::expressions::{BinaryExpr, BinaryOperator, NumberExpr, PrefixExpr};

/// Expression tree produced by the parser.
///
/// Every node owns its children; the tree is built bottom-up and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(NumberExpr),
    UnaryMinus(PrefixExpr),
    BinaryOp(BinaryExpr),
}

impl Expr {
    pub fn literal(value: f64, span: Span) -> Self {
        Expr::Literal(NumberExpr { value, span })
    }

    /// Negates `operand`; `minus` is the span of the `-` token.
    pub fn unary_minus(operand: Expr, minus: Span) -> Self {
        let span = Span {
            start: minus.start,
            end: operand.get_span().end,
        };

        Expr::UnaryMinus(PrefixExpr {
            operand: Box::new(operand),
            span,
        })
    }

    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start,
            end: right.get_span().end,
        };

        Expr::BinaryOp(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        })
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(number) => &number.span,
            Expr::UnaryMinus(prefix) => &prefix.span,
            Expr::BinaryOp(binary) => &binary.span,
        }
    }
}

/// Children are detached onto a worklist before they drop, so dropping a long
/// operator chain or a long run of `-` does not recurse once per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = vec![];
        detach_children(self, &mut detached);

        while let Some(mut expr) = detached.pop() {
            detach_children(&mut expr, &mut detached);
        }
    }
}

fn detach_children(expr: &mut Expr, detached: &mut Vec<Expr>) {
    let mut detach = |child: &mut Box<Expr>| {
        if !matches!(**child, Expr::Literal(_)) {
            let placeholder = Expr::literal(0.0, *child.get_span());
            detached.push(mem::replace(&mut **child, placeholder));
        }
    };

    match expr {
        Expr::Literal(_) => {}
        Expr::UnaryMinus(prefix) => detach(&mut prefix.operand),
        Expr::BinaryOp(binary) => {
            detach(&mut binary.left);
            detach(&mut binary.right);
        }
    }
}

/// Canonical form: every operator node is wrapped in parentheses, so the
/// output re-parses to the same tree shape without relying on precedence.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(number) => write!(f, "{}", number),
            Expr::UnaryMinus(prefix) => write!(f, "{}", prefix),
            Expr::BinaryOp(binary) => write!(f, "{}", binary),
        }
    }
}
