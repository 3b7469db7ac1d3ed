use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::ast::Expr;

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Prefix Expression
/// Unary minus applied to its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

impl PrefixExpr {
    /// Looks through directly nested negations.
    ///
    /// Returns how many `-` apply (at least one) and the first operand that is
    /// not itself a negation.
    pub fn negations(&self) -> (usize, &Expr) {
        let mut count = 1;
        let mut operand = &*self.operand;

        while let Expr::UnaryMinus(prefix) = operand {
            count += 1;
            operand = &*prefix.operand;
        }

        (count, operand)
    }
}

impl BinaryExpr {
    /// Walks the left operands of a left-folded chain such as `1 - 2 - 3`.
    ///
    /// Returns the chain's nodes from outermost to innermost and the leftmost
    /// operand, which is not a binary expression.
    pub fn left_spine(&self) -> (Vec<&BinaryExpr>, &Expr) {
        let mut spine = vec![self];
        let mut leftmost = &*self.left;

        while let Expr::BinaryOp(binary) = leftmost {
            spine.push(binary);
            leftmost = &*binary.left;
        }

        (spine, leftmost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// `+` and `-`, the operators joining terms.
    pub fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            _ => None,
        }
    }

    /// `*` and `/`, the operators joining factors.
    pub fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Sub => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
        }
    }
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_infinite() {
            // A literal too large for f64; this one overflows the same way.
            return write!(f, "1{}", "0".repeat(OVERFLOWING_LITERAL_ZEROS));
        }

        write!(f, "{}", self.value)
    }
}

const OVERFLOWING_LITERAL_ZEROS: usize = 309;

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (count, operand) = self.negations();

        write!(f, "{}{}{}", "(-".repeat(count), operand, ")".repeat(count))
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (spine, leftmost) = self.left_spine();

        write!(f, "{}{}", "(".repeat(spine.len()), leftmost)?;
        for binary in spine.iter().rev() {
            write!(f, " {} {})", binary.operator, binary.right)?;
        }

        Ok(())
    }
}
