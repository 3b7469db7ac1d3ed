use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Expr, expressions::BinaryOperator};

#[test]
fn test_binary_span_covers_operands() {
    let expr = Expr::binary(
        Expr::literal(1.0, Span::new(0, 1)),
        BinaryOperator::Add,
        Expr::literal(22.0, Span::new(4, 6)),
    );

    assert_eq!(*expr.get_span(), Span::new(0, 6));
}

#[test]
fn test_unary_span_starts_at_minus() {
    let expr = Expr::unary_minus(Expr::literal(5.0, Span::new(2, 3)), Span::new(0, 1));

    assert_eq!(*expr.get_span(), Span::new(0, 3));
}

#[test]
fn test_canonical_form() {
    let expr = Expr::binary(
        Expr::binary(
            Expr::literal(2.0, Span::new(0, 1)),
            BinaryOperator::Sub,
            Expr::literal(0.5, Span::new(4, 7)),
        ),
        BinaryOperator::Mul,
        Expr::unary_minus(Expr::literal(3.0, Span::new(11, 12)), Span::new(10, 11)),
    );

    assert_eq!(expr.to_string(), "((2 - 0.5) * (-3))");
}

#[test]
fn test_literal_renders_without_parentheses() {
    assert_eq!(Expr::literal(42.0, Span::new(0, 2)).to_string(), "42");
}

#[test]
fn test_operator_lookup() {
    assert_eq!(BinaryOperator::additive(TokenKind::Plus), Some(BinaryOperator::Add));
    assert_eq!(BinaryOperator::additive(TokenKind::Minus), Some(BinaryOperator::Sub));
    assert_eq!(BinaryOperator::additive(TokenKind::Star), None);
    assert_eq!(BinaryOperator::multiplicative(TokenKind::Star), Some(BinaryOperator::Mul));
    assert_eq!(BinaryOperator::multiplicative(TokenKind::Slash), Some(BinaryOperator::Div));
    assert_eq!(BinaryOperator::multiplicative(TokenKind::Number(1.0)), None);
}

#[test]
fn test_overflowing_literal_renders_as_digits() {
    let rendered = Expr::literal(f64::INFINITY, Span::new(0, 401)).to_string();

    assert_eq!(rendered.len(), 310);
    assert!(rendered.starts_with("10"));
    assert!(rendered.chars().all(|ch| ch.is_ascii_digit()));
}

#[test]
fn test_drop_long_chain() {
    let mut expr = Expr::literal(1.0, Span::new(0, 1));
    for _ in 0..200_000 {
        expr = Expr::binary(expr, BinaryOperator::Add, Expr::literal(1.0, Span::new(0, 1)));
        expr = Expr::unary_minus(expr, Span::new(0, 1));
    }

    drop(expr);
}
