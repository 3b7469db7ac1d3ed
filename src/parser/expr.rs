use crate::{
    ast::{ast::Expr, expressions::BinaryOperator},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub type OperandHandler = fn(&mut Parser) -> Result<Expr, ParseError>;
pub type OperatorLookup = fn(TokenKind) -> Option<BinaryOperator>;

// expression := term (('+'|'-') term)*
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_binary_expr(parser, parse_term, BinaryOperator::additive)
}

// term := factor (('*'|'/') factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_binary_expr(parser, parse_factor, BinaryOperator::multiplicative)
}

// factor := '-' factor | NUMBER | '(' expression ')'
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Minus => parse_prefix_expr(parser),
        _ => parse_primary_expr(parser),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = *parser.current_token();

    match token.kind {
        TokenKind::Number(value) => {
            parser.advance();
            Ok(Expr::literal(value, token.span))
        }
        TokenKind::LParen => parse_grouping_expr(parser),
        found => Err(ParseError::UnexpectedToken {
            found,
            position: token.span.start,
        }),
    }
}

/// One precedence level: operands joined by the operators `operator`
/// recognises, folded to the left.
pub fn parse_binary_expr(
    parser: &mut Parser,
    operand: OperandHandler,
    operator: OperatorLookup,
) -> Result<Expr, ParseError> {
    let mut left = operand(parser)?;

    while let Some(binary_operator) = operator(parser.current_token_kind()) {
        parser.advance();
        let right = operand(parser)?;

        left = Expr::binary(left, binary_operator, right);
    }

    Ok(left)
}

/// A run of `-` tokens followed by its operand.
///
/// The run is read with a loop, so `---5` nests three `UnaryMinus` nodes
/// without nesting calls.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut minus_spans = vec![];
    while parser.current_token_kind() == TokenKind::Minus {
        minus_spans.push(parser.advance().span);
    }

    let mut expr = parse_primary_expr(parser)?;
    for minus in minus_spans.into_iter().rev() {
        expr = Expr::unary_minus(expr, minus);
    }

    Ok(expr)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let open = parser.advance().span.start;
    parser.enter_group(open)?;

    let expr = parse_expression(parser)?;
    parser.expect_error(TokenKind::RParen, ParseError::UnmatchedParen { open })?;

    parser.leave_group();
    Ok(expr)
}
