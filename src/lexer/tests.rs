//! Unit tests for the lexer module.

use crate::{errors::errors::LexError, Position, Span};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_numbers() {
    let tokens = kinds("42 2.75 0 100.5 007");

    assert_eq!(tokens[0], TokenKind::Number(42.0));
    assert_eq!(tokens[1], TokenKind::Number(2.75));
    assert_eq!(tokens[2], TokenKind::Number(0.0));
    assert_eq!(tokens[3], TokenKind::Number(100.5));
    assert_eq!(tokens[4], TokenKind::Number(7.0));
    assert_eq!(tokens[5], TokenKind::End);
}

#[test]
fn test_tokenize_fractions_match_float_literals() {
    assert_eq!(kinds("0.1")[0], TokenKind::Number(0.1));
    assert_eq!(kinds("2.50")[0], TokenKind::Number(2.5));
    assert_eq!(kinds("12.345")[0], TokenKind::Number(12.345));
}

#[test]
fn test_tokenize_long_fraction() {
    assert_eq!(
        kinds(&format!("1.{}", "0".repeat(400)))[0],
        TokenKind::Number(1.0)
    );
    assert_eq!(
        kinds(&format!("2.5{}", "0".repeat(400)))[0],
        TokenKind::Number(2.5)
    );
}

#[test]
fn test_tokenize_long_integer() {
    assert_eq!(
        kinds(&format!("1{}", "0".repeat(30)))[0],
        TokenKind::Number(1e30)
    );

    match kinds("12345678901234567890123")[0] {
        TokenKind::Number(value) => {
            let expected = 1.2345678901234567890123e22_f64;
            assert!(((value - expected) / expected).abs() < 1e-15);
        }
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn test_tokenize_overflowing_literal() {
    assert_eq!(
        kinds(&format!("1{}", "0".repeat(400)))[0],
        TokenKind::Number(f64::INFINITY)
    );
}

#[test]
fn test_tokenize_tiny_fraction() {
    match kinds(&format!("0.{}5", "0".repeat(300)))[0] {
        TokenKind::Number(value) => assert!(value > 0.0 && value < 1e-300),
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn test_tokenize_number_is_one_token() {
    let tokens = tokenize("12345").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number(12345.0));
    assert_eq!(tokens[0].span, Span::new(0, 5));
    assert_eq!(tokens[1].span, Span::new(5, 5));
}

#[test]
fn test_tokenize_operators() {
    let tokens = kinds("+ - * / ( )");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = kinds("(1+2)*-3/4");

    assert_eq!(
        tokens,
        vec![
            TokenKind::LParen,
            TokenKind::Number(1.0),
            TokenKind::Plus,
            TokenKind::Number(2.0),
            TokenKind::RParen,
            TokenKind::Star,
            TokenKind::Minus,
            TokenKind::Number(3.0),
            TokenKind::Slash,
            TokenKind::Number(4.0),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("  12 +\t3.5").unwrap();

    assert_eq!(tokens[0].span, Span::new(2, 4));
    assert_eq!(tokens[1].span, Span::new(5, 6));
    assert_eq!(tokens[2].span, Span::new(7, 10));
    assert_eq!(tokens[3].span, Span::new(10, 10));
}

#[test]
fn test_tokenize_empty_and_blank_input() {
    assert_eq!(kinds(""), vec![TokenKind::End]);
    assert_eq!(kinds(" \n\t "), vec![TokenKind::End]);
}

#[test]
fn test_tokenize_single_end_token() {
    for source in ["", "1", "1 + 2", "((3))", "-4 * (5 - 6) / 7.25", "))(("] {
        let tokens = tokenize(source).unwrap();
        let ends = tokens.iter().filter(|token| token.is_end()).count();

        assert_eq!(ends, 1, "source {:?}", source);
        assert!(tokens.last().unwrap().is_end(), "source {:?}", source);
    }
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("1 + x").unwrap_err();

    assert_eq!(
        error,
        LexError {
            position: Position(4),
            character: 'x',
        }
    );
}

#[test]
fn test_tokenize_unrecognised_unicode_character() {
    let error = tokenize("2 × 3").unwrap_err();

    assert_eq!(error.position, Position(2));
    assert_eq!(error.character, '×');
}

#[test]
fn test_tokenize_dangling_decimal_point() {
    let error = tokenize("2.").unwrap_err();
    assert_eq!(error.position, Position(1));
    assert_eq!(error.character, '.');

    let error = tokenize(".5").unwrap_err();
    assert_eq!(error.position, Position(0));
    assert_eq!(error.character, '.');
}

#[test]
fn test_tokenize_second_decimal_point() {
    let error = tokenize("1.2.3").unwrap_err();

    assert_eq!(error.position, Position(3));
    assert_eq!(error.character, '.');
}
