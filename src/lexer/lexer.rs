use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexError, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    // Every pattern is anchored and matches at least one character.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(
        TokenKind::Number(fold_number_literal(matched)),
        Span::new(lexer.pos, lexer.pos + matched.len())
    ));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

/// Builds the value of a `digits[.digits]` literal digit by digit.
///
/// Digits are folded into an exact integer mantissa while it has room; the
/// rest only move the decimal exponent. The mantissa is then scaled once by
/// that exponent, so long literals never reach `inf / inf`.
fn fold_number_literal(literal: &str) -> f64 {
    let mut mantissa = 0_u64;
    let mut exponent = 0_i64;
    let mut seen_point = false;

    for ch in literal.chars() {
        match ch.to_digit(10) {
            Some(digit) if mantissa <= (u64::MAX - 9) / 10 => {
                mantissa = mantissa * 10 + u64::from(digit);
                if seen_point {
                    exponent -= 1;
                }
            }
            // Out of precision: integer digits still count towards the magnitude.
            Some(_) => {
                if !seen_point {
                    exponent += 1;
                }
            }
            None => seen_point = true,
        }
    }

    scale_by_power_of_ten(mantissa as f64, exponent)
}

/// Multiplies `value` by `10^exponent` in steps of exactly representable
/// powers of ten.
fn scale_by_power_of_ten(mut value: f64, mut exponent: i64) -> f64 {
    const MAX_EXACT_EXPONENT: i64 = 22;
    const MAX_EXACT_POWER: f64 = 1e22;

    while exponent > MAX_EXACT_EXPONENT && value.is_finite() && value != 0.0 {
        value *= MAX_EXACT_POWER;
        exponent -= MAX_EXACT_EXPONENT;
    }
    while exponent < -MAX_EXACT_EXPONENT && value != 0.0 {
        value /= MAX_EXACT_POWER;
        exponent += MAX_EXACT_EXPONENT;
    }

    if value == 0.0 || value.is_infinite() {
        return value;
    }

    if exponent >= 0 {
        value * 10_f64.powi(exponent as i32)
    } else {
        value / 10_f64.powi(-exponent as i32)
    }
}

/// Converts `source` into tokens, terminated by exactly one `End`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while let Some(character) = lex.at() {
        let remaining = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remaining)
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                return Err(LexError {
                    position: Position::from_offset(lex.pos),
                    character,
                })
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::End, Span::new(lex.pos, lex.pos)));
    Ok(lex.tokens)
}
