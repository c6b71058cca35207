//! Lexer for polynomial expressions.
//!
//! Turns a raw expression string into a flat sequence of [`Token`]s. Whitespace is dropped
//! before lexing. The sign of an exponent is lexed together with the exponent itself
//! (`^-2` is a single [`Token::Power`]), so a `-` coming out of the lexer as [`Token::Minus`]
//! is always a term separator or a unary sign, never part of an exponent.
use crate::algebra::errors::AlgebraError;
use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of, satisfy},
    combinator::{map, map_res, opt, recognize, value},
    multi::many0,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// numeric coefficient, e.g. `3`, `2.5`, `.5`
    Number(f64),
    /// single-letter variable
    Variable(char),
    /// `^` followed by a signed integer exponent
    Power(i64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(val) => write!(f, "{}", val),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Power(exp) => write!(f, "^{}", exp),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

impl Token {
    /// true for tokens that may open a monomial
    pub fn starts_monomial(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Variable(_))
    }
}

fn parse_number(input: &str) -> IResult<&str, Token> {
    let with_integer_part = recognize((digit1, opt((char('.'), digit0))));
    let fraction_only = recognize((char('.'), digit1));
    let mut parser = map_res(alt((with_integer_part, fraction_only)), |s: &str| {
        s.parse::<f64>().map(Token::Number)
    });
    parser.parse(input)
}

fn parse_power(input: &str) -> IResult<&str, Token> {
    let exponent = recognize((opt(one_of("+-")), digit1));
    let mut parser = map_res((char('^'), exponent), |(_, s): (char, &str)| {
        s.parse::<i64>().map(Token::Power)
    });
    parser.parse(input)
}

fn parse_variable(input: &str) -> IResult<&str, Token> {
    map(satisfy(|c: char| c.is_alphabetic()), Token::Variable).parse(input)
}

fn parse_operator(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Plus, char('+')),
        value(Token::Minus, char('-')),
        value(Token::Star, char('*')),
        value(Token::Slash, char('/')),
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
    ))
    .parse(input)
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    alt((parse_number, parse_power, parse_variable, parse_operator)).parse(input)
}

/// removes every whitespace character
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lexes the whole input. Fails with `MalformedTerm` on the first character that does not
/// start a valid token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, AlgebraError> {
    let stripped = strip_whitespace(input);
    let mut parser = many0(parse_token);
    let (rest, tokens) = parser
        .parse(stripped.as_str())
        .map_err(|e| AlgebraError::malformed(format!("lexer failure: {:?}", e)))?;

    if let Some(bad) = rest.chars().next() {
        let position = stripped.len() - rest.len();
        let msg = if bad == '^' {
            format!("expected integer exponent after '^' at position {}", position)
        } else {
            format!("unexpected character '{}' at position {}", bad, position)
        };
        return Err(AlgebraError::MalformedTerm(msg));
    }
    trace!("tokens of '{}': {:?}", stripped, tokens);
    Ok(tokens)
}
