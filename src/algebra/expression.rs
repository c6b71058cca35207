//! Expression tree and its recursive-descent builder.
//!
//! Grammar (whitespace already removed):
//! ```text
//!  sum      := signs quotient ( ('+'|'-') signs quotient )*
//!  quotient := product ( '/' product )*
//!  product  := factor ( ['*'] factor )*     implicit only before '(' or right after ')'
//!  factor   := signs primary
//!  primary  := monomial | '(' sum ')'
//!  monomial := [number] ( letter ['^' ['+'|'-'] digits] )*
//! ```
//! Products bind tighter than quotients, so `(a)/(b)(c)` divides `a` by `b*c`; chained
//! quotients associate to the left. Brackets nest to any depth.
use crate::algebra::errors::AlgebraError;
use crate::algebra::term::{Term, read_monomial};
use crate::algebra::tokenizer::{Token, tokenize};
use std::fmt;
use strum_macros::Display;

/// sign joining a summand to its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Sign {
    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "-")]
    Minus,
}

impl Sign {
    pub fn flip(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// bare monomial
    Term(Term),
    /// parenthesized sub-expression
    Group(Box<Expr>),
    /// factors multiplied left to right
    Product(Vec<Expr>),
    /// dividend followed by divisors applied left to right
    Quotient(Box<Expr>, Vec<Expr>),
    /// signed summands
    Sum(Vec<(Sign, Expr)>),
}

impl Expr {
    /// Tokenizes and builds the tree for `input`. Empty input is the empty sum.
    pub fn parse(input: &str) -> Result<Expr, AlgebraError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Ok(Expr::Sum(Vec::new()));
        }
        let mut parser = ExprParser { tokens, pos: 0 };
        let expr = parser.parse_sum()?;
        match parser.peek() {
            None => Ok(expr),
            Some(Token::RParen) => Err(AlgebraError::malformed(format!(
                "unbalanced brackets: unexpected ')' at token {}",
                parser.pos
            ))),
            Some(tok) => Err(AlgebraError::malformed(format!(
                "unexpected '{}' at token {}",
                tok, parser.pos
            ))),
        }
    }

    /// true if any parenthesized group occurs in the tree
    pub fn has_groups(&self) -> bool {
        match self {
            Expr::Term(_) => false,
            Expr::Group(_) => true,
            Expr::Product(factors) => factors.iter().any(Expr::has_groups),
            Expr::Quotient(dividend, divisors) => {
                dividend.has_groups() || divisors.iter().any(Expr::has_groups)
            }
            Expr::Sum(summands) => summands.iter().any(|(_, e)| e.has_groups()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // coefficient as parsed, unrounded
            Expr::Term(term) => {
                let variables = term.render_variables();
                match term.coefficient {
                    c if c == 1.0 && !variables.is_empty() => write!(f, "{}", variables),
                    c if c == -1.0 && !variables.is_empty() => write!(f, "-{}", variables),
                    c => write!(f, "{}{}", c, variables),
                }
            }
            Expr::Group(inner) => write!(f, "({})", inner),
            Expr::Product(factors) => {
                let parts: Vec<String> = factors.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", parts.join("*"))
            }
            Expr::Quotient(dividend, divisors) => {
                write!(f, "{}", dividend)?;
                for divisor in divisors {
                    write!(f, "/{}", divisor)?;
                }
                Ok(())
            }
            Expr::Sum(summands) => {
                if summands.is_empty() {
                    return write!(f, "0");
                }
                for (i, (sign, e)) in summands.iter().enumerate() {
                    if i > 0 || *sign == Sign::Minus {
                        write!(f, "{}", sign)?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
        }
    }
}

struct ExprParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl ExprParser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn previous_closed_group(&self) -> bool {
        self.pos > 0 && self.tokens.get(self.pos - 1) == Some(&Token::RParen)
    }

    /// folds a run of unary `+`/`-` into one sign (`--` is `+`, `+-` is `-`)
    fn parse_signs(&mut self) -> Sign {
        let mut sign = Sign::Plus;
        loop {
            match self.peek() {
                Some(Token::Plus) => self.pos += 1,
                Some(Token::Minus) => {
                    sign = sign.flip();
                    self.pos += 1;
                }
                _ => return sign,
            }
        }
    }

    fn parse_sum(&mut self) -> Result<Expr, AlgebraError> {
        let mut summands = Vec::new();
        let sign = self.parse_signs();
        summands.push((sign, self.parse_quotient()?));
        while matches!(self.peek(), Some(Token::Plus) | Some(Token::Minus)) {
            let sign = self.parse_signs();
            summands.push((sign, self.parse_quotient()?));
        }
        if summands.len() == 1 && summands[0].0 == Sign::Plus {
            if let Some((_, only)) = summands.pop() {
                return Ok(only);
            }
        }
        Ok(Expr::Sum(summands))
    }

    fn parse_quotient(&mut self) -> Result<Expr, AlgebraError> {
        let dividend = self.parse_product()?;
        let mut divisors = Vec::new();
        while let Some(Token::Slash) = self.peek() {
            self.pos += 1;
            divisors.push(self.parse_product()?);
        }
        if divisors.is_empty() {
            Ok(dividend)
        } else {
            Ok(Expr::Quotient(Box::new(dividend), divisors))
        }
    }

    fn parse_product(&mut self) -> Result<Expr, AlgebraError> {
        let mut factors = vec![self.parse_factor()?];
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    factors.push(self.parse_factor()?);
                }
                Some(Token::LParen) => factors.push(self.parse_factor()?),
                Some(tok) if tok.starts_monomial() && self.previous_closed_group() => {
                    factors.push(self.parse_factor()?)
                }
                _ => break,
            }
        }
        if factors.len() == 1 {
            Ok(factors.remove(0))
        } else {
            Ok(Expr::Product(factors))
        }
    }

    fn parse_factor(&mut self) -> Result<Expr, AlgebraError> {
        let sign = self.parse_signs();
        let primary = self.parse_primary()?;
        Ok(match (sign, primary) {
            (Sign::Plus, primary) => primary,
            (Sign::Minus, Expr::Term(term)) => Expr::Term(-&term),
            (Sign::Minus, other) => Expr::Product(vec![Expr::Term(Term::constant(-1.0)), other]),
        })
    }

    fn parse_primary(&mut self) -> Result<Expr, AlgebraError> {
        match self.peek() {
            Some(Token::LParen) => {
                self.pos += 1;
                if let Some(Token::RParen) = self.peek() {
                    self.pos += 1;
                    return Ok(Expr::Group(Box::new(Expr::Sum(Vec::new()))));
                }
                let inner = self.parse_sum()?;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Ok(Expr::Group(Box::new(inner)))
                    }
                    Some(tok) => Err(AlgebraError::malformed(format!(
                        "expected ')' but found '{}' at token {}",
                        tok, self.pos
                    ))),
                    None => Err(AlgebraError::malformed(
                        "unbalanced brackets: missing ')'",
                    )),
                }
            }
            Some(tok) if tok.starts_monomial() => {
                let (term, consumed) = read_monomial(&self.tokens[self.pos..])?.ok_or_else(
                    || AlgebraError::malformed(format!("expected monomial at token {}", self.pos)),
                )?;
                self.pos += consumed;
                Ok(Expr::Term(term))
            }
            Some(tok) => Err(AlgebraError::malformed(format!(
                "unexpected '{}' at token {}",
                tok, self.pos
            ))),
            None => Err(AlgebraError::malformed("unexpected end of expression")),
        }
    }
}
