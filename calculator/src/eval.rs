//! Arithmetic evaluator for the display buffer
//!
//! Grammar:
//! ```text
//! expr    ::= term (('+' | '-') term)*
//! term    ::= unary (('*' | '/' | '%') unary)*
//! unary   ::= ('+' | '-') unary | primary
//! primary ::= NUMBER | '(' expr ')'
//! ```
//! Anything outside it is rejected.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{0}' at byte {1}")]
    UnexpectedChar(char, usize),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unexpected token {0:?}")]
    UnexpectedToken(Token),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parenthesis")]
    UnbalancedParen,
    #[error("parentheses nested deeper than {0}")]
    TooDeep(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
}

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
}

/// Split `input` into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[pos..end];
                Token::Number(parse_number(literal)?)
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(EvalError::UnexpectedChar(other, pos)),
        };
        if !matches!(token, Token::Number(_)) {
            chars.next();
        }
        tokens.push(token);
    }

    Ok(tokens)
}

fn parse_number(literal: &str) -> Result<f64> {
    // "." alone and "1.2.3" are not numbers
    let valid = literal.matches('.').count() <= 1 && literal.chars().any(|c| c.is_ascii_digit());
    if !valid {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }
    literal
        .parse()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 256;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64> {
        let mut acc = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = if op == Token::Plus { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64> {
        let mut acc = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash | Token::Percent)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            acc = match op {
                Token::Star => acc * rhs,
                _ if rhs == 0.0 => return Err(EvalError::DivisionByZero),
                Token::Slash => acc / rhs,
                // floored modulo: the sign follows the divisor
                _ => acc - rhs * (acc / rhs).floor(),
            };
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64> {
        // a run of signs folds into a single negate flag, without recursion
        let mut negate = false;
        while let Some(sign @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            if sign == Token::Minus {
                negate = !negate;
            }
        }
        let value = self.primary()?;
        Ok(if negate { -value } else { value })
    }

    fn primary(&mut self) -> Result<f64> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                if self.depth >= MAX_NESTING {
                    return Err(EvalError::TooDeep(MAX_NESTING));
                }
                self.depth += 1;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(other) => Err(EvalError::UnexpectedToken(other)),
                    None => Err(EvalError::UnbalancedParen),
                }
            }
            Some(other) => Err(EvalError::UnexpectedToken(other)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate `input` to a finite number.
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0, depth: 0 };
    let value = parser.expr()?;
    match parser.advance() {
        None => {}
        Some(Token::RParen) => return Err(EvalError::UnbalancedParen),
        Some(other) => return Err(EvalError::UnexpectedToken(other)),
    }

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Render a result for the display.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
