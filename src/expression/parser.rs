//! Recursive-descent parser over [`super::lexer`] tokens.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | IDENT | IDENT '(' expr ')' | '(' expr ')'
//! ```
//!
//! Nesting depth is capped at [`MAX_DEPTH`]. Every `(`, call, sign, `^` and each
//! extra operand of a `+ - * /` chain counts one level, so the depth also bounds
//! the height of the resulting [`Expr`] tree and the recursion in `eval`.

use super::ast::{BinaryOp, Constant, Expr, Function};
use super::errors::ParseError;
use super::lexer::{tokenize, Spanned, Token};

/// Deepest nesting the parser accepts before failing with [`ParseError::TooDeep`].
pub const MAX_DEPTH: usize = 256;

pub(crate) fn parse(src: &str) -> Result<Expr, ParseError> {
    if src.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let tokens = tokenize(src)?;
    let mut parser = Parser { tokens, pos: 0, depth: 0 };
    let expr = parser.expr()?;

    if let Some(next) = parser.peek() {
        return Err(ParseError::TrailingInput { pos: next.pos });
    }
    Ok(expr)
}


struct Parser<'src> {
    tokens: Vec<Spanned<'src>>,
    pos: usize,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<Spanned<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_token(&self) -> Option<Token<'src>> {
        self.peek().map(|s| s.token)
    }

    fn bump(&mut self) -> Option<Spanned<'src>> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    /// Enters one nesting level; the caller leaves it with `self.depth -= 1`.
    fn descend(&mut self, pos: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { pos, max: MAX_DEPTH });
        }
        Ok(())
    }

    /// Byte offset of the next token, or of the end of input.
    fn next_pos(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last().copied())
            .map_or(0, |s| s.pos)
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(Spanned { token: Token::RParen, .. }) => Ok(()),
            Some(other) => Err(ParseError::UnexpectedToken { pos: other.pos, found: other.token.to_string() }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs   = self.term()?;
        let mut chain = 0;
        loop {
            let op = match self.peek_token() {
                Some(Token::Plus)  => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            // each operand pushes the left-leaning tree one level deeper
            self.descend(self.next_pos())?;
            chain += 1;
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        self.depth -= chain;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs   = self.unary()?;
        let mut chain = 0;
        loop {
            let op = match self.peek_token() {
                Some(Token::Star)  => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.descend(self.next_pos())?;
            chain += 1;
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        self.depth -= chain;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let negate = match self.peek_token() {
            Some(Token::Minus) => true,
            Some(Token::Plus)  => false,
            _ => return self.power(),
        };

        self.descend(self.next_pos())?;
        self.pos += 1;
        let inner = self.unary()?;
        self.depth -= 1;

        Ok(if negate { Expr::Neg(Box::new(inner)) } else { inner })
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.peek_token() == Some(Token::Caret) {
            self.descend(self.next_pos())?;
            self.pos += 1;
            // right-associative: 2^3^2 == 2^(3^2)
            let exponent = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let Some(Spanned { token, pos }) = self.bump() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match token {
            Token::Number(literal) => literal
                .parse::<f64>()
                .map(Expr::Number)
                .map_err(|_| ParseError::InvalidNumber { literal: literal.to_owned() }),

            Token::Ident(raw) => self.identifier(raw, pos),

            Token::LParen => {
                self.descend(pos)?;
                let inner = self.expr()?;
                self.expect_rparen()?;
                self.depth -= 1;
                Ok(inner)
            }

            other => Err(ParseError::UnexpectedToken { pos, found: other.to_string() }),
        }
    }

    fn identifier(&mut self, raw: &str, pos: usize) -> Result<Expr, ParseError> {
        let name = raw.strip_prefix("Math.").unwrap_or(raw);
        let lower = name.to_ascii_lowercase();

        if name == "x" {
            return Ok(Expr::Variable);
        }
        match lower.as_str() {
            "pi" => return Ok(Expr::Constant(Constant::Pi)),
            "e"  => return Ok(Expr::Constant(Constant::E)),
            _ => {}
        }

        let Some(function) = Function::from_name(&lower) else {
            return Err(ParseError::UnknownIdentifier { pos, name: raw.to_owned() });
        };
        if self.peek_token() != Some(Token::LParen) {
            return Err(ParseError::ExpectedCall { pos, name: raw.to_owned() });
        }
        self.descend(pos)?;
        self.pos += 1;
        let arg = self.expr()?;
        self.expect_rparen()?;
        self.depth -= 1;
        Ok(Expr::call(function, arg))
    }
}
