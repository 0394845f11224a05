//! Lexer for math expressions
//!
//! Uses Logos for compile-time generated tokenization.

use logos::Logos;
use super::errors::ParseError;

/// Token type for math expressions
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    /// Number literal: `2`, `2.`, `2.5`, `.5`, with optional exponent
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    Number(&'src str),

    /// Identifier, optionally `Math.`-prefixed (`Math.PI`, `Math.sin`)
    #[regex(r"(Math\.)?[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    #[token("**")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(s) | Token::Ident(s) => write!(f, "{s}"),
            Token::Plus   => write!(f, "+"),
            Token::Minus  => write!(f, "-"),
            Token::Star   => write!(f, "*"),
            Token::Slash  => write!(f, "/"),
            Token::Caret  => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Token with its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned<'src> {
    pub token: Token<'src>,
    pub pos: usize,
}

/// Tokenizes `src`, failing on the first character no token accepts.
pub fn tokenize(src: &str) -> Result<Vec<Spanned<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(src);

    while let Some(result) = lexer.next() {
        let pos = lexer.span().start;
        match result {
            Ok(token) => tokens.push(Spanned { token, pos }),
            Err(()) => {
                return Err(ParseError::InvalidCharacter { pos, found: lexer.slice().to_owned() });
            }
        }
    }

    Ok(tokens)
}
