//! Expression error types.
//!
//! ┌ [`ParseError`]      : the text is not a valid expression
//! ├ [`EvalError`]       : a valid expression failed at a given `x`
//! └ [`ExpressionError`] : either of the above, for parse-and-evaluate helpers

use thiserror::Error;
use crate::errors::ErrorKind;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("invalid character {found:?} at {pos}")]
    InvalidCharacter { pos: usize, found: String },

    #[error("unexpected `{found}` at {pos}")]
    UnexpectedToken { pos: usize, found: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown identifier `{name}` at {pos}")]
    UnknownIdentifier { pos: usize, name: String },

    #[error("function `{name}` at {pos} must be followed by `(`")]
    ExpectedCall { pos: usize, name: String },

    #[error("invalid number literal `{literal}`")]
    InvalidNumber { literal: String },

    #[error("unexpected trailing input at {pos}")]
    TrailingInput { pos: usize },

    #[error("expression nested too deeply at {pos}: limit is {max}")]
    TooDeep { pos: usize, max: usize },

    #[error("expression must not reference `x`")]
    FreeVariable,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("`{op}` undefined for argument {arg}")]
    Domain { op: &'static str, arg: f64 },

    #[error("`{op}` produced a non-finite value")]
    NonFinite { op: &'static str },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::FunctionEvaluation
    }
}


#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExpressionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ExpressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpressionError::Parse(e) => e.kind(),
            ExpressionError::Eval(e)  => e.kind(),
        }
    }
}
