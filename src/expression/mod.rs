//! Restricted math expressions in one free variable `x`.
//!
//! Replaces "evaluate the user's text as code" with a small, closed grammar:
//!
//! ┌ numbers        : `2`, `0.5`, `.5`, `1e-3`
//! ├ variable       : `x`
//! ├ constants      : `pi`, `e` (case-insensitive, optional `Math.` prefix)
//! ├ operators      : `+ - * /`, `^` (alias `**`, right-associative)
//! ├ unary sign     : `-x^2` is `-(x^2)`
//! └ functions      : `sin cos tan asin acos atan sinh cosh tanh exp ln log
//!                     log10 log2 sqrt cbrt abs` (`log` is the natural log)
//!
//! Nesting deeper than [`MAX_DEPTH`] is rejected at parse time.
//!
//! [`keypad`] holds the UI-side text helper for building expressions; it is
//! not used by the parser.

pub mod ast;
pub mod errors;
pub mod keypad;
pub mod lexer;
pub(crate) mod parser;

pub use parser::MAX_DEPTH;

use std::str::FromStr;
use ast::Expr;
use errors::{EvalError, ExpressionError, ParseError};


/// A parsed expression together with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    /// Parses `src`.
    ///
    /// ```
    /// use numdiff::expression::Expression;
    /// let f = Expression::parse("x^3 - 2*x").unwrap();
    /// assert_eq!(f.eval(2.0).unwrap(), 4.0);
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let root = parser::parse(src)?;
        Ok(Self { source: src.trim().to_owned(), root })
    }

    /// Parses and evaluates an expression that must not reference `x`
    /// (e.g. `pi/4` for an evaluation point, `0.1` for a step).
    pub fn parse_constant(src: &str) -> Result<f64, ExpressionError> {
        let expr = Self::parse(src)?;
        if expr.has_variable() {
            return Err(ParseError::FreeVariable.into());
        }
        Ok(expr.eval(0.0)?)
    }

    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }

    pub fn has_variable(&self) -> bool { self.root.has_variable() }
    pub fn source(&self) -> &str { &self.source }
    pub fn ast(&self) -> &Expr { &self.root }
}

impl FromStr for Expression {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
