//! Richardson extrapolation error types.
//!
//! ┌ [`ExtrapolationError`] : invalid parameters, degenerate order, failed `f(x)`
//! └ [`NonFiniteOutput`]    : cause attached when `f(x)` returns NaN or ±∞

use thiserror::Error;
use crate::errors::ErrorKind;
use crate::format::FormatError;


/// `f(x)` produced a non-finite value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("function non-finite at x={x}, f(x)={fx}")]
pub struct NonFiniteOutput {
    pub x: f64,
    pub fx: f64,
}


#[derive(Debug, Error)]
pub enum ExtrapolationError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid `{name}`: {reason}. got {got}")]
    InvalidInput { name: &'static str, reason: &'static str, got: f64 },

    #[error("degenerate order p={order}: 2^p - 1 is zero")]
    DegenerateOrder { order: f64 },

    #[error("function evaluation failed at x={x}: {source}")]
    FunctionEvaluation {
        x: f64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("central difference non-finite for h={h}: D(h)={value}")]
    NonFiniteEstimate { h: f64, value: f64 },
}

impl ExtrapolationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtrapolationError::Format(e)                 => e.kind(),
            ExtrapolationError::InvalidInput { .. }       => ErrorKind::InvalidInput,
            ExtrapolationError::DegenerateOrder { .. }    => ErrorKind::DegenerateOrder,
            ExtrapolationError::FunctionEvaluation { .. }
            | ExtrapolationError::NonFiniteEstimate { .. } => ErrorKind::FunctionEvaluation,
        }
    }
}
