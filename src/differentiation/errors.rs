//! Point-set differentiation error types.
//!
//! ┌ Input validation (raised by [`crate::differentiation::points`])
//! │  ├ non-numeric or non-finite coordinate / node
//! │  ├ malformed `x,y` pair in delimited input
//! │  ├ mismatched x/y lengths
//! │  ├ no usable points
//! │  └ duplicate x value
//! │
//! └ Computation preconditions
//!    ├ fewer than 2 points for a first derivative
//!    ├ node not present in the point set
//!    ├ node on the boundary for a second derivative
//!    └ a computed value overflowed to NaN or ±∞

use thiserror::Error;
use crate::errors::ErrorKind;
use crate::format::FormatError;


/// Which coordinate of a raw row failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}
impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}


#[derive(Debug, Error, Clone, PartialEq)]
pub enum DifferentiationError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("row {row}: {axis} must be a finite number. got {got:?}")]
    InvalidNumber { row: usize, axis: Axis, got: String },

    #[error("segment {row}: expected `x,y`. got {got:?}")]
    MalformedPair { row: usize, got: String },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("node must be a finite number. got {got:?}")]
    InvalidNode { got: String },

    #[error("no points provided")]
    NoPoints,

    #[error("duplicate x value: {x}")]
    DuplicateX { x: f64 },

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("node x={x} not found in point set")]
    NodeNotFound { x: f64 },

    #[error("second derivative undefined at boundary node x={x}")]
    BoundaryNode { x: f64 },

    #[error("{quantity}[{index}] is not finite: {value}")]
    NonFiniteResult { quantity: &'static str, index: usize, value: f64 },
}

/// Passes `value` through if finite, otherwise [`DifferentiationError::NonFiniteResult`].
#[inline]
pub(crate) fn check_finite(quantity: &'static str, index: usize, value: f64) -> Result<f64, DifferentiationError> {
    if !value.is_finite() {
        return Err(DifferentiationError::NonFiniteResult { quantity, index, value });
    }
    Ok(value)
}

impl DifferentiationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DifferentiationError::Format(e) => e.kind(),
            DifferentiationError::InvalidNumber { .. }
            | DifferentiationError::MalformedPair { .. }
            | DifferentiationError::UnequalLength { .. }
            | DifferentiationError::InvalidNode { .. }       => ErrorKind::InvalidNumber,
            DifferentiationError::NoPoints                   => ErrorKind::NoPoints,
            DifferentiationError::DuplicateX { .. }          => ErrorKind::DuplicateX,
            DifferentiationError::InsufficientPoints { .. }  => ErrorKind::InsufficientPoints,
            DifferentiationError::NodeNotFound { .. }        => ErrorKind::NodeNotFound,
            DifferentiationError::BoundaryNode { .. }        => ErrorKind::BoundaryNode,
            DifferentiationError::NonFiniteResult { .. }     => ErrorKind::InvalidInput,
        }
    }
}
