//! Crate-wide error taxonomy.
//!
//! Each module keeps its own error enum (see [`crate::differentiation::errors`],
//! [`crate::extrapolation::errors`], [`crate::expression::errors`]); every one of
//! them maps onto an [`ErrorKind`] through `kind()` so a caller can render any
//! failure without matching on module-specific variants.
//!
//! ┌ [`ErrorKind::InvalidNumber`]      : a coordinate or node is not a finite number
//! ├ [`ErrorKind::NoPoints`]           : zero usable points after parsing
//! ├ [`ErrorKind::DuplicateX`]         : two points share an x value
//! ├ [`ErrorKind::InsufficientPoints`] : fewer than 2 points for a first derivative
//! ├ [`ErrorKind::NodeNotFound`]       : node has no exact matching x
//! ├ [`ErrorKind::BoundaryNode`]       : second derivative at first/last node
//! ├ [`ErrorKind::InvalidInput`]       : non-finite or missing parameter (x, h, p, ...)
//! ├ [`ErrorKind::DegenerateOrder`]    : `2^p - 1 == 0`
//! └ [`ErrorKind::FunctionEvaluation`] : `f(x)` failed or was non-finite

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidNumber,
    NoPoints,
    DuplicateX,
    InsufficientPoints,
    NodeNotFound,
    BoundaryNode,
    InvalidInput,
    DegenerateOrder,
    FunctionEvaluation,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidNumber      => "invalid_number",
            ErrorKind::NoPoints           => "no_points",
            ErrorKind::DuplicateX         => "duplicate_x",
            ErrorKind::InsufficientPoints => "insufficient_points",
            ErrorKind::NodeNotFound       => "node_not_found",
            ErrorKind::BoundaryNode       => "boundary_node",
            ErrorKind::InvalidInput       => "invalid_input",
            ErrorKind::DegenerateOrder    => "degenerate_order",
            ErrorKind::FunctionEvaluation => "function_evaluation",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
