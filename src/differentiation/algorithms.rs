//! Defines the differentiation method and per-node stencil variants.
//!
//! Provides the [`Method`] enum (which branch produced the per-node values)
//! and the [`Stencil`] enum (which points a single node estimate used).

use serde::Serialize;


/// First-derivative branch selected from the number of points.
/// - [`Method::Lagrange`]         exactly 3 points; derivative of the quadratic interpolant
/// - [`Method::FiniteDifference`] 2 or >= 4 points; forward / central / backward differences
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Lagrange,
    FiniteDifference,
}

impl Method {
    pub const fn for_len(n: usize) -> Self {
        if n == 3 { Method::Lagrange } else { Method::FiniteDifference }
    }

    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Lagrange         => "lagrange",
            Method::FiniteDifference => "finite_difference",
        }
    }
}
impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}


/// Points used for a single node estimate.
/// - [`Stencil::Forward`]  : `(x[i], x[i+1])`, first node
/// - [`Stencil::Backward`] : `(x[i-1], x[i])`, last node
/// - [`Stencil::Central`]  : `(x[i-1], x[i+1])`, interior nodes
/// - [`Stencil::Lagrange`] : all three points
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stencil {
    Forward,
    Backward,
    Central,
    Lagrange,
}

impl Stencil {
    /// Finite-difference stencil at node `i` of `n` (n >= 2).
    pub const fn finite_difference(i: usize, n: usize) -> Self {
        if i == 0 {
            Stencil::Forward
        } else if i == n - 1 {
            Stencil::Backward
        } else {
            Stencil::Central
        }
    }

    pub const fn stencil_name(self) -> &'static str {
        match self {
            Stencil::Forward  => "forward",
            Stencil::Backward => "backward",
            Stencil::Central  => "central",
            Stencil::Lagrange => "lagrange",
        }
    }
}
impl std::fmt::Display for Stencil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stencil_name())
    }
}
