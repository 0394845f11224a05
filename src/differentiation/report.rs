//! Defines the reports returned by point-set differentiation.
//!
//! ┌ [`DerivativeReport`]       : first derivative per interval and per node
//! └ [`SecondDerivativeReport`] : second derivative at one interior node
//!
//! Every `f64` in a report is already truncated to `decimals`; the
//! `formatted` helpers only render.

use serde::Serialize;
use crate::format::{format_fixed, format_list};
use super::algorithms::{Method, Stencil};


/// Outcome of looking up the requested node in the point set.
///
/// Informational only: a missing node never fails a first-derivative run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NodeLookup {
    Found { index: usize, value: f64 },
    NotFound,
}
impl NodeLookup {
    pub fn value(&self) -> Option<f64> {
        match self {
            NodeLookup::Found { value, .. } => Some(*value),
            NodeLookup::NotFound            => None,
        }
    }
    pub fn is_found(&self) -> bool { matches!(self, NodeLookup::Found { .. }) }
}


/// Summary of a first-derivative run.
///
/// [`DerivativeReport`]
/// - `method`               : branch used for per-node values ([`Method`])
/// - `n_provided`           : number of points `n`
/// - `node`                 : requested node
/// - `per_interval_slopes`  : `n - 1` secant slopes between consecutive points
/// - `per_node_derivatives` : `n` derivative estimates, one per point
/// - `stencils`             : `n` stencils, aligned with `per_node_derivatives`
/// - `average`              : mean of the (truncated) per-interval slopes
/// - `at_requested_node`    : per-node derivative at `node`, if present
/// - `decimals`             : truncation applied to every value above
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivativeReport {
    pub method               : Method,
    pub n_provided           : usize,
    pub node                 : f64,
    pub per_interval_slopes  : Vec<f64>,
    pub per_node_derivatives : Vec<f64>,
    pub stencils             : Vec<Stencil>,
    pub average              : f64,
    pub at_requested_node    : NodeLookup,
    pub decimals             : u32,
}

impl DerivativeReport {
    pub fn formatted(&self) -> FormattedDerivative {
        let d = self.decimals;
        FormattedDerivative {
            per_interval_slopes  : format_list(&self.per_interval_slopes, d),
            per_node_derivatives : format_list(&self.per_node_derivatives, d),
            average              : format_fixed(self.average, d),
            at_requested_node    : self.at_requested_node.value().map(|v| format_fixed(v, d)),
        }
    }
}

/// Display strings for a [`DerivativeReport`]. `at_requested_node` is `None`
/// when the node was not found; the caller picks the wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDerivative {
    pub per_interval_slopes  : String,
    pub per_node_derivatives : String,
    pub average              : String,
    pub at_requested_node    : Option<String>,
}


/// Summary of a second-derivative run.
///
/// [`SecondDerivativeReport`]
/// - `node`           : requested node
/// - `index`          : position of `node` in the sorted point set
/// - `h1`, `h2`       : left and right spacings `x[i] - x[i-1]`, `x[i+1] - x[i]`
/// - `forward_slope`  : `(y[i+1] - y[i]) / h2`
/// - `backward_slope` : `(y[i] - y[i-1]) / h1`
/// - `value`          : `(forward_slope - backward_slope) / ((h1 + h2) / 2)`, truncated
/// - `decimals`       : truncation applied to `value`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecondDerivativeReport {
    pub node           : f64,
    pub index          : usize,
    pub h1             : f64,
    pub h2             : f64,
    pub forward_slope  : f64,
    pub backward_slope : f64,
    pub value          : f64,
    pub decimals       : u32,
}

impl SecondDerivativeReport {
    pub fn formatted_value(&self) -> String {
        format_fixed(self.value, self.decimals)
    }
}
