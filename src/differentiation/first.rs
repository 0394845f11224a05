//! First derivative of an unevenly spaced point set.
//!
//! Per-interval values are secant slopes. Per-node values come from one of two
//! branches (see [`Method`]):
//!
//! - exactly 3 points: derivative of the unique quadratic through all three
//!   ([Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial)),
//!   evaluated at every node, endpoints included
//! - 2 or >= 4 points: forward difference at the first node, backward at the
//!   last, central `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])` in between

use tracing::debug;
use crate::format::truncate;
use super::algorithms::{Method, Stencil};
use super::config::DerivativeCfg;
use super::errors::{check_finite, DifferentiationError};
use super::points::PointSet;
use super::report::{DerivativeReport, NodeLookup};


#[inline]
fn slope(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (y1 - y0) / (x1 - x0)
}

/// Derivative at `xi` of the quadratic through `(x1,y1), (x2,y2), (x3,y3)`.
///
/// ```text
/// f'(xi) = y1 (2xi - x2 - x3) / ((x1 - x2)(x1 - x3))
///        + y2 (2xi - x1 - x3) / ((x2 - x1)(x2 - x3))
///        + y3 (2xi - x1 - x2) / ((x3 - x1)(x3 - x2))
/// ```
#[inline]
fn lagrange3_derivative(x: [f64; 3], y: [f64; 3], xi: f64) -> f64 {
    let [x1, x2, x3] = x;
    let [y1, y2, y3] = y;

    (2.0 * xi - x2 - x3) / ((x1 - x2) * (x1 - x3)) * y1
        + (2.0 * xi - x1 - x3) / ((x2 - x1) * (x2 - x3)) * y2
        + (2.0 * xi - x1 - x2) / ((x3 - x1) * (x3 - x2)) * y3
}


/// Computes first-derivative estimates for every interval and every node.
///
/// # Behavior
/// - `per_interval_slopes[i] = (y[i+1] - y[i]) / (x[i+1] - x[i])`
/// - `per_node_derivatives` from the [`Method`] chosen by `n`
/// - `average` is the mean of the truncated slopes, truncated again
/// - `at_requested_node` matches `x_node` with exact float equality;
///   [`NodeLookup::NotFound`] when absent
///
/// Every value is truncated to `cfg.decimals()`.
///
/// # Errors
/// - [`DifferentiationError::InsufficientPoints`] if `n < 2`
/// - [`DifferentiationError::NonFiniteResult`] if a slope, node derivative or the
///   average overflows (coordinates near `f64::MAX`)
/// - [`DifferentiationError::Format`] if `cfg` carries too many decimals
pub fn first_derivative(
    points: &PointSet,
    x_node: f64,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, DifferentiationError> {
    let cfg      = cfg.validate()?;
    let decimals = cfg.decimals();

    let pts = points.points();
    let n   = pts.len();
    if n < 2 {
        return Err(DifferentiationError::InsufficientPoints { got: n });
    }

    let per_interval_slopes = pts
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let s = check_finite("per_interval_slopes", i, slope(w[0].x, w[0].y, w[1].x, w[1].y))?;
            Ok(truncate(s, decimals))
        })
        .collect::<Result<Vec<f64>, DifferentiationError>>()?;

    let method = Method::for_len(n);
    let mut per_node_derivatives = Vec::with_capacity(n);
    let mut stencils             = Vec::with_capacity(n);

    match method {
        Method::Lagrange => {
            let x = [pts[0].x, pts[1].x, pts[2].x];
            let y = [pts[0].y, pts[1].y, pts[2].y];
            for (i, p) in pts.iter().enumerate() {
                let d = check_finite("per_node_derivatives", i, lagrange3_derivative(x, y, p.x))?;
                per_node_derivatives.push(truncate(d, decimals));
                stencils.push(Stencil::Lagrange);
            }
        }
        Method::FiniteDifference => {
            for i in 0..n {
                let stencil = Stencil::finite_difference(i, n);
                let (lo, hi) = match stencil {
                    Stencil::Forward  => (i, i + 1),
                    Stencil::Backward => (i - 1, i),
                    _                 => (i - 1, i + 1),
                };
                let d = check_finite("per_node_derivatives", i, slope(pts[lo].x, pts[lo].y, pts[hi].x, pts[hi].y))?;
                per_node_derivatives.push(truncate(d, decimals));
                stencils.push(stencil);
            }
        }
    }

    let mean    = per_interval_slopes.iter().sum::<f64>() / per_interval_slopes.len() as f64;
    let average = truncate(check_finite("average", 0, mean)?, decimals);

    let at_requested_node = match points.position(x_node) {
        Some(index) => NodeLookup::Found { index, value: per_node_derivatives[index] },
        None        => NodeLookup::NotFound,
    };

    debug!(
        n,
        method = method.method_name(),
        node = x_node,
        found = at_requested_node.is_found(),
        "first derivative computed"
    );

    Ok(DerivativeReport {
        method,
        n_provided: n,
        node: x_node,
        per_interval_slopes,
        per_node_derivatives,
        stencils,
        average,
        at_requested_node,
        decimals,
    })
}
