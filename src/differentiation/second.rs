//! Second derivative on a non-uniform 3-point stencil.
//!
//! For an interior node `i` with spacings `h1 = x[i] - x[i-1]`, `h2 = x[i+1] - x[i]`:
//!
//! ```text
//! f''(x[i]) ≈ ( (y[i+1] - y[i]) / h2 - (y[i] - y[i-1]) / h1 ) / ((h1 + h2) / 2)
//! ```
//!
//! With `h1 == h2 == h` this is the usual `(y[i+1] - 2y[i] + y[i-1]) / h²`.

use tracing::debug;
use crate::format::truncate;
use super::config::DerivativeCfg;
use super::errors::{check_finite, DifferentiationError};
use super::points::PointSet;
use super::report::SecondDerivativeReport;


/// Computes the second derivative at `x_node`.
///
/// # Errors
/// - [`DifferentiationError::NodeNotFound`] if no point has `x == x_node` exactly
/// - [`DifferentiationError::BoundaryNode`] if `x_node` is the first or last point
/// - [`DifferentiationError::NonFiniteResult`] if the estimate overflows
/// - [`DifferentiationError::Format`] if `cfg` carries too many decimals
pub fn second_derivative(
    points: &PointSet,
    x_node: f64,
    cfg: DerivativeCfg,
) -> Result<SecondDerivativeReport, DifferentiationError> {
    let cfg = cfg.validate()?;
    let pts = points.points();
    let n   = pts.len();

    let idx = points
        .position(x_node)
        .ok_or(DifferentiationError::NodeNotFound { x: x_node })?;

    // needs a neighbour on each side
    if idx < 1 || idx + 1 >= n {
        return Err(DifferentiationError::BoundaryNode { x: x_node });
    }

    let (prev, curr, next) = (pts[idx - 1], pts[idx], pts[idx + 1]);
    let h1 = curr.x - prev.x;
    let h2 = next.x - curr.x;

    let forward_slope  = (next.y - curr.y) / h2;
    let backward_slope = (curr.y - prev.y) / h1;
    let raw   = (forward_slope - backward_slope) / ((h1 + h2) / 2.0);
    let value = truncate(check_finite("second_derivative", idx, raw)?, cfg.decimals());

    debug!(node = x_node, index = idx, h1, h2, value, "second derivative computed");

    Ok(SecondDerivativeReport {
        node: x_node,
        index: idx,
        h1,
        h2,
        forward_slope,
        backward_slope,
        value,
        decimals: cfg.decimals(),
    })
}
