//! Generalized Richardson step from two approximations
//!
//! Given `A(h)` and `A(h/2)` whose error is dominated by `c·h^p`:
//!
//! ```text
//! R = A(h/2) + (A(h/2) - A(h)) / (2^p - 1)
//! ```
//!
//! `p` need not be an integer.

use tracing::debug;
use super::errors::ExtrapolationError;
use super::report::TableauReport;


#[inline]
fn check_finite(name: &'static str, v: f64) -> Result<f64, ExtrapolationError> {
    if !v.is_finite() {
        return Err(ExtrapolationError::InvalidInput { name, reason: "must be finite", got: v });
    }
    Ok(v)
}

/// Computes one Richardson step and every intermediate quantity.
///
/// # Returns
/// [`TableauReport`] with `difference`, `denominator`, `correction` and the
/// extrapolated value `R`, all untruncated.
///
/// # Errors
/// - [`ExtrapolationError::InvalidInput`] if `a_h`, `a_h2` or `order` is non-finite,
///   if `2^order` overflows, or if the result overflows
/// - [`ExtrapolationError::DegenerateOrder`] if `2^order - 1 == 0` (i.e. `order == 0`)
pub fn richardson_tableau(
    a_h: f64,
    a_h2: f64,
    order: f64,
) -> Result<TableauReport, ExtrapolationError> {
    check_finite("A(h)", a_h)?;
    check_finite("A(h/2)", a_h2)?;
    check_finite("p", order)?;

    let denominator = order.exp2() - 1.0;
    if denominator == 0.0 {
        return Err(ExtrapolationError::DegenerateOrder { order });
    }
    if !denominator.is_finite() {
        return Err(ExtrapolationError::InvalidInput { name: "p", reason: "2^p overflows", got: order });
    }

    let difference   = a_h2 - a_h;
    let correction   = difference / denominator;
    let extrapolated = a_h2 + correction;
    if !extrapolated.is_finite() {
        return Err(ExtrapolationError::InvalidInput {
            name: "A(h/2) - A(h)", reason: "result overflows", got: difference,
        });
    }

    debug!(a_h, a_h2, order, denominator, extrapolated, "richardson tableau step");

    Ok(TableauReport {
        a_h,
        a_h2,
        order,
        difference,
        denominator,
        correction,
        extrapolated,
    })
}
