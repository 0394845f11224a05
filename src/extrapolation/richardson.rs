//! Richardson extrapolation of the central difference
//!
//! The central difference `D(h) = (f(x + h) - f(x - h)) / (2h)` has leading
//! error `c·h²`. Halving the step divides that term by 4, so
//!
//! ```text
//! D ≈ (4/3)·D(h/2) - (1/3)·D(h)
//! ```
//!
//! cancels it and leaves an `O(h⁴)` estimate
//! ([Richardson extrapolation](https://en.wikipedia.org/wiki/Richardson_extrapolation)).
//!
//! Entry points differ only in how `f` reports failure:
//! ├ [`richardson`]          : `FnMut(f64) -> f64`, non-finite outputs are errors
//! ├ [`richardson_fallible`] : `FnMut(f64) -> Result<f64, E>`
//! └ [`richardson_expr`]     : a parsed [`Expression`]

use std::convert::Infallible;
use tracing::{debug, trace};
use crate::expression::Expression;
use crate::format::truncate;
use super::config::RichardsonCfg;
use super::errors::{ExtrapolationError, NonFiniteOutput};
use super::report::{RawEstimates, RichardsonReport};


/// Plain central difference `(f(x + h) - f(x - h)) / (2h)`, no checks.
#[inline]
pub fn central_difference<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}


/// Evaluates `f(x)`, mapping failures and non-finite outputs to
/// [`ExtrapolationError::FunctionEvaluation`].
#[inline]
fn eval_fx_checked<F, E>(
    f: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, ExtrapolationError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    *evals += 1;
    let fx = f(x).map_err(|e| ExtrapolationError::FunctionEvaluation { x, source: Box::new(e) })?;
    if !fx.is_finite() {
        return Err(ExtrapolationError::FunctionEvaluation {
            x,
            source: Box::new(NonFiniteOutput { x, fx }),
        });
    }
    Ok(fx)
}

#[inline]
fn central_difference_checked<F, E>(
    f: &mut F,
    x: f64,
    h: f64,
    evals: &mut usize,
) -> Result<f64, ExtrapolationError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let fxp = eval_fx_checked(f, x + h, evals)?;
    let fxm = eval_fx_checked(f, x - h, evals)?;
    let d   = (fxp - fxm) / (2.0 * h);
    if !d.is_finite() {
        return Err(ExtrapolationError::NonFiniteEstimate { h, value: d });
    }

    trace!(x, h, fxp, fxm, d, "central difference");
    Ok(d)
}


/// Richardson extrapolation for a fallible `f`.
///
/// # Behavior
/// - `h2 = h1 / 2`
/// - evaluates `f(x+h1)`, `f(x-h1)`, `f(x+h2)`, `f(x-h2)` in that order
/// - combines the raw `D(h1)`, `D(h2)`; only the reported values are truncated
///
/// # Errors
/// - [`ExtrapolationError::InvalidInput`] if `x` or `h1` is non-finite, `h1 == 0`,
///   or `h1 / 2` underflows to zero
/// - [`ExtrapolationError::FunctionEvaluation`] if `f` fails or is non-finite
/// - [`ExtrapolationError::NonFiniteEstimate`] if a difference quotient overflows
/// - [`ExtrapolationError::Format`] if `cfg` carries too many decimals
pub fn richardson_fallible<F, E>(
    mut f: F,
    x: f64,
    h1: f64,
    cfg: RichardsonCfg,
) -> Result<RichardsonReport, ExtrapolationError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let cfg      = cfg.validate()?;
    let decimals = cfg.decimals();

    if !x.is_finite() {
        return Err(ExtrapolationError::InvalidInput { name: "x", reason: "must be finite", got: x });
    }
    if !h1.is_finite() || h1 == 0.0 {
        return Err(ExtrapolationError::InvalidInput { name: "h", reason: "must be finite and non-zero", got: h1 });
    }
    let h2 = h1 / 2.0;
    if h2 == 0.0 {
        return Err(ExtrapolationError::InvalidInput { name: "h", reason: "h/2 underflows to zero", got: h1 });
    }

    let mut evals: usize = 0;
    let d_h1_raw = central_difference_checked(&mut f, x, h1, &mut evals)?;
    let d_h2_raw = central_difference_checked(&mut f, x, h2, &mut evals)?;

    let extrapolated_raw = (4.0 / 3.0) * d_h2_raw - (1.0 / 3.0) * d_h1_raw;

    debug!(x, h1, d_h1 = d_h1_raw, d_h2 = d_h2_raw, extrapolated = extrapolated_raw, "richardson extrapolation");

    Ok(RichardsonReport {
        x,
        h1,
        h2,
        d_h1         : truncate(d_h1_raw, decimals),
        d_h2         : truncate(d_h2_raw, decimals),
        extrapolated : truncate(extrapolated_raw, decimals),
        raw: RawEstimates {
            d_h1         : d_h1_raw,
            d_h2         : d_h2_raw,
            extrapolated : extrapolated_raw,
        },
        evaluations: evals,
        decimals,
    })
}

/// Richardson extrapolation for an infallible `f`. See [`richardson_fallible`].
pub fn richardson<F>(
    mut f: F,
    x: f64,
    h1: f64,
    cfg: RichardsonCfg,
) -> Result<RichardsonReport, ExtrapolationError>
where
    F: FnMut(f64) -> f64,
{
    richardson_fallible(move |t| Ok::<f64, Infallible>(f(t)), x, h1, cfg)
}

/// Richardson extrapolation of a parsed expression in `x`. See [`richardson_fallible`].
///
/// Evaluation failures inside the expression (division by zero, domain errors)
/// surface as [`ExtrapolationError::FunctionEvaluation`] carrying the
/// [`crate::expression::errors::EvalError`].
pub fn richardson_expr(
    expr: &Expression,
    x: f64,
    h1: f64,
    cfg: RichardsonCfg,
) -> Result<RichardsonReport, ExtrapolationError> {
    richardson_fallible(|t| expr.eval(t), x, h1, cfg)
}
