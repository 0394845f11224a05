//! Numerical differentiation of sampled data and Richardson extrapolation.
//!
//! ┌ [`differentiation`] : first/second derivatives over an unevenly spaced point set
//! ├ [`extrapolation`]   : Richardson extrapolation (function form and tableau form)
//! ├ [`expression`]      : restricted math-expression parser used to build `f(x)`
//! ├ [`format`]          : truncate-to-N-decimals and fixed-decimal rendering
//! └ [`errors`]          : crate-wide [`errors::ErrorKind`] taxonomy

pub mod errors;
pub mod format;

pub mod differentiation;
pub mod expression;
pub mod extrapolation;

pub use errors::ErrorKind;
