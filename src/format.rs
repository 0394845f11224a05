//! Numeric formatting shared by every computation.
//!
//! ┌ [`truncate`]     : cut a value toward zero at `decimals` fractional digits
//! └ [`format_fixed`] : render the truncated value with exactly `decimals` digits
//!
//! Truncation works on the shortest round-trip decimal representation of the
//! `f64` rather than on `trunc(v * 10^d) / 10^d`. The scaled product is itself
//! rounded, so `1.15` at 2 decimals would otherwise come out as `1.14`.

use thiserror::Error;
use crate::errors::ErrorKind;

/// Decimal count used by every report unless configured otherwise.
pub const DEFAULT_DECIMALS: u32 = 9;

/// An `f64` never carries more than 17 significant decimal digits.
pub const MAX_DECIMALS: u32 = 17;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    #[error("invalid decimals: must be <= {max}. got {got}")]
    InvalidDecimals { got: u32, max: u32 },
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Checks a configured decimal count against [`MAX_DECIMALS`].
pub fn validate_decimals(decimals: u32) -> Result<u32, FormatError> {
    if decimals > MAX_DECIMALS {
        return Err(FormatError::InvalidDecimals { got: decimals, max: MAX_DECIMALS });
    }
    Ok(decimals)
}

/// Truncates `value` toward zero at `decimals` fractional digits. Never rounds.
///
/// # Behavior
/// ├ non-finite values are returned unchanged
/// ├ `-0.0` (including negatives that truncate to zero) becomes `0.0`
/// └ idempotent: `truncate(truncate(v, d), d) == truncate(v, d)`
///
/// ```
/// use numdiff::format::truncate;
/// assert_eq!(truncate(1.2345678999, 9), 1.234567899);
/// assert_eq!(truncate(-1.2345678999, 9), -1.234567899);
/// ```
pub fn truncate(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // `Display` for f64 is the shortest round-trip form and never uses exponents
    let repr = value.to_string();
    let cut = match repr.find('.') {
        Some(dot) if decimals == 0 => &repr[..dot],
        Some(dot) => {
            let end = (dot + 1 + decimals as usize).min(repr.len());
            &repr[..end]
        }
        None => repr.as_str(),
    };

    let out = cut.parse::<f64>().unwrap_or(value);
    if out == 0.0 { 0.0 } else { out }
}

/// Renders `truncate(value, decimals)` with exactly `decimals` fractional digits.
///
/// Zero-padded on the right; a leading `-` for negative values and a `0` before
/// the point when `|value| < 1`. With `decimals == 0` no point is written.
///
/// ```
/// use numdiff::format::format_fixed;
/// assert_eq!(format_fixed(2.0, 9), "2.000000000");
/// assert_eq!(format_fixed(-0.5, 3), "-0.500");
/// ```
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let truncated = truncate(value, decimals);
    if !truncated.is_finite() {
        return truncated.to_string();
    }

    let repr = truncated.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if decimals == 0 {
        return int_part.to_string();
    }

    let width = decimals as usize;
    let mut out = String::with_capacity(int_part.len() + 1 + width);
    out.push_str(int_part);
    out.push('.');
    out.push_str(frac_part);
    for _ in frac_part.len()..width {
        out.push('0');
    }
    out
}

/// Formats a slice as `[a, b, c]` using [`format_fixed`] for each entry.
pub fn format_list(values: &[f64], decimals: u32) -> String {
    let items: Vec<String> = values.iter().map(|&v| format_fixed(v, decimals)).collect();
    format!("[{}]", items.join(", "))
}
