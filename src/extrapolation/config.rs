//! Configuration for the function form of Richardson extrapolation.

use crate::format::{validate_decimals, FormatError, DEFAULT_DECIMALS};


/// Richardson Configuration
///
/// # Defaults
///
/// └ DEFAULT_DECIMALS - decimal count for the displayed `D(h1)`, `D(h2)` and result
///
/// # Notes:
/// └ Truncation only affects reported values. The extrapolation itself combines
///   the raw `D(h1)` and `D(h2)`.
///
/// # Validation:
/// └ Configuration validation occurs in [`crate::extrapolation::richardson::richardson_fallible`]
///   via [`RichardsonCfg::validate()`].
#[derive(Debug, Copy, Clone)]
pub struct RichardsonCfg {
    decimals: Option<u32>,
}
impl RichardsonCfg {
    pub const DEFAULT_DECIMALS: u32 = DEFAULT_DECIMALS;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_decimals(mut self, v: u32) -> Self { self.decimals = Some(v); self }

    #[inline] #[must_use] pub fn decimals(&self) -> u32 { self.decimals.unwrap_or(Self::DEFAULT_DECIMALS) }

    pub fn validate(&self) -> Result<RichardsonCfg, FormatError> {
        let decimals = validate_decimals(self.decimals())?;
        Ok(Self { decimals: Some(decimals) })
    }
}

impl Default for RichardsonCfg {
    fn default() -> Self {
        Self { decimals: Some(Self::DEFAULT_DECIMALS) }
    }
}
