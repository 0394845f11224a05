//! Configuration for point-set differentiation.

use crate::format::{validate_decimals, FormatError, DEFAULT_DECIMALS};


/// Differentiation configuration
///
/// # Defaults
///
/// └ DEFAULT_DECIMALS - decimal count every reported value is truncated to
///
/// # Validation:
/// └ Configuration validation occurs in [`crate::differentiation::first::first_derivative`]
///   and [`crate::differentiation::second::second_derivative`] via [`DerivativeCfg::validate()`].
///
///    └ `decimals` <= [`crate::format::MAX_DECIMALS`]
#[derive(Debug, Copy, Clone)]
pub struct DerivativeCfg {
    decimals: Option<u32>,
}
impl DerivativeCfg {
    pub const DEFAULT_DECIMALS: u32 = DEFAULT_DECIMALS;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_decimals(mut self, v: u32) -> Self { self.decimals = Some(v); self }

    #[inline] #[must_use] pub fn decimals(&self) -> u32 { self.decimals.unwrap_or(Self::DEFAULT_DECIMALS) }

    pub fn validate(&self) -> Result<DerivativeCfg, FormatError> {
        let decimals = validate_decimals(self.decimals())?;
        Ok(Self { decimals: Some(decimals) })
    }
}

impl Default for DerivativeCfg {
    fn default() -> Self {
        Self { decimals: Some(Self::DEFAULT_DECIMALS) }
    }
}
