//! Defines the reports returned by Richardson extrapolation.

use serde::Serialize;
use crate::format::format_fixed;


/// Untruncated central-difference estimates and their combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawEstimates {
    pub d_h1         : f64,
    pub d_h2         : f64,
    pub extrapolated : f64,
}


/// Final report of the function form.
///
/// [`RichardsonReport`]
/// - `x`            : evaluation point
/// - `h1`, `h2`     : step sizes, `h2 = h1 / 2`
/// - `d_h1`, `d_h2` : central differences `D(h1)`, `D(h2)`, truncated
/// - `extrapolated` : `(4/3) D(h2) - (1/3) D(h1)` from the raw values, truncated
/// - `raw`          : the same three values before truncation
/// - `evaluations`  : number of `f` evaluations (always 4 on success)
/// - `decimals`     : truncation applied to the reported values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RichardsonReport {
    pub x            : f64,
    pub h1           : f64,
    pub h2           : f64,
    pub d_h1         : f64,
    pub d_h2         : f64,
    pub extrapolated : f64,
    pub raw          : RawEstimates,
    pub evaluations  : usize,
    pub decimals     : u32,
}

impl RichardsonReport {
    pub fn formatted(&self) -> FormattedRichardson {
        let d = self.decimals;
        FormattedRichardson {
            x            : format_fixed(self.x, d),
            h1           : format_fixed(self.h1, d),
            h2           : format_fixed(self.h2, d),
            d_h1         : format_fixed(self.d_h1, d),
            d_h2         : format_fixed(self.d_h2, d),
            extrapolated : format_fixed(self.extrapolated, d),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRichardson {
    pub x            : String,
    pub h1           : String,
    pub h2           : String,
    pub d_h1         : String,
    pub d_h2         : String,
    pub extrapolated : String,
}


/// Step-by-step result of the tableau form, values untruncated.
///
/// [`TableauReport`]
/// - `a_h`, `a_h2`  : inputs `A(h)`, `A(h/2)`
/// - `order`        : error order `p`
/// - `difference`   : `A(h/2) - A(h)`
/// - `denominator`  : `2^p - 1`
/// - `correction`   : `difference / denominator`
/// - `extrapolated` : `R = A(h/2) + correction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableauReport {
    pub a_h          : f64,
    pub a_h2         : f64,
    pub order        : f64,
    pub difference   : f64,
    pub denominator  : f64,
    pub correction   : f64,
    pub extrapolated : f64,
}

impl TableauReport {
    pub fn formatted(&self, decimals: u32) -> FormattedTableau {
        FormattedTableau {
            difference   : format_fixed(self.difference, decimals),
            denominator  : format_fixed(self.denominator, decimals),
            correction   : format_fixed(self.correction, decimals),
            extrapolated : format_fixed(self.extrapolated, decimals),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTableau {
    pub difference   : String,
    pub denominator  : String,
    pub correction   : String,
    pub extrapolated : String,
}
