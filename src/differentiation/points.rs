//! Input adapters and the validated [`PointSet`].
//!
//! Every adapter ends in [`PointSet::new`], which enforces the invariants shared
//! by all differentiation routines:
//!
//! ┌ at least one point                  ([`DifferentiationError::NoPoints`])
//! ├ finite coordinates                  ([`DifferentiationError::InvalidNumber`])
//! ├ sorted ascending by `x`
//! └ pairwise distinct `x`               ([`DifferentiationError::DuplicateX`])
//!
//! Adapters
//! ├ [`parse_points`]           : rows of raw `(x, y)` fields (text or numbers)
//! ├ [`parse_points_delimited`] : a single `"x1,y1;x2,y2;..."` string
//! └ [`PointSet::from_xy`]      : two numeric slices

use serde::{Deserialize, Serialize};
use tracing::trace;
use super::errors::{Axis, DifferentiationError};


/// A single `(x, y)` sample.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}


/// One raw input field as a caller supplies it.
///
/// Text is trimmed and must parse entirely as a float literal; a blank text
/// field counts as "empty" for row skipping.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl RawValue {
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Text(s)   => s.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }

    /// Returns the value if it is a finite number.
    pub fn to_finite(&self) -> Option<f64> {
        let v = match self {
            RawValue::Text(s)   => s.trim().parse::<f64>().ok()?,
            RawValue::Number(v) => *v,
        };
        v.is_finite().then_some(v)
    }

    fn describe(&self) -> String {
        match self {
            RawValue::Text(s)   => s.clone(),
            RawValue::Number(v) => v.to_string(),
        }
    }
}

impl From<&str>   for RawValue { fn from(v: &str)   -> Self { RawValue::Text(v.to_owned()) } }
impl From<String> for RawValue { fn from(v: String) -> Self { RawValue::Text(v) } }
impl From<f64>    for RawValue { fn from(v: f64)    -> Self { RawValue::Number(v) } }


/// Validated, x-sorted sequence of points with distinct `x` values. `n >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validates, sorts and checks for duplicate `x`.
    ///
    /// # Errors
    /// ├ [`DifferentiationError::NoPoints`] if `points` is empty
    /// ├ [`DifferentiationError::InvalidNumber`] if any coordinate is non-finite
    /// └ [`DifferentiationError::DuplicateX`] on the first repeated `x` after sorting
    pub fn new(mut points: Vec<Point>) -> Result<Self, DifferentiationError> {
        if points.is_empty() {
            return Err(DifferentiationError::NoPoints);
        }
        for (row, p) in points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(DifferentiationError::InvalidNumber { row, axis: Axis::X, got: p.x.to_string() });
            }
            if !p.y.is_finite() {
                return Err(DifferentiationError::InvalidNumber { row, axis: Axis::Y, got: p.y.to_string() });
            }
        }

        points.sort_by(|a, b| a.x.total_cmp(&b.x));

        for pair in points.windows(2) {
            if pair[0].x == pair[1].x {
                return Err(DifferentiationError::DuplicateX { x: pair[0].x });
            }
        }

        trace!(n = points.len(), "point set validated");
        Ok(Self { points })
    }

    /// Builds a point set from parallel `x` and `y` slices.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, DifferentiationError> {
        if xs.len() != ys.len() {
            return Err(DifferentiationError::UnequalLength { x_len: xs.len(), y_len: ys.len() });
        }
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| Point { x, y }).collect())
    }

    // getters
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }
    pub fn xs(&self) -> Vec<f64> { self.points.iter().map(|p| p.x).collect() }
    pub fn ys(&self) -> Vec<f64> { self.points.iter().map(|p| p.y).collect() }

    /// Index of the point whose `x` equals `x` exactly. No tolerance.
    pub fn position(&self, x: f64) -> Option<usize> {
        self.points.iter().position(|p| p.x == x)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}


/// Parses rows of raw `(x, y)` fields into a [`PointSet`].
///
/// # Behavior
/// ├ rows where both fields are blank are skipped
/// ├ every other row must have two finite numeric fields
/// └ the surviving points go through [`PointSet::new`]
///
/// `row` in errors is the zero-based position in `rows`, skipped rows included.
pub fn parse_points<I, A, B>(rows: I) -> Result<PointSet, DifferentiationError>
where
    I: IntoIterator<Item = (A, B)>,
    A: Into<RawValue>,
    B: Into<RawValue>,
{
    let mut points = Vec::new();
    for (row, (x_raw, y_raw)) in rows.into_iter().enumerate() {
        let x_raw: RawValue = x_raw.into();
        let y_raw: RawValue = y_raw.into();

        if x_raw.is_blank() && y_raw.is_blank() {
            continue;
        }

        let x = x_raw.to_finite().ok_or_else(|| DifferentiationError::InvalidNumber {
            row, axis: Axis::X, got: x_raw.describe(),
        })?;
        let y = y_raw.to_finite().ok_or_else(|| DifferentiationError::InvalidNumber {
            row, axis: Axis::Y, got: y_raw.describe(),
        })?;

        points.push(Point { x, y });
    }

    PointSet::new(points)
}


/// Parses the legacy `"x1,y1;x2,y2;..."` format into a [`PointSet`].
///
/// Empty segments (e.g. a trailing `;`) are skipped. A segment that is not
/// exactly one `x,y` pair is a [`DifferentiationError::MalformedPair`].
pub fn parse_points_delimited(input: &str) -> Result<PointSet, DifferentiationError> {
    let mut rows = Vec::new();
    for (row, segment) in input.split(';').enumerate() {
        // kept as a blank row so error rows line up with segment positions
        if segment.trim().is_empty() {
            rows.push(("", ""));
            continue;
        }
        match segment.split_once(',') {
            Some((x, y)) if !y.contains(',') => rows.push((x, y)),
            _ => {
                return Err(DifferentiationError::MalformedPair { row, got: segment.trim().to_owned() });
            }
        }
    }

    parse_points(rows)
}


/// Parses the node at which a derivative is requested.
pub fn parse_node(raw: impl Into<RawValue>) -> Result<f64, DifferentiationError> {
    let raw: RawValue = raw.into();
    raw.to_finite().ok_or_else(|| DifferentiationError::InvalidNode { got: raw.describe() })
}
