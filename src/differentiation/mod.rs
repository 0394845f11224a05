// common helpers 
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod points;
pub mod report;

// algorithms 
pub mod first;
pub mod second;

pub use config::DerivativeCfg;
pub use points::{parse_node, parse_points, parse_points_delimited, Point, PointSet, RawValue};
