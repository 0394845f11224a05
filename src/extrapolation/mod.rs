// common helpers 
pub mod config;
pub mod errors;
pub mod report;

// algorithms 
pub mod richardson;
pub mod tableau;

pub use config::RichardsonCfg;
pub use richardson::{central_difference, richardson, richardson_expr, richardson_fallible};
pub use tableau::richardson_tableau;
