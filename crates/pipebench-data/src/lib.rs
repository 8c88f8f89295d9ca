//! Dataset model and file format for pipe-scaling benchmark results.
//!
//! A benchmark run is a grid of timings indexed by problem-size macro
//! (SMALL/MIDDLE/LARGE/EXTLARGE) and pipe count. Results move in and out of
//! the process through a plain `key=value` variables file; the value grammar
//! is deliberately restricted to numeric scalars and bracketed numeric lists.

pub mod axes;
pub mod dataset;
pub mod error;
pub mod literal;
pub mod vars;

pub use axes::{MacroSize, DEFAULT_PIPES};
pub use dataset::Dataset;
pub use error::{DatasetError, VarsError};
pub use literal::Value;
pub use vars::{parse_vars, read_vars_file, write_vars, write_vars_file};
