//! Time-dependent hydraulic input.
//!
//! The storm is a sequence of contiguous [`TimeStep`]s, each carrying the
//! water level and wave conditions acting during that interval.

mod time_step;

pub use time_step::{TimeStep, check_contiguity};
