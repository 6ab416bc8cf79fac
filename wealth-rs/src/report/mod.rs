//! Read-only consumers of a model and of its collected records.
//!
//! Nothing in here mutates a model: functions take records or agent slices
//! and produce tables, statistics, CSV output or ASCII renderings.
mod ascii_plot;
mod map;
mod summary;
mod writers;

pub use ascii_plot::*;
pub use map::*;
pub use summary::*;
pub use writers::*;
