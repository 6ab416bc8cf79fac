//! A small spatial agent-based model of wealth seizure.
//!
//! A fixed population of agents sits on a 2-D grid. Once per step every agent
//! is activated in random order and the single privileged ("rich") agent takes
//! the whole wealth of one of its Moore neighbors. The crate is organized as a
//! stepping engine ([`sim`] and [`space`]) plus read-only consumers of the
//! collected data ([`report`] and [`batch`]).
pub mod batch;
pub mod config;
pub mod error;
pub mod prelude;
pub mod report;
pub mod sim;
pub mod space;

pub use crate::config::{ModelConfig, RunConfig};
pub use crate::error::{Result, SimError};

/// Basic representation of time. Each unit corresponds to one simulation
/// step.
pub type Time = u32;

/// Wealth held by an agent. Unsigned, so a negative balance cannot be
/// represented.
pub type Wealth = u64;

/// Base Real type used by this crate for aggregated statistics.
pub type Real = f64;
