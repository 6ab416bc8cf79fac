//! Errors raised by the simulation engine.
//!
//! Every error is raised synchronously at the offending call and propagated
//! to the caller. The engine never retries or recovers internally.
use crate::sim::Id;

/// Errors that can occur while building or driving a model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// Placement outside the dimensions of a bounded grid.
    #[error("position ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// The same agent id was registered twice with a scheduler.
    #[error("agent {0} is already registered with the scheduler")]
    DuplicateRegistration(Id),

    /// Unusable dimensions, population or wealth totals, or an unreadable
    /// configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidConfiguration(msg.into())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::InvalidConfiguration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
