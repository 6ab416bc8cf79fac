mod agent;
mod builder;
mod collector;
mod model;
mod population;
mod reporter;
mod scheduler;
mod state;
pub use agent::*;
pub use builder::*;
pub use collector::*;
pub use model::*;
pub use population::*;
pub use reporter::*;
pub use scheduler::*;
pub use state::*;

/// Type alias describing agent handles. Handles index the population arena
/// owned by the model.
pub type Id = usize;
