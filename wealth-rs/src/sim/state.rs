use super::Id;
use crate::{space::Grid, space::Located, Wealth};
use rand::Rng;
use std::fmt::Debug;

/// Action returned by an agent's step: move all wealth from victim to taker.
///
/// Actions are applied by the scheduler right after the step that produced
/// them, so the next activation already sees the new balances.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Seizure {
    pub taker: Id,
    pub victim: Id,
}

/// Capability shared by every agent type a model can hold.
///
/// An agent reads its surroundings through the grid and the random number
/// generator it receives and reports what it wants to do as an optional
/// [`Seizure`]. It never touches other agents directly.
pub trait Agent: Located + Clone + Debug {
    /// Current wealth.
    fn wealth(&self) -> Wealth;

    /// Set wealth to the given value.
    fn set_wealth(&mut self, value: Wealth) -> &mut Self;

    /// True for the single agent allowed to seize its neighbors' wealth.
    fn is_privileged(&self) -> bool {
        false
    }

    /// Activate the agent once.
    fn step<R: Rng>(&mut self, grid: &Grid, rng: &mut R) -> Option<Seizure>;
}
