use super::{Agent, Id, Seizure};
use crate::{
    space::{Grid, Located, Pos},
    Wealth,
};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// The agent of the wealth model: an id, a balance and a cell.
///
/// Ordinary agents are stationary and never act. The privileged agent seizes
/// the wealth of one random Moore neighbor at each activation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct WealthAgent {
    id: Id,
    privileged: bool,
    wealth: Wealth,
    pos: Option<Pos>,
}

impl WealthAgent {
    /// Create an ordinary agent with the given wealth.
    pub fn new(id: Id, wealth: Wealth) -> Self {
        WealthAgent {
            id,
            privileged: false,
            wealth,
            pos: None,
        }
    }

    /// Create the privileged agent.
    pub fn new_rich(id: Id, wealth: Wealth) -> Self {
        WealthAgent {
            privileged: true,
            ..WealthAgent::new(id, wealth)
        }
    }

    /// Pick the victim of a seizure among the current neighbors, if any.
    pub fn choose_victim<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Option<Id> {
        let pos = self.pos?;
        let neighbors = grid.neighbors_of(pos, false);
        neighbors.choose(rng).copied()
    }
}

impl Located for WealthAgent {
    fn id(&self) -> Id {
        self.id
    }

    fn pos(&self) -> Option<Pos> {
        self.pos
    }

    fn set_pos(&mut self, pos: Pos) {
        self.pos = Some(pos);
    }
}

impl Agent for WealthAgent {
    fn wealth(&self) -> Wealth {
        self.wealth
    }

    fn set_wealth(&mut self, value: Wealth) -> &mut Self {
        self.wealth = value;
        return self;
    }

    fn is_privileged(&self) -> bool {
        self.privileged
    }

    fn step<R: Rng>(&mut self, grid: &Grid, rng: &mut R) -> Option<Seizure> {
        if !self.privileged {
            return None;
        }
        self.choose_victim(grid, rng)
            .filter(|&victim| victim != self.id)
            .map(|victim| Seizure {
                taker: self.id,
                victim,
            })
    }
}
