use super::{Agent, Id, Seizure};
use crate::Wealth;
use log::trace;

/// The population trait describes the arena of agents owned by a model.
///
/// Agents are stored contiguously and an agent's [`Id`] is its position in the
/// arena. Lookups by id are therefore plain indexing.
pub trait Population {
    type Agent: Agent;

    /// Count the population size.
    fn count(&self) -> usize;

    /// Get an agent by id.
    fn get_agent(&self, id: Id) -> Option<&Self::Agent>;

    /// Get a mutable reference to an agent by id.
    fn get_agent_mut(&mut self, id: Id) -> Option<&mut Self::Agent>;

    /// Borrow two distinct agents mutably at the same time.
    ///
    /// Return None if i == j or if any of the ids is missing.
    fn get_pair_mut(&mut self, i: Id, j: Id) -> Option<(&mut Self::Agent, &mut Self::Agent)>;

    /// Apply function to all agents of population. Function receives the Id
    /// and reference to the agent.
    fn each_agent<F>(&self, f: F)
    where
        F: FnMut(Id, &Self::Agent);

    /// Sum of the wealth of all agents.
    fn total_wealth(&self) -> Wealth {
        let mut total = 0;
        self.each_agent(|_, ag| total += ag.wealth());
        return total;
    }

    /// Collect the wealth of every agent in id order.
    fn wealths(&self) -> Vec<Wealth> {
        let mut out = Vec::with_capacity(self.count());
        self.each_agent(|_, ag| out.push(ag.wealth()));
        return out;
    }

    /// Apply a seizure: the victim's whole balance goes to the taker and the
    /// victim is left with zero.
    ///
    /// Return the amount moved, or None when the seizure names the same agent
    /// twice or an unknown id. In that case nothing changes.
    fn seize(&mut self, seizure: Seizure) -> Option<Wealth> {
        let (taker, victim) = self.get_pair_mut(seizure.taker, seizure.victim)?;
        let amount = victim.wealth();
        victim.set_wealth(0);
        taker.set_wealth(taker.wealth() + amount);
        trace!(
            "agent {} seized {} from agent {}",
            seizure.taker,
            amount,
            seizure.victim
        );
        return Some(amount);
    }
}

/////////////////////////////////////////////////////////////////////////////
// Implementations
/////////////////////////////////////////////////////////////////////////////

impl<A: Agent> Population for Vec<A> {
    type Agent = A;

    fn count(&self) -> usize {
        self.len()
    }

    fn get_agent(&self, id: Id) -> Option<&A> {
        self.get(id)
    }

    fn get_agent_mut(&mut self, id: Id) -> Option<&mut A> {
        self.get_mut(id)
    }

    fn get_pair_mut(&mut self, i: Id, j: Id) -> Option<(&mut A, &mut A)> {
        if i == j || i.max(j) >= self.len() {
            return None;
        }
        if i < j {
            let (head, tail) = self.split_at_mut(j);
            Some((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.split_at_mut(i);
            Some((&mut tail[0], &mut head[j]))
        }
    }

    fn each_agent<F>(&self, f: F)
    where
        F: FnMut(Id, &A),
    {
        let mut g = f;
        for (id, ag) in self.iter().enumerate() {
            g(id, ag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WealthAgent;

    fn population() -> Vec<WealthAgent> {
        vec![
            WealthAgent::new(0, 1),
            WealthAgent::new(1, 3),
            WealthAgent::new_rich(2, 20),
        ]
    }

    #[test]
    fn pair_borrow_rejects_aliasing() {
        let mut pop = population();
        assert!(pop.get_pair_mut(1, 1).is_none());
        assert!(pop.get_pair_mut(0, 3).is_none());

        let (a, b) = pop.get_pair_mut(2, 0).unwrap();
        assert_eq!((a.wealth(), b.wealth()), (20, 1));
    }

    #[test]
    fn seizure_moves_the_whole_balance() {
        let mut pop = population();
        let moved = pop.seize(Seizure {
            taker: 2,
            victim: 1,
        });
        assert_eq!(moved, Some(3));
        assert_eq!(pop.wealths(), vec![1, 0, 23]);
        assert_eq!(pop.total_wealth(), 24);

        // A broke victim leaves everything unchanged.
        assert_eq!(pop.seize(Seizure { taker: 2, victim: 1 }), Some(0));
        assert_eq!(pop.wealths(), vec![1, 0, 23]);
    }

    #[test]
    fn self_seizure_is_rejected() {
        let mut pop = population();
        assert_eq!(pop.seize(Seizure { taker: 2, victim: 2 }), None);
        assert_eq!(pop.total_wealth(), 24);
    }
}
