use super::{Agent, Id, Population};
use crate::{
    error::{Result, SimError},
    space::Grid,
};
use log::trace;
use rand::prelude::{Rng, SliceRandom};
use std::collections::HashSet;

/// The scheduler trait decides in which order registered agents are activated
/// during a step.
///
/// Agents are activated one at a time. A seizure returned by an agent is
/// applied before the next agent runs, so later activations observe every
/// earlier mutation of the same step.
pub trait Scheduler {
    /// Register an agent. Registering the same id twice is an error.
    fn add(&mut self, id: Id) -> Result<()>;

    /// Registered ids, in registration order.
    fn ids(&self) -> &[Id];

    /// Number of completed steps.
    fn steps(&self) -> usize;

    /// Order in which agents are activated in the next step. Every registered
    /// id appears exactly once.
    fn activation_order<R: Rng>(&mut self, rng: &mut R) -> Vec<Id>;

    /// Called once at the end of every step.
    fn on_step_finish(&mut self);

    /// Number of registered agents.
    fn count(&self) -> usize {
        self.ids().len()
    }

    /// Check if id is registered.
    fn contains(&self, id: Id) -> bool {
        self.ids().contains(&id)
    }

    /// Activate every registered agent exactly once and apply the seizures
    /// they return. Return the number of seizures applied.
    fn step<P, R>(&mut self, population: &mut P, grid: &Grid, rng: &mut R) -> usize
    where
        P: Population,
        R: Rng,
    {
        let mut seizures = 0;
        for id in self.activation_order(rng) {
            let action = match population.get_agent_mut(id) {
                Some(agent) => agent.step(grid, rng),
                None => {
                    trace!("agent {} is registered but not in population", id);
                    continue;
                }
            };
            if let Some(seizure) = action {
                if population.seize(seizure).is_some() {
                    seizures += 1;
                }
            }
        }
        self.on_step_finish();
        return seizures;
    }
}

/// Registration book shared by the concrete schedulers.
#[derive(Debug, Clone, Default, PartialEq)]
struct Registry {
    ids: Vec<Id>,
    known: HashSet<Id>,
}

impl Registry {
    fn add(&mut self, id: Id) -> Result<()> {
        if !self.known.insert(id) {
            return Err(SimError::DuplicateRegistration(id));
        }
        self.ids.push(id);
        Ok(())
    }
}

/// Activate agents in a new uniformly random order at every step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomActivation {
    registry: Registry,
    n_iter: usize,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for RandomActivation {
    fn add(&mut self, id: Id) -> Result<()> {
        self.registry.add(id)
    }

    fn ids(&self) -> &[Id] {
        self.registry.ids.as_slice()
    }

    fn steps(&self) -> usize {
        self.n_iter
    }

    fn activation_order<R: Rng>(&mut self, rng: &mut R) -> Vec<Id> {
        let mut order = self.registry.ids.clone();
        order.shuffle(rng);
        return order;
    }

    fn on_step_finish(&mut self) {
        self.n_iter += 1;
    }
}

/// Activate agents in registration order. Useful for reproducing a run
/// without depending on the shuffle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequentialActivation {
    registry: Registry,
    n_iter: usize,
}

impl SequentialActivation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for SequentialActivation {
    fn add(&mut self, id: Id) -> Result<()> {
        self.registry.add(id)
    }

    fn ids(&self) -> &[Id] {
        self.registry.ids.as_slice()
    }

    fn steps(&self) -> usize {
        self.n_iter
    }

    fn activation_order<R: Rng>(&mut self, _rng: &mut R) -> Vec<Id> {
        self.registry.ids.clone()
    }

    fn on_step_finish(&mut self) {
        self.n_iter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sim::{Seizure, WealthAgent},
        space::{Located, Pos},
        Wealth,
    };
    use rand::prelude::{SeedableRng, SmallRng};

    /// Test double that counts its own activations.
    #[derive(Debug, Clone)]
    struct CountingAgent {
        id: Id,
        wealth: Wealth,
        pos: Option<Pos>,
        calls: usize,
    }

    impl Located for CountingAgent {
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

    impl Agent for CountingAgent {
        fn wealth(&self) -> Wealth {
            self.wealth
        }
        fn set_wealth(&mut self, value: Wealth) -> &mut Self {
            self.wealth = value;
            self
        }
        fn step<R: Rng>(&mut self, _grid: &Grid, _rng: &mut R) -> Option<Seizure> {
            self.calls += 1;
            None
        }
    }

    fn counting_population(n: usize) -> Vec<CountingAgent> {
        (0..n)
            .map(|id| CountingAgent {
                id,
                wealth: 1,
                pos: None,
                calls: 0,
            })
            .collect()
    }

    #[test]
    fn duplicate_registration_is_an_error() {
        let mut schedule = RandomActivation::new();
        schedule.add(3).unwrap();
        assert_eq!(schedule.add(3), Err(SimError::DuplicateRegistration(3)));
        assert_eq!(schedule.ids(), &[3]);

        let mut schedule = SequentialActivation::new();
        schedule.add(0).unwrap();
        assert!(schedule.add(0).is_err());
        assert_eq!(schedule.count(), 1);
    }

    #[test]
    fn every_agent_activates_exactly_once_per_step() {
        let grid = Grid::torus(4, 4).unwrap();
        let mut pop = counting_population(25);
        let mut schedule = RandomActivation::new();
        for id in 0..25 {
            schedule.add(id).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(7);

        for k in 1..=40 {
            schedule.step(&mut pop, &grid, &mut rng);
            assert!(pop.iter().all(|ag| ag.calls == k));
        }
        assert_eq!(schedule.steps(), 40);
    }

    #[test]
    fn random_order_is_a_fresh_permutation() {
        let mut schedule = RandomActivation::new();
        for id in 0..10 {
            schedule.add(id).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(1);
        let orders: Vec<Vec<Id>> = (0..20)
            .map(|_| schedule.activation_order(&mut rng))
            .collect();

        for order in &orders {
            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        }
        assert!(orders.iter().any(|o| o != &orders[0]));
        assert_eq!(schedule.ids(), &(0..10).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn sequential_order_follows_registration() {
        let mut schedule = SequentialActivation::new();
        for &id in &[4, 1, 3] {
            schedule.add(id).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(schedule.activation_order(&mut rng), vec![4, 1, 3]);
    }

    #[test]
    fn seizures_are_visible_to_later_activations() {
        let mut grid = Grid::torus(5, 5).unwrap();
        let mut pop = vec![
            WealthAgent::new(0, 4),
            WealthAgent::new_rich(1, 10),
            WealthAgent::new(2, 2),
        ];
        grid.place(&mut pop[0], 1, 1).unwrap();
        grid.place(&mut pop[1], 2, 2).unwrap();
        grid.place(&mut pop[2], 4, 4).unwrap();

        let mut schedule = SequentialActivation::new();
        for id in 0..3 {
            schedule.add(id).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(schedule.step(&mut pop, &grid, &mut rng), 1);
        assert_eq!(pop.wealths(), vec![0, 14, 2]);
        assert_eq!(pop.total_wealth(), 16);
    }
}
