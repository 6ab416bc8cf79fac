use super::{
    Agent, Collector, GrowableReporter, Id, Population, RandomActivation, Record, Reporter,
    ReporterList, Scheduler, WealthAgent,
};
use crate::{
    config::ModelConfig,
    error::{Result, SimError},
    space::{Grid, Located},
    Time, Wealth,
};
use getset::{CopyGetters, Getters};
use log::{debug, info};
use rand::prelude::{SeedableRng, SmallRng};
use std::fmt::{self, Debug};

/// Life cycle of a model. It leaves `Constructed` on the first step and stays
/// `Running` for as long as the driver keeps stepping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Constructed,
    Running,
}

/// The wealth model stores the grid, the population of agents and the objects
/// controlling their dynamics.
///
/// Agents live in a single arena (`population`) and are referred to by their
/// index everywhere else: the grid cells and the scheduler only hold ids.
#[derive(Getters, CopyGetters)]
pub struct WealthModel {
    #[getset(get = "pub")]
    grid: Grid,
    #[getset(get = "pub")]
    population: Vec<WealthAgent>,
    #[getset(get = "pub")]
    schedule: RandomActivation,
    #[getset(get = "pub")]
    collector: Collector,
    reporters: ReporterList<Vec<WealthAgent>>,

    #[getset(get_copy = "pub")]
    config: ModelConfig,
    /// Id of the privileged agent.
    #[getset(get_copy = "pub")]
    rich: Id,
    /// Number of completed steps.
    #[getset(get_copy = "pub")]
    time: Time,
    #[getset(get_copy = "pub")]
    phase: Phase,
    /// Number of seizures applied since construction.
    #[getset(get_copy = "pub")]
    transfers: usize,
    rng: SmallRng,
}

impl WealthModel {
    /// Create a new model, placing every agent on a uniformly random cell.
    ///
    /// The rng is seeded from the configuration when it names a seed and from
    /// system entropy otherwise.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let rng = match config.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Like new(), but draws every random number from the given generator.
    pub fn with_rng(config: &ModelConfig, rng: SmallRng) -> Result<Self> {
        let mut model = Self::empty(config, rng)?;

        for _ in 0..config.n_agents() {
            let pos = model.grid.random_pos(&mut model.rng);
            model.spawn(false, config.agent_wealth(), pos.x as i64, pos.y as i64)?;
        }
        let pos = model.grid.random_pos(&mut model.rng);
        model.rich = model.spawn(true, config.rich_wealth(), pos.x as i64, pos.y as i64)?;

        model.log_construction();
        Ok(model)
    }

    /// Create a model with explicit positions: one entry per ordinary agent,
    /// in id order, followed by the position of the rich agent.
    pub fn with_layout(config: &ModelConfig, rng: SmallRng, layout: &[(i64, i64)]) -> Result<Self> {
        let (&(rx, ry), ordinary) = layout
            .split_last()
            .ok_or_else(|| SimError::invalid("layout must not be empty"))?;
        if layout.len() != config.population_size() {
            return Err(SimError::invalid(format!(
                "layout has {} positions for {} agents",
                layout.len(),
                config.population_size()
            )));
        }

        let mut model = Self::empty(config, rng)?;
        for &(x, y) in ordinary {
            model.spawn(false, config.agent_wealth(), x, y)?;
        }
        model.rich = model.spawn(true, config.rich_wealth(), rx, ry)?;

        model.log_construction();
        Ok(model)
    }

    fn empty(config: &ModelConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        Ok(WealthModel {
            grid: Grid::new(config.width(), config.height(), config.topology())?,
            population: Vec::with_capacity(config.population_size()),
            schedule: RandomActivation::new(),
            collector: Collector::new(),
            reporters: ReporterList::new(),
            config: *config,
            rich: config.n_agents(),
            time: 0,
            phase: Phase::Constructed,
            transfers: 0,
            rng,
        })
    }

    /// Create an agent, place it on the grid and register it with the
    /// scheduler. Return its id.
    fn spawn(&mut self, privileged: bool, wealth: Wealth, x: i64, y: i64) -> Result<Id> {
        let id = self.population.len();
        let mut agent = if privileged {
            WealthAgent::new_rich(id, wealth)
        } else {
            WealthAgent::new(id, wealth)
        };
        self.grid.place(&mut agent, x, y)?;
        self.schedule.add(id)?;
        self.population.push(agent);
        return Ok(id);
    }

    fn log_construction(&self) {
        info!(
            "model: {}x{} {:?} grid, {} agents, rich agent {} at {:?} with wealth {}",
            self.grid.width(),
            self.grid.height(),
            self.grid.topology(),
            self.population.len(),
            self.rich,
            self.rich_agent().pos(),
            self.rich_agent().wealth(),
        );
    }

    /// Run a single step: snapshot the population, then activate every agent
    /// once in random order.
    pub fn step(&mut self) -> &mut Self {
        if self.phase == Phase::Constructed {
            self.phase = Phase::Running;
        }

        self.collector.snapshot(self.time, &self.population);
        self.reporters.process(self.time, &self.population);

        let seizures = self
            .schedule
            .step(&mut self.population, &self.grid, &mut self.rng);
        self.transfers += seizures;

        debug!(
            "step [{}]: {} seizures, rich wealth = {}, total wealth = {}",
            self.time,
            seizures,
            self.rich_agent().wealth(),
            self.total_wealth()
        );
        self.time += 1;
        return self;
    }

    /// Run simulation for the given number of steps.
    pub fn run(&mut self, n_steps: usize) -> &mut Self {
        for _ in 0..n_steps {
            self.step();
        }
        return self;
    }

    /// Set seed for random number generator
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = SmallRng::seed_from_u64(seed);
        return self;
    }

    /// Register a reporter executed every n_steps, before the activations of
    /// the step.
    pub fn register_reporter(
        &mut self,
        n_steps: usize,
        reporter: Box<dyn Reporter<Vec<WealthAgent>>>,
    ) -> &mut Self {
        self.reporters.register_reporter(n_steps, reporter);
        return self;
    }

    /// Borrows slice with all agents
    pub fn agents(&self) -> &[WealthAgent] {
        self.population.as_slice()
    }

    /// Get agent by id.
    pub fn agent(&self, id: Id) -> Option<&WealthAgent> {
        self.population.get(id)
    }

    /// The privileged agent.
    pub fn rich_agent(&self) -> &WealthAgent {
        &self.population[self.rich]
    }

    /// Population size, rich agent included.
    pub fn count(&self) -> usize {
        self.population.len()
    }

    pub fn total_wealth(&self) -> Wealth {
        self.population.total_wealth()
    }

    /// Every snapshot record collected so far.
    pub fn records(&self) -> &[Record] {
        self.collector.all_records()
    }
}

impl Debug for WealthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WealthModel")
            .field("grid", &self.grid)
            .field("population", &self.population)
            .field("rich", &self.rich)
            .field("time", &self.time)
            .field("phase", &self.phase)
            .field("transfers", &self.transfers)
            .field("reporters", &self.reporters.len())
            .finish()
    }
}
