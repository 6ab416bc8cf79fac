//! Configuration of a model and of a driver run.
//!
//! Both structs deserialize from TOML with every field optional; missing
//! fields fall back to the reference run: a 10x10 torus, 10 ordinary agents
//! with wealth 1, a rich agent with wealth 20 and 100 steps.
use crate::{
    error::{Result, SimError},
    space::Topology,
    Wealth,
};
use getset::{CopyGetters, Getters, Setters};
use serde::{Deserialize, Serialize};

/// Construction parameters of a [`WealthModel`](crate::sim::WealthModel).
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, CopyGetters, Setters)]
#[serde(default)]
#[getset(get_copy = "pub", set = "pub")]
pub struct ModelConfig {
    width: usize,
    height: usize,
    /// Number of ordinary agents. The rich agent comes on top of those.
    n_agents: usize,
    agent_wealth: Wealth,
    rich_wealth: Wealth,
    topology: Topology,
    seed: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            width: 10,
            height: 10,
            n_agents: 10,
            agent_wealth: 1,
            rich_wealth: 20,
            topology: Topology::Torus,
            seed: None,
        }
    }
}

impl ModelConfig {
    /// Check dimensions and population size.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.n_agents == 0 {
            return Err(SimError::invalid("population size must be positive"));
        }
        if self.checked_initial_wealth().is_none() {
            return Err(SimError::invalid(format!(
                "total initial wealth of {} x {} + {} does not fit in {} bits",
                self.n_agents,
                self.agent_wealth,
                self.rich_wealth,
                Wealth::BITS
            )));
        }
        Ok(())
    }

    /// Total number of agents, the rich one included.
    pub fn population_size(&self) -> usize {
        self.n_agents + 1
    }

    /// Initial wealth of the whole population.
    ///
    /// Saturates for configurations that fail validation.
    pub fn initial_wealth(&self) -> Wealth {
        self.checked_initial_wealth().unwrap_or(Wealth::MAX)
    }

    fn checked_initial_wealth(&self) -> Option<Wealth> {
        self.agent_wealth
            .checked_mul(self.n_agents as Wealth)?
            .checked_add(self.rich_wealth)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: ModelConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Parameters of a full driver run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
#[serde(default)]
pub struct RunConfig {
    #[getset(get_copy = "pub", set = "pub")]
    steps: usize,
    #[getset(get_copy = "pub", set = "pub")]
    verbose: bool,
    /// Extra seeds for replicate runs executed after the main run.
    #[getset(get = "pub", set = "pub")]
    replicates: Vec<u64>,
    #[getset(get = "pub", set = "pub")]
    records_csv: Option<String>,
    #[getset(get = "pub", set = "pub")]
    totals_csv: Option<String>,
    #[getset(get = "pub", set = "pub")]
    distribution_csv: Option<String>,
    /// Kept last: TOML emits tables after plain values.
    #[getset(get_copy = "pub", set = "pub")]
    model: ModelConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            steps: 100,
            verbose: false,
            replicates: vec![],
            records_csv: None,
            totals_csv: None,
            distribution_csv: None,
            model: ModelConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        if self.steps == 0 {
            return Err(SimError::invalid("number of steps must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Model parameters live in a
    /// `[model]` table.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: RunConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
