pub use crate::{
    batch::{run_batch, RunSummary},
    config::{ModelConfig, RunConfig},
    error::{Result, SimError},
    report::{final_distribution, gini, total_wealth_by_step, AgentSummary},
    sim::{
        Agent, Collector, Id, ModelBuilder, Phase, Population, RandomActivation, Record,
        Reporter, Scheduler, Seizure, SequentialActivation, WealthAgent, WealthModel,
    },
    space::{Grid, Located, Pos, Topology},
    Real, Time, Wealth,
};
pub use rand::prelude::{SeedableRng, SmallRng};
