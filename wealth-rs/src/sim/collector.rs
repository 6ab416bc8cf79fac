use super::{Agent, Id, Population, Reporter};
use crate::{Time, Wealth};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Wealth of one agent at the start of one step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub step: Time,
    pub agent: Id,
    pub wealth: Wealth,
}

/// Append-only log of per-agent wealth snapshots.
///
/// Records are copied out of the population, so later mutation of an agent
/// never changes what was recorded. The collector does no aggregation; see
/// the `report` module for that.
#[derive(Debug, Clone, Default, PartialEq, CopyGetters)]
pub struct Collector {
    records: Vec<Record>,
    #[getset(get_copy = "pub")]
    n_snapshots: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record per agent of population, tagged with step.
    pub fn snapshot<P: Population>(&mut self, step: Time, population: &P) {
        self.records.reserve(population.count());
        let records = &mut self.records;
        population.each_agent(|id, ag| {
            records.push(Record {
                step,
                agent: id,
                wealth: ag.wealth(),
            })
        });
        self.n_snapshots += 1;
    }

    /// Every record, in the order it was appended: step-major, then agent
    /// order within a snapshot.
    pub fn all_records(&self) -> &[Record] {
        self.records.as_slice()
    }

    /// Records taken at the given step.
    pub fn records_at(&self, step: Time) -> &[Record] {
        let start = self.records.partition_point(|r| r.step < step);
        let end = self.records.partition_point(|r| r.step <= step);
        &self.records[start..end]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<P: Population> Reporter<P> for Collector {
    fn process(&mut self, n: Time, population: &P) {
        self.snapshot(n, population);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WealthAgent;

    #[test]
    fn records_are_taken_by_value() {
        let mut pop = vec![WealthAgent::new(0, 1), WealthAgent::new_rich(1, 20)];
        let mut collector = Collector::new();
        collector.snapshot(0, &pop);
        pop[0].set_wealth(0);
        pop[1].set_wealth(21);
        collector.snapshot(1, &pop);

        assert_eq!(
            collector.all_records(),
            &[
                Record { step: 0, agent: 0, wealth: 1 },
                Record { step: 0, agent: 1, wealth: 20 },
                Record { step: 1, agent: 0, wealth: 0 },
                Record { step: 1, agent: 1, wealth: 21 },
            ]
        );
        assert_eq!(collector.n_snapshots(), 2);
    }

    #[test]
    fn records_grouped_by_step() {
        let pop: Vec<WealthAgent> = (0..4).map(|id| WealthAgent::new(id, 1)).collect();
        let mut collector = Collector::new();
        for step in 0..5 {
            collector.process(step, &pop);
        }
        assert_eq!(collector.len(), 20);

        let at_three = collector.records_at(3);
        assert_eq!(at_three.len(), 4);
        assert!(at_three.iter().all(|r| r.step == 3));
        let ids: Vec<Id> = at_three.iter().map(|r| r.agent).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(collector.records_at(9).is_empty());
    }
}
