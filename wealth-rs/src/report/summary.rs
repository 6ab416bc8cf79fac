use crate::{
    prelude::{Agent, Id, Pos, Record},
    Real, Time, Wealth,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final state of one agent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: Id,
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub wealth: Wealth,
    pub privileged: bool,
}

impl AgentSummary {
    pub fn pos(&self) -> Option<Pos> {
        Some(Pos::new(self.x?, self.y?))
    }
}

/// Sum of wealth per step, in increasing step order.
pub fn total_wealth_by_step(records: &[Record]) -> Vec<(Time, Wealth)> {
    let mut totals = BTreeMap::new();
    for r in records {
        *totals.entry(r.step).or_insert(0) += r.wealth;
    }
    totals.into_iter().collect()
}

/// Wealth series of a single agent, one entry per snapshot it appears in.
pub fn agent_history(records: &[Record], agent: Id) -> Vec<(Time, Wealth)> {
    records
        .iter()
        .filter(|r| r.agent == agent)
        .map(|r| (r.step, r.wealth))
        .collect()
}

/// Position, wealth and privilege of every agent, in id order.
pub fn final_distribution<A: Agent>(agents: &[A]) -> Vec<AgentSummary> {
    agents
        .iter()
        .map(|ag| {
            let pos = ag.pos();
            AgentSummary {
                id: ag.id(),
                x: pos.map(|p| p.x),
                y: pos.map(|p| p.y),
                wealth: ag.wealth(),
                privileged: ag.is_privileged(),
            }
        })
        .collect()
}

/// Gini coefficient of a wealth distribution.
///
/// Zero for perfect equality, approaching one when a single holder owns
/// everything. Empty and all-zero distributions count as equal.
pub fn gini(values: &[Wealth]) -> Real {
    let n = values.len();
    let total: Wealth = values.iter().sum();
    if n == 0 || total == 0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let weighted: Real = sorted
        .iter()
        .enumerate()
        .map(|(i, &w)| (i + 1) as Real * w as Real)
        .sum();
    let n = n as Real;
    return 2.0 * weighted / (n * total as Real) - (n + 1.0) / n;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use assert_approx_eq::assert_approx_eq;

    fn rec(step: Time, agent: Id, wealth: Wealth) -> Record {
        Record { step, agent, wealth }
    }

    #[test]
    fn totals_grouped_by_step() {
        let records = vec![
            rec(1, 0, 2),
            rec(0, 0, 1),
            rec(0, 1, 20),
            rec(1, 1, 19),
            rec(2, 0, 0),
        ];
        assert_eq!(
            total_wealth_by_step(&records),
            vec![(0, 21), (1, 21), (2, 0)]
        );
        assert!(total_wealth_by_step(&[]).is_empty());
    }

    #[test]
    fn history_of_one_agent() {
        let records = vec![rec(0, 0, 1), rec(0, 1, 20), rec(1, 0, 0), rec(1, 1, 21)];
        assert_eq!(agent_history(&records, 1), vec![(0, 20), (1, 21)]);
    }

    #[test]
    fn distribution_of_a_model() {
        let model = ModelBuilder::new()
            .agents(2, 1)
            .layout(vec![(0, 0), (3, 4), (7, 7)])
            .seed(0)
            .build()
            .unwrap();
        let dist = final_distribution(model.agents());
        assert_eq!(dist.len(), 3);
        assert_eq!(dist[1].pos(), Some(Pos::new(3, 4)));
        assert_eq!(dist[2].wealth, 20);
        assert!(dist[2].privileged);
        assert!(!dist[0].privileged);
        assert_eq!(final_distribution::<WealthAgent>(&[WealthAgent::new(0, 3)])[0].pos(), None);
    }

    #[test]
    fn gini_extremes() {
        assert_approx_eq!(gini(&[]), 0.0);
        assert_approx_eq!(gini(&[0, 0, 0]), 0.0);
        assert_approx_eq!(gini(&[5, 5, 5, 5]), 0.0);
        assert_approx_eq!(gini(&[0, 0, 0, 12]), 0.75);
        assert_approx_eq!(gini(&[1, 2, 3, 4]), 0.25);
    }

    #[test]
    fn gini_grows_with_concentration() {
        let equal = gini(&[1; 11]);
        let reference = gini(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 20]);
        let drained = gini(&[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 25]);
        assert!(equal < reference);
        assert!(reference < drained);
    }
}
