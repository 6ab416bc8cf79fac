use crate::{
    prelude::{Agent, Grid},
    Wealth,
};
use ndarray::prelude::*;

/// Total wealth held in each cell, indexed as `map[[y, x]]`.
pub fn wealth_map<A: Agent>(grid: &Grid, agents: &[A]) -> Array2<Wealth> {
    let mut map = Array2::zeros((grid.height(), grid.width()));
    for ag in agents {
        if let Some(pos) = ag.pos() {
            if grid.contains(pos) {
                map[[pos.y, pos.x]] += ag.wealth();
            }
        }
    }
    return map;
}

/// Number of agents in each cell, indexed as `map[[y, x]]`.
pub fn occupancy_map(grid: &Grid) -> Array2<usize> {
    Array2::from_shape_fn((grid.height(), grid.width()), |(y, x)| {
        grid.agents_at((x, y).into()).len()
    })
}

/// Render the grid one row per line, y = 0 on top.
///
/// `R` marks the cell of a privileged agent, `o` a cell holding wealth, `0` a
/// cell whose occupants are all broke and `.` an empty cell.
pub fn render_ascii_map<A: Agent>(grid: &Grid, agents: &[A]) -> String {
    let wealth = wealth_map(grid, agents);
    let occupancy = occupancy_map(grid);
    let mut rich = Array2::from_elem((grid.height(), grid.width()), false);
    for ag in agents.iter().filter(|ag| ag.is_privileged()) {
        if let Some(pos) = ag.pos() {
            if grid.contains(pos) {
                rich[[pos.y, pos.x]] = true;
            }
        }
    }

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = if rich[[y, x]] {
                'R'
            } else if occupancy[[y, x]] == 0 {
                '.'
            } else if wealth[[y, x]] == 0 {
                '0'
            } else {
                'o'
            };
            out.push(c);
        }
        out.push('\n');
    }
    return out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn model() -> WealthModel {
        ModelBuilder::new()
            .size(4, 3)
            .agents(3, 2)
            .layout(vec![(0, 0), (3, 2), (3, 2), (1, 1)])
            .seed(0)
            .build()
            .unwrap()
    }

    #[test]
    fn map_sums_per_cell() {
        let model = model();
        let map = wealth_map(model.grid(), model.agents());
        assert_eq!(map.dim(), (3, 4));
        assert_eq!(map[[0, 0]], 2);
        assert_eq!(map[[2, 3]], 4);
        assert_eq!(map[[1, 1]], 20);
        assert_eq!(map.sum(), model.total_wealth());

        let occupancy = occupancy_map(model.grid());
        assert_eq!(occupancy[[2, 3]], 2);
        assert_eq!(occupancy.sum(), 4);
    }

    #[test]
    fn ascii_rendering() {
        let mut model = model();
        assert_eq!(
            render_ascii_map(model.grid(), model.agents()),
            "o...\n.R..\n...o\n"
        );

        // (0, 0) is the only occupied cell next to the rich agent.
        model.step();
        assert_eq!(
            render_ascii_map(model.grid(), model.agents()),
            "0...\n.R..\n...o\n"
        );
    }
}
