use super::Located;
use crate::{
    error::{Result, SimError},
    sim::Id,
};
use getset::CopyGetters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved cell of the grid.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Pos { x, y }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((x, y): (usize, usize)) -> Pos {
        Pos { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How coordinates outside the grid are treated.
///
/// A torus wraps every coordinate back into the grid. A bounded grid has hard
/// edges: neighborhoods are clipped and placements outside fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Torus,
    Bounded,
}

impl Default for Topology {
    fn default() -> Self {
        Topology::Torus
    }
}

/// A finite 2-D lattice where each cell holds any number of agents.
///
/// The grid does not own agents. Cells store the agents' [`Id`]s, which index
/// into the population arena owned by the model.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct Grid {
    #[getset(get_copy = "pub")]
    width: usize,
    #[getset(get_copy = "pub")]
    height: usize,
    #[getset(get_copy = "pub")]
    topology: Topology,
    cells: Vec<Vec<Id>>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize, topology: Topology) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let n_cells = width
            .checked_mul(height)
            .filter(|&n| n <= i64::MAX as usize)
            .ok_or_else(|| SimError::invalid(format!("grid of {}x{} cells is too large", width, height)))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(n_cells)
            .map_err(|_| SimError::invalid(format!("cannot allocate a {}x{} grid", width, height)))?;
        cells.resize_with(n_cells, Vec::new);
        Ok(Grid {
            width,
            height,
            topology,
            cells,
        })
    }

    /// Create an empty toroidal grid.
    pub fn torus(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, Topology::Torus)
    }

    #[inline(always)]
    fn idx(&self, pos: Pos) -> usize {
        pos.y * self.width + pos.x
    }

    /// Check if pos is a valid cell of this grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Resolve raw coordinates into a cell.
    ///
    /// On a torus this always succeeds. On a bounded grid it returns None for
    /// coordinates outside the grid.
    pub fn resolve(&self, x: i64, y: i64) -> Option<Pos> {
        let (w, h) = (self.width as i64, self.height as i64);
        match self.topology {
            Topology::Torus => Some(Pos::new(
                x.rem_euclid(w) as usize,
                y.rem_euclid(h) as usize,
            )),
            Topology::Bounded => ((0..w).contains(&x) && (0..h).contains(&y))
                .then(|| Pos::new(x as usize, y as usize)),
        }
    }

    /// Insert agent in the cell at (x, y) and record the resolved position on
    /// the agent.
    ///
    /// An agent that was already placed is removed from its previous cell
    /// first, so it is never indexed in two cells.
    pub fn place<A: Located>(&mut self, agent: &mut A, x: i64, y: i64) -> Result<Pos> {
        let pos = self.resolve(x, y).ok_or(SimError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;

        let id = agent.id();
        if let Some(old) = agent.pos().filter(|&p| self.contains(p)) {
            let k = self.idx(old);
            self.cells[k].retain(|&other| other != id);
        }
        let k = self.idx(pos);
        self.cells[k].push(id);
        agent.set_pos(pos);
        return Ok(pos);
    }

    /// Ids of the agents in the given cell, in placement order.
    pub fn agents_at(&self, pos: Pos) -> &[Id] {
        if !self.contains(pos) {
            return &[];
        }
        self.cells[self.idx(pos)].as_slice()
    }

    pub fn is_cell_empty(&self, pos: Pos) -> bool {
        self.agents_at(pos).is_empty()
    }

    /// Total number of agents placed on the grid.
    pub fn count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Draw a uniformly random cell.
    pub fn random_pos<R: Rng>(&self, rng: &mut R) -> Pos {
        Pos::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Cells of the Moore neighborhood around pos.
    ///
    /// Cells that fall outside a bounded grid are dropped. On small tori the
    /// wrapped offsets can repeat a cell or land back on pos; repeated cells
    /// are listed once and pos itself is only listed when include_center is
    /// set.
    pub fn neighborhood(&self, pos: Pos, include_center: bool) -> Vec<Pos> {
        let mut cells = Vec::with_capacity(9);
        if !self.contains(pos) {
            return cells;
        }
        let (x, y) = (pos.x as i64, pos.y as i64);

        for dy in -1..=1 {
            for dx in -1..=1 {
                if let Some(cell) = self.resolve(x + dx, y + dy) {
                    if cell == pos && !include_center {
                        continue;
                    }
                    if !cells.contains(&cell) {
                        cells.push(cell);
                    }
                }
            }
        }
        return cells;
    }

    /// Ids of every agent occupying the Moore neighborhood of pos.
    ///
    /// Agents sharing the cell at pos are excluded unless include_center is
    /// set. An empty neighborhood gives an empty vector.
    pub fn neighbors_of(&self, pos: Pos, include_center: bool) -> Vec<Id> {
        let mut out = vec![];
        for cell in self.neighborhood(pos, include_center) {
            out.extend_from_slice(self.agents_at(cell));
        }
        return out;
    }
}
