mod grid;
pub use grid::*;

use crate::sim::Id;

/// Objects that occupy a cell of a [`Grid`].
///
/// The position is recorded on the object itself but only the grid should
/// change it, through [`Grid::place`]. That keeps the cell index and the
/// recorded positions consistent.
pub trait Located {
    /// Handle of the object in the population arena.
    fn id(&self) -> Id;

    /// Current cell or None if the object was never placed.
    fn pos(&self) -> Option<Pos>;

    /// Record a new cell. Called by the grid during placement.
    fn set_pos(&mut self, pos: Pos);
}
