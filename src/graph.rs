use itertools::Itertools;

use crate::Cell;

/// Connectivity of the searched grid.
///
/// The adapter decides which cells are traversable. The order in which [find_neighbors](Self::find_neighbors)
/// yields cells fixes the exploration order of depth- and breadth-first search and the
/// tie-breaking of A* among equally promising neighbours.
pub trait SearchGraph {
    type Neighbors: IntoIterator<Item = Cell>;

    /// Traversable cells adjacent to `cell`.
    fn find_neighbors(&self, cell: &Cell) -> Self::Neighbors;

    /// Checks that every step of `path` moves to a neighbour. Empty and single-cell paths are
    /// trivially valid.
    fn is_valid_path(&self, path: &[Cell]) -> bool {
        path.iter()
            .tuple_windows()
            .all(|(from, to)| self.find_neighbors(from).into_iter().any(|n| n == *to))
    }
}
