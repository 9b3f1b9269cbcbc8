use fxhash::FxHashMap;

use crate::{Cell, FxIndexMap, SearchError};

/// Bookkeeping of a single search call, kept after the call returns so it can be visualized.
///
/// Every solver resets the state on entry, so one value can be reused across calls.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Cell each discovered cell was reached from, [None] for the start. Iterates in discovery
    /// order.
    pub parent: FxIndexMap<Cell, Option<Cell>>,
    /// Best known number of steps from the start. Only A* writes it.
    pub distance: FxHashMap<Cell, u32>,
    /// Cells in the order they were expanded.
    pub visited_cells: Vec<Cell>,
}

impl SearchState {
    pub fn new() -> SearchState {
        SearchState::default()
    }

    /// Clears all maps and the visited log, keeping their allocations.
    pub fn reset(&mut self) {
        self.parent.clear();
        self.distance.clear();
        self.visited_cells.clear();
    }

    pub fn is_discovered(&self, cell: &Cell) -> bool {
        self.parent.contains_key(cell)
    }

    /// Number of cells expanded so far.
    pub fn expansions(&self) -> usize {
        self.visited_cells.len()
    }

    /// Registers `start` as the root of the parent tree.
    pub(crate) fn seed(&mut self, start: Cell) {
        self.reset();
        self.parent.insert(start, None);
    }

    /// Logs `cell` as expanded, unless the expansion cap has already been used up.
    pub(crate) fn expand(
        &mut self,
        cell: Cell,
        max_expansions: Option<usize>,
    ) -> Result<(), SearchError> {
        if let Some(limit) = max_expansions {
            if self.visited_cells.len() >= limit {
                return Err(SearchError::ExpansionLimit { limit });
            }
        }
        self.visited_cells.push(cell);
        Ok(())
    }
}
