use log::debug;

use crate::{
    solver::{uninformed_search, GridSearch},
    Cell, SearchError, SearchGraph, SearchState,
};

/// Depth-first search. Explores the most recently discovered cell first, so the path it finds
/// connects start and goal but is generally not the shortest.
#[derive(Clone, Debug, Default)]
pub struct DepthFirstSolver {
    /// Gives up with [SearchError::ExpansionLimit] after this many expanded cells.
    pub max_expansions: Option<usize>,
}

impl DepthFirstSolver {
    pub fn new() -> DepthFirstSolver {
        DepthFirstSolver::default()
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> DepthFirstSolver {
        self.max_expansions = Some(max_expansions);
        self
    }
}

impl GridSearch for DepthFirstSolver {
    fn search_with_state<G: SearchGraph>(
        &self,
        graph: &G,
        start: Cell,
        goal: Cell,
        state: &mut SearchState,
    ) -> Result<Vec<Cell>, SearchError> {
        debug!("Depth-first search from {} to {}", start, goal);
        uninformed_search::<Vec<Cell>, _>(graph, start, goal, state, self.max_expansions)
    }
}
