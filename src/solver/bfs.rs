use log::debug;
use std::collections::VecDeque;

use crate::{
    solver::{uninformed_search, GridSearch},
    Cell, SearchError, SearchGraph, SearchState,
};

/// Breadth-first search. Cells are expanded in order of their step count from the start, so the
/// returned path has the fewest possible steps.
#[derive(Clone, Debug, Default)]
pub struct BreadthFirstSolver {
    /// Gives up with [SearchError::ExpansionLimit] after this many expanded cells.
    pub max_expansions: Option<usize>,
}

impl BreadthFirstSolver {
    pub fn new() -> BreadthFirstSolver {
        BreadthFirstSolver::default()
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> BreadthFirstSolver {
        self.max_expansions = Some(max_expansions);
        self
    }
}

impl GridSearch for BreadthFirstSolver {
    fn search_with_state<G: SearchGraph>(
        &self,
        graph: &G,
        start: Cell,
        goal: Cell,
        state: &mut SearchState,
    ) -> Result<Vec<Cell>, SearchError> {
        debug!("Breadth-first search from {} to {}", start, goal);
        uninformed_search::<VecDeque<Cell>, _>(graph, start, goal, state, self.max_expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathingGrid;

    #[test]
    fn solve_open_grid() {
        let pathing_grid = PathingGrid::new(3, 3, false);
        let outcome = BreadthFirstSolver::new()
            .search(&pathing_grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert_eq!(
            outcome.path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2),
            ]
        );
        // Every cell closer than the goal is expanded before it
        assert_eq!(outcome.visited_cells().len(), 9);
        assert_eq!(
            &outcome.visited_cells()[..3],
            &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    /// Asserts that the optimal 4 step solution is found around an obstacle.
    #[test]
    fn solve_simple_problem() {
        let mut pathing_grid = PathingGrid::new(3, 3, false);
        pathing_grid.set(Cell::new(1, 1), true);
        let path = BreadthFirstSolver::new()
            .search(&pathing_grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap()
            .path;
        assert_eq!(path.len(), 5);
        assert!(pathing_grid.is_valid_path(&path));
    }

    #[test]
    fn solve_maze() {
        // |S#...|
        // |.#.#.|
        // |...#G|
        let mut pathing_grid = PathingGrid::new(3, 5, false);
        pathing_grid.set_rect(Cell::new(0, 1), 2, 1, true);
        pathing_grid.set_rect(Cell::new(1, 3), 2, 1, true);
        let path = BreadthFirstSolver::new()
            .search(&pathing_grid, Cell::new(0, 0), Cell::new(2, 4))
            .unwrap()
            .path;
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(0, 2),
                Cell::new(0, 3),
                Cell::new(0, 4),
                Cell::new(1, 4),
                Cell::new(2, 4),
            ]
        );
    }

    #[test]
    fn blocked_start_has_no_path() {
        let mut pathing_grid = PathingGrid::new(3, 3, true);
        pathing_grid.set(Cell::new(2, 2), false);
        let outcome = BreadthFirstSolver::new()
            .search(&pathing_grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.visited_cells(), &[Cell::new(0, 0)]);
    }
}
