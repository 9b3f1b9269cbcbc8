use fxhash::FxHashSet;
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{solver::GridSearch, trace_path, Cell, SearchError, SearchGraph, SearchState};

/// Open list entry. The heap is a max-heap, so the ordering is reversed to pop the smallest
/// estimated cost first, among equal estimates the smallest cost, and then the entry pushed
/// first.
struct SmallestCostHolder {
    estimated_cost: f64,
    cost: u32,
    index: u64,
    cell: Cell,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// A* search with a Euclidean heuristic and unit step cost.
///
/// Instead of decreasing keys, an improved route to a cell pushes a second entry; entries for
/// cells that were already expanded are skipped when popped.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the Euclidean heuristic. At 1.0 it is admissible and consistent on a 4-connected
    /// grid and paths are optimal; larger values expand fewer cells but may return longer paths.
    pub heuristic_factor: f64,
    /// Gives up with [SearchError::ExpansionLimit] after this many expanded cells.
    pub max_expansions: Option<usize>,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            max_expansions: None,
        }
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_heuristic_factor(mut self, heuristic_factor: f64) -> AstarSolver {
        self.heuristic_factor = heuristic_factor;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> AstarSolver {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Straight-line distance to the goal times the heuristic factor.
    pub fn heuristic(&self, cell: &Cell, goal: &Cell) -> f64 {
        cell.euclidean_distance(goal) * self.heuristic_factor
    }
}

impl GridSearch for AstarSolver {
    fn search_with_state<G: SearchGraph>(
        &self,
        graph: &G,
        start: Cell,
        goal: Cell,
        state: &mut SearchState,
    ) -> Result<Vec<Cell>, SearchError> {
        debug!("A* search from {} to {}", start, goal);
        state.seed(start);
        state.distance.insert(start, 0);
        let mut closed: FxHashSet<Cell> = FxHashSet::default();
        let mut counter: u64 = 0;
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            estimated_cost: self.heuristic(&start, &goal),
            cost: 0,
            index: counter,
            cell: start,
        });
        while let Some(SmallestCostHolder { cost, cell, .. }) = to_see.pop() {
            // Stale entry, the cell was expanded through a cheaper one
            if !closed.insert(cell) {
                continue;
            }
            state.expand(cell, self.max_expansions)?;
            if cell == goal {
                debug!(
                    "Reached {} at cost {} after expanding {} cells",
                    goal,
                    cost,
                    state.expansions()
                );
                return trace_path(goal, state);
            }
            let new_cost = cost + 1;
            for neighbor in graph.find_neighbors(&cell) {
                if closed.contains(&neighbor) {
                    continue;
                }
                let improves = state
                    .distance
                    .get(&neighbor)
                    .map_or(true, |&known| new_cost < known);
                if !improves {
                    continue;
                }
                state.distance.insert(neighbor, new_cost);
                state.parent.insert(neighbor, Some(cell));
                counter += 1;
                to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost as f64 + self.heuristic(&neighbor, &goal),
                    cost: new_cost,
                    index: counter,
                    cell: neighbor,
                });
            }
        }
        info!(
            "{} is not reachable from {}, expanded {} cells",
            goal,
            start,
            state.expansions()
        );
        Ok(Vec::new())
    }
}
