use core::fmt;
use std::collections::VecDeque;
use std::str::FromStr;

use indexmap::map::Entry::Vacant;
use log::{debug, info};

use crate::{trace_path, Cell, ParseStrategyError, SearchError, SearchGraph, SearchState};

pub mod astar;
pub mod bfs;
pub mod dfs;

use astar::AstarSolver;
use bfs::BreadthFirstSolver;
use dfs::DepthFirstSolver;

/// Path found by a search together with the bookkeeping that produced it.
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    /// Start to goal inclusive, empty if the goal could not be reached.
    pub path: Vec<Cell>,
    pub state: SearchState,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn visited_cells(&self) -> &[Cell] {
        &self.state.visited_cells
    }
}

pub trait GridSearch {
    /// Searches from `start` to `goal`, resetting `state` first and leaving the parent links,
    /// distances and expansion log of this call in it.
    ///
    /// Returns an empty path when the goal is unreachable.
    fn search_with_state<G: SearchGraph>(
        &self,
        graph: &G,
        start: Cell,
        goal: Cell,
        state: &mut SearchState,
    ) -> Result<Vec<Cell>, SearchError>;

    /// Like [search_with_state](Self::search_with_state) with a fresh [SearchState] that is
    /// returned alongside the path.
    fn search<G: SearchGraph>(
        &self,
        graph: &G,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchOutcome, SearchError> {
        let mut state = SearchState::new();
        let path = self.search_with_state(graph, start, goal, &mut state)?;
        Ok(SearchOutcome { path, state })
    }
}

/// Open list of the uninformed searches. The pop order is all that tells them apart.
pub(crate) trait Frontier: Default {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
}

/// Last in, first out.
impl Frontier for Vec<Cell> {
    fn push(&mut self, cell: Cell) {
        Vec::push(self, cell)
    }
    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }
}

/// First in, first out.
impl Frontier for VecDeque<Cell> {
    fn push(&mut self, cell: Cell) {
        self.push_back(cell)
    }
    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }
}

/// Shared loop of depth- and breadth-first search. Cells are marked as discovered (given a
/// parent) when pushed, so each cell enters the frontier and the visited log at most once.
pub(crate) fn uninformed_search<F, G>(
    graph: &G,
    start: Cell,
    goal: Cell,
    state: &mut SearchState,
    max_expansions: Option<usize>,
) -> Result<Vec<Cell>, SearchError>
where
    F: Frontier,
    G: SearchGraph,
{
    state.seed(start);
    let mut frontier = F::default();
    frontier.push(start);
    while let Some(current) = frontier.pop() {
        state.expand(current, max_expansions)?;
        if current == goal {
            debug!(
                "Reached {} after expanding {} cells",
                goal,
                state.expansions()
            );
            return trace_path(goal, state);
        }
        for neighbor in graph.find_neighbors(&current) {
            if let Vacant(e) = state.parent.entry(neighbor) {
                e.insert(Some(current));
                frontier.push(neighbor);
            }
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

/// Selects one of the search strategies with its default settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::AStar => "astar",
        }
    }
}

impl GridSearch for Strategy {
    fn search_with_state<G: SearchGraph>(
        &self,
        graph: &G,
        start: Cell,
        goal: Cell,
        state: &mut SearchState,
    ) -> Result<Vec<Cell>, SearchError> {
        match self {
            Strategy::DepthFirst => {
                DepthFirstSolver::new().search_with_state(graph, start, goal, state)
            }
            Strategy::BreadthFirst => {
                BreadthFirstSolver::new().search_with_state(graph, start, goal, state)
            }
            Strategy::AStar => AstarSolver::new().search_with_state(graph, start, goal, state),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "astar" | "a-star" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}
