use thiserror::Error;

use crate::Cell;

/// Failures of a search call. An unreachable goal is not one of them: it yields an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A cell on the parent chain was never discovered. Points at a broken adapter or state.
    #[error("no parent entry for cell {cell}")]
    MissingParent { cell: Cell },
    /// Following parent links from the goal never reached the start.
    #[error("parent links starting at {goal} form a cycle")]
    ParentCycle { goal: Cell },
    /// The solver's `max_expansions` cap was reached before the search finished.
    #[error("search stopped after expanding {limit} cells")]
    ExpansionLimit { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy `{0}`, expected one of dfs, bfs, astar")]
pub struct ParseStrategyError(pub String);
