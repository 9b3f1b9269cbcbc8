//! # grid_search
//!
//! Three interchangeable searches over a 2D grid:
//! [depth-first](solver::dfs::DepthFirstSolver),
//! [breadth-first](solver::bfs::BreadthFirstSolver) and
//! [A*](solver::astar::AstarSolver) with a Euclidean heuristic. Every search records the
//! parent links, distances and the order in which cells were expanded in a [SearchState], so a
//! front end can show both the explored region and the final path.
//!
//! The grid itself is consumed through the [SearchGraph] trait. [PathingGrid] is a ready-made
//! 4-connected obstacle grid implementing it.
//!
//! ```
//! use grid_search::{Cell, GridSearch, PathingGrid, Strategy};
//!
//! let mut grid = PathingGrid::new(3, 3, false);
//! grid.set(Cell::new(1, 1), true);
//! let outcome = Strategy::BreadthFirst
//!     .search(&grid, Cell::new(0, 0), Cell::new(2, 2))
//!     .unwrap();
//! assert_eq!(outcome.path.len(), 5);
//! ```
pub mod cell;
pub mod error;
pub mod graph;
pub mod pathing_grid;
pub mod solver;
pub mod state;
pub mod trace;

pub use cell::Cell;
pub use error::{ParseStrategyError, SearchError};
pub use graph::SearchGraph;
pub use pathing_grid::PathingGrid;
pub use solver::{
    astar::AstarSolver, bfs::BreadthFirstSolver, dfs::DepthFirstSolver, GridSearch,
    SearchOutcome, Strategy,
};
pub use state::SearchState;
pub use trace::{path_edges, trace_path};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Insertion-ordered map with the fast non-cryptographic fxhash hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Inline capacity of neighbor lists; a cell has at most 4 neighbours on a 4-connected grid.
pub const N_SMALLVEC_SIZE: usize = 4;
