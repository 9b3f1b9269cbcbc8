use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::{Cell, SearchGraph, N_SMALLVEC_SIZE};

/// [PathingGrid] is a rectangular 4-connected grid of open and blocked cells. The raw [bool]
/// values live in a [BoolGrid] (`true` is blocked) with `x` running along columns and `y` along
/// rows. Connected components of open cells are maintained in a [UnionFind] so reachability can
/// be queried without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Creates a grid with every cell set to `blocked` and its components already generated.
    pub fn new(rows: usize, cols: usize, blocked: bool) -> PathingGrid {
        let mut pathing_grid = PathingGrid {
            grid: BoolGrid::new(cols, rows, blocked),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols()
    }

    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, cell: &Cell) -> bool {
        !self.in_bounds(cell) || self.grid.get(cell.col, cell.row)
    }

    pub fn can_move_to(&self, cell: &Cell) -> bool {
        !self.is_blocked(cell)
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols() + cell.col as usize
    }

    /// Opens or blocks a cell. Opening joins the cell's component with those of its open
    /// neighbours; blocking may split a component, so the components are flagged as dirty.
    pub fn set(&mut self, cell: Cell, blocked: bool) {
        if !self.in_bounds(&cell) {
            warn!("Ignoring update of {} outside the {}x{} grid", cell, self.rows(), self.cols());
            return;
        }
        let was_blocked = self.grid.get(cell.col, cell.row);
        self.grid.set(cell.col, cell.row, blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let ix = self.get_ix(&cell);
            for n in self.find_neighbors(&cell) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Sets every cell of the `height` x `width` block whose top-left corner is `corner`.
    pub fn set_rect(&mut self, corner: Cell, height: i32, width: i32, blocked: bool) {
        for row in corner.row..corner.row + height {
            for col in corner.col..corner.col + width {
                self.set(Cell::new(row, col), blocked);
            }
        }
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| self.components.find(self.get_ix(cell)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows() * self.cols());
        self.components_dirty = false;
        let rows = self.rows() as i32;
        let cols = self.cols() as i32;
        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(row, col);
                if self.is_blocked(&cell) {
                    continue;
                }
                let ix = self.get_ix(&cell);
                // Linking right and down covers every edge once
                for n in [Cell::new(row, col + 1), Cell::new(row + 1, col)] {
                    if self.can_move_to(&n) {
                        let n_ix = self.get_ix(&n);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

impl SearchGraph for PathingGrid {
    type Neighbors = SmallVec<[Cell; N_SMALLVEC_SIZE]>;

    /// Open in-bounds neighbours in the order up, right, down, left.
    fn find_neighbors(&self, cell: &Cell) -> Self::Neighbors {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|col| {
                    if self.is_blocked(&Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
