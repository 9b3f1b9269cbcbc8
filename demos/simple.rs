use grid_search::{AstarSolver, Cell, GridSearch, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3, false);
    pathing_grid.set(Cell::new(1, 1), true);
    println!("{}", pathing_grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let outcome = AstarSolver::new()
        .search(&pathing_grid, start, end)
        .unwrap();
    println!("Expanded {} cells", outcome.visited_cells().len());
    println!("Path:");
    for c in outcome.path {
        println!("{}", c);
    }
}
