use grid_search::{path_edges, Cell, GridSearch, PathingGrid, SearchOutcome, Strategy};
use std::env;

// Runs the strategies named on the command line (all of them by default) on a small maze and
// draws the expanded cells (o) and the final path (*) of each.
//
//  cargo run --example compare_strategies -- bfs astar

fn draw(grid: &PathingGrid, outcome: &SearchOutcome) {
    for row in 0..grid.rows() as i32 {
        let line = (0..grid.cols() as i32)
            .map(|col| {
                let c = Cell::new(row, col);
                if outcome.path.contains(&c) {
                    '*'
                } else if outcome.visited_cells().contains(&c) {
                    'o'
                } else if grid.is_blocked(&c) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
}

fn main() {
    let strategies = env::args()
        .skip(1)
        .map(|arg| arg.parse::<Strategy>())
        .collect::<Result<Vec<_>, _>>();
    let strategies = match strategies {
        Ok(s) if s.is_empty() => Strategy::ALL.to_vec(),
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let mut pathing_grid = PathingGrid::new(8, 12, false);
    pathing_grid.set_rect(Cell::new(0, 3), 6, 1, true);
    pathing_grid.set_rect(Cell::new(2, 7), 6, 1, true);
    pathing_grid.set_rect(Cell::new(5, 9), 1, 3, true);
    let start = Cell::new(0, 0);
    let goal = Cell::new(7, 11);

    for strategy in strategies {
        let outcome = strategy.search(&pathing_grid, start, goal).unwrap();
        println!(
            "{}: {} steps, {} cells expanded",
            strategy,
            path_edges(&outcome.path),
            outcome.visited_cells().len()
        );
        draw(&pathing_grid, &outcome);
        println!();
    }
}
