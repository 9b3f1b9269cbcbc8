use crate::{Cell, SearchError, SearchState};

/// Rebuilds the start to goal path by following parent links back from `goal`.
///
/// The chain ends at the cell whose parent is [None], which is the start. A cell on the chain
/// without any entry yields [SearchError::MissingParent].
pub fn trace_path(goal: Cell, state: &SearchState) -> Result<Vec<Cell>, SearchError> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(cell) = current {
        if path.len() > state.parent.len() {
            return Err(SearchError::ParentCycle { goal });
        }
        current = *state
            .parent
            .get(&cell)
            .ok_or(SearchError::MissingParent { cell })?;
        path.push(cell);
    }
    path.reverse();
    Ok(path)
}

/// Number of steps along a path, 0 for an empty or single-cell path.
pub fn path_edges(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(cells: &[Cell]) -> SearchState {
        let mut state = SearchState::new();
        state.seed(cells[0]);
        for pair in cells.windows(2) {
            state.parent.insert(pair[1], Some(pair[0]));
        }
        state
    }

    #[test]
    fn start_only() {
        let start = Cell::new(1, 1);
        let state = chain(&[start]);
        assert_eq!(trace_path(start, &state).unwrap(), vec![start]);
    }

    #[test]
    fn path_runs_start_to_goal() {
        let cells = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)];
        let state = chain(&cells);
        assert_eq!(trace_path(Cell::new(2, 1), &state).unwrap(), cells.to_vec());
        // Any discovered cell can be traced, not just the last one
        assert_eq!(
            trace_path(Cell::new(0, 1), &state).unwrap(),
            vec![Cell::new(0, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn undiscovered_goal() {
        let state = chain(&[Cell::new(0, 0), Cell::new(0, 1)]);
        assert_eq!(
            trace_path(Cell::new(5, 5), &state),
            Err(SearchError::MissingParent {
                cell: Cell::new(5, 5)
            })
        );
    }

    #[test]
    fn broken_chain() {
        let mut state = SearchState::new();
        state.parent.insert(Cell::new(0, 2), Some(Cell::new(0, 1)));
        assert_eq!(
            trace_path(Cell::new(0, 2), &state),
            Err(SearchError::MissingParent {
                cell: Cell::new(0, 1)
            })
        );
    }

    #[test]
    fn cyclic_parents() {
        let mut state = SearchState::new();
        state.parent.insert(Cell::new(0, 0), Some(Cell::new(0, 1)));
        state.parent.insert(Cell::new(0, 1), Some(Cell::new(0, 0)));
        assert_eq!(
            trace_path(Cell::new(0, 0), &state),
            Err(SearchError::ParentCycle {
                goal: Cell::new(0, 0)
            })
        );
    }

    #[test]
    fn edge_count() {
        assert_eq!(path_edges(&[]), 0);
        assert_eq!(path_edges(&[Cell::new(0, 0)]), 0);
        assert_eq!(path_edges(&[Cell::new(0, 0), Cell::new(0, 1)]), 1);
    }
}
