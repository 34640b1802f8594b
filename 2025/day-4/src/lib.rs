pub mod grid;
pub mod part1;
pub mod part2;
pub mod reduce;
pub mod scan;

use grid::Grid;

/// Both answers for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Rolls reachable before anything is removed.
    pub accessible: usize,
    /// Rolls removed once the grid stops changing.
    pub removed: usize,
}

/// Measures accessibility on the untouched grid, then reduces a copy of it.
#[tracing::instrument(skip_all)]
pub fn solve(grid: &Grid) -> Summary {
    let accessible = part1::accessible_count(grid);
    let removed = reduce::total_removable(grid);
    Summary {
        accessible,
        removed,
    }
}
