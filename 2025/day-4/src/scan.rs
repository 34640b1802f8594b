use crate::grid::{Grid, Position};

/// A roll with fewer neighbouring rolls than this can be reached by a forklift.
pub const ACCESS_THRESHOLD: usize = 4;

/// Every roll that is reachable in `grid` right now, in row-major order.
///
/// All counts are taken from the same snapshot and the result is fully
/// collected, so callers may mutate the grid afterwards without affecting
/// the pass that produced it.
pub fn removable(grid: &Grid) -> Vec<Position> {
    grid.filled()
        .filter(|&pos| grid.count_neighbors(pos) < ACCESS_THRESHOLD)
        .collect()
}
