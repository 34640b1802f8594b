use miette::*;

use crate::grid::Grid;
use crate::scan;

/// Rolls a forklift can reach in the grid as given, without removing any.
pub fn accessible_count(grid: &Grid) -> usize {
    scan::removable(grid).len()
}

#[tracing::instrument(skip_all)]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;

    Ok(accessible_count(&grid).to_string())
}
