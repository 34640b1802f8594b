use miette::*;

use aoc2025_day_4::{grid::Grid, solve};

fn main() -> Result<()> {
    aoc_common::logging::init();
    let input = aoc_common::input::load(env!("CARGO_MANIFEST_DIR"), "input1.txt")?;
    let grid: Grid = input.parse()?;
    let summary = solve(&grid);
    println!("Accessible rolls: {}", summary.accessible);
    println!("Removed rolls: {}", summary.removed);
    Ok(())
}
