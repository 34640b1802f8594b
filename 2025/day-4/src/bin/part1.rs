use miette::*;

use aoc2025_day_4::part1;

fn main() -> Result<()> {
    aoc_common::logging::init();
    let input = aoc_common::input::load(env!("CARGO_MANIFEST_DIR"), "input1.txt")?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
