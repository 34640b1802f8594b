use miette::*;

use crate::grid::Grid;
use crate::reduce;

#[tracing::instrument(skip_all)]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;

    Ok(reduce::total_removable(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("43", process(input)?);
        Ok(())
    }

    #[test]
    fn trailing_newline_does_not_matter() -> Result<()> {
        assert_eq!("7", process("@@.\n@@@\n.@@\n")?);
        Ok(())
    }
}
