use chumsky::prelude::*;
use glam::IVec2;
use itertools::Itertools;
use miette::*;
use std::fmt;
use std::str::FromStr;

/// Character marking a paper roll. Every other character is floor.
pub const ROLL: char = '@';
const FLOOR: char = '.';

/// Direction to each of the eight surrounding cells, `x` along a row and
/// `y` down the rows.
pub const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled,
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        if c == ROLL {
            Cell::Filled
        } else {
            Cell::Empty
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by `delta`, or `None` when that would cross the top or left edge.
    pub fn offset(self, delta: IVec2) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(delta.y as isize)?,
            col: self.col.checked_add_signed(delta.x as isize)?,
        })
    }
}

/// Rows of cells as they appear in the puzzle input.
///
/// Rows keep their own length, so a ragged input is represented as-is and
/// every lookup is bounds-checked against the row it lands in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from rows that were already split, keeping every row.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(Cell::from).collect())
            .collect();
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, zero past the last row.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    pub fn is_filled(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Filled)
    }

    /// Empties `pos`. The position must come from this grid.
    pub fn clear(&mut self, pos: Position) {
        self.rows[pos.row][pos.col] = Cell::Empty;
    }

    /// Filled positions in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == Cell::Filled)
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Counts the filled cells among the eight neighbours of `pos`.
    pub fn count_neighbors(&self, pos: Position) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&delta| pos.offset(delta))
            .filter(|&neighbor| self.is_filled(neighbor))
            .count()
    }

    fn from_parsed(mut rows: Vec<Vec<Cell>>) -> Self {
        // Blank lines around the grid are formatting, blank lines inside it are rows.
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        let leading = rows.iter().take_while(|row| row.is_empty()).count();
        rows.drain(..leading);

        Self { rows }
    }
}

/// Parses the puzzle text into rows of cells.
fn parser<'a>() -> impl Parser<'a, &'a str, Grid, extra::Err<Rich<'a, char>>> {
    let cell = none_of("\r\n").map(Cell::from);

    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(Grid::from_parsed)
}

impl FromStr for Grid {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        parser()
            .parse(input)
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == Cell::Filled { ROLL } else { FLOOR })
                    .collect::<String>()
            })
            .join("\n");
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::isolated(&["...", ".@.", "..."], Position::new(1, 1), 0)]
    #[case::one_neighbor(&["...", ".@@", "..."], Position::new(1, 1), 1)]
    #[case::four_neighbors(&[".@.", "@@@", ".@."], Position::new(1, 1), 4)]
    #[case::corner(&["@@", "@@"], Position::new(0, 0), 3)]
    #[case::eight_neighbors(&["@@@", "@@@", "@@@"], Position::new(1, 1), 8)]
    #[case::bottom_right_edge(&["@@@", "@@@", "@@@"], Position::new(2, 2), 3)]
    fn counts_neighbors(#[case] rows: &[&str], #[case] pos: Position, #[case] expected: usize) {
        let grid = Grid::from_rows(rows);
        assert_eq!(expected, grid.count_neighbors(pos));
    }

    #[rstest]
    #[case(Position::new(0, 2), 1)]
    #[case(Position::new(1, 0), 4)]
    #[case(Position::new(2, 2), 1)]
    fn ragged_rows_are_bounds_checked_per_row(#[case] pos: Position, #[case] expected: usize) {
        let grid = Grid::from_rows(["@@@", "@", "@@@"]);
        assert_eq!(expected, grid.count_neighbors(pos));
    }

    #[test]
    fn anything_but_the_roll_is_floor() {
        let grid = Grid::from_rows(["@x#", " .@"]);
        let filled: Vec<_> = grid.filled().collect();
        assert_eq!(vec![Position::new(0, 0), Position::new(1, 2)], filled);
    }

    #[test]
    fn parses_crlf_and_trailing_newlines() -> Result<()> {
        let grid: Grid = "@.@\r\n...\r\n@.@\r\n\r\n".parse()?;
        assert_eq!(Grid::from_rows(["@.@", "...", "@.@"]), grid);
        Ok(())
    }

    #[test]
    fn keeps_interior_blank_rows() -> Result<()> {
        let grid: Grid = "\n@@\n\n@@\n".parse()?;
        assert_eq!(3, grid.height());
        assert_eq!(0, grid.row_len(1));
        assert_eq!(1, grid.count_neighbors(Position::new(0, 0)));
        Ok(())
    }

    #[test]
    fn empty_input_is_an_empty_grid() -> Result<()> {
        let grid: Grid = "".parse()?;
        assert_eq!(0, grid.height());
        assert_eq!(0, grid.filled_count());
        Ok(())
    }

    #[test]
    fn displays_rolls_and_floor() -> Result<()> {
        let grid: Grid = "@x\n.@\n".parse()?;
        assert_eq!("@.\n.@", grid.to_string());
        Ok(())
    }
}
