use crate::grid::Grid;
use crate::scan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Converged,
}

/// Repeatedly removes every reachable roll until a pass finds none.
///
/// Works on its own copy of the grid; the caller's grid is never touched.
#[derive(Debug, Clone)]
pub struct Reducer {
    grid: Grid,
    state: State,
    passes: usize,
    total_removed: usize,
}

impl Reducer {
    pub fn new(original: &Grid) -> Self {
        Self {
            grid: original.clone(),
            state: State::Running,
            passes: 0,
            total_removed: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The grid as left by the last completed pass.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Passes that removed at least one roll.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn total_removed(&self) -> usize {
        self.total_removed
    }

    /// Runs one pass and returns how many rolls it removed, or `None` once
    /// the grid has converged.
    pub fn step(&mut self) -> Option<usize> {
        if self.state == State::Converged {
            return None;
        }

        let removable = scan::removable(&self.grid);
        if removable.is_empty() {
            self.state = State::Converged;
            tracing::debug!(
                passes = self.passes,
                total = self.total_removed,
                "reached fixed point"
            );
            return None;
        }

        for &pos in &removable {
            self.grid.clear(pos);
        }
        self.passes += 1;
        self.total_removed += removable.len();
        tracing::debug!(pass = self.passes, removed = removable.len(), "pass complete");

        Some(removable.len())
    }

    /// Steps until converged and returns the cumulative number of removed rolls.
    pub fn run(&mut self) -> usize {
        while self.step().is_some() {}
        self.total_removed
    }
}

/// Total number of rolls that can be removed from `grid` by repeated passes.
#[tracing::instrument(skip_all, fields(rolls = grid.filled_count()))]
pub fn total_removable(grid: &Grid) -> usize {
    Reducer::new(grid).run()
}
