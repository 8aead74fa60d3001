//! # Representation of solved problems
//!
//! Once a problem is presolved and optimized, the solver adapter hands back its printable form and
//! cost. These values are read-only and are replaced as a whole by the next solve.
use std::time::Duration;

/// A snapshot of a solution, as reported by the solver at one point in the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveResult {
    /// Human readable table of the shipped quantities.
    pub table: String,
    /// Total transportation cost of the solution.
    pub cost: f64,
    /// Time spent computing this solution.
    pub elapsed: Duration,
}

impl SolveResult {
    /// Create a new `SolveResult` instance.
    pub fn new(table: String, cost: f64, elapsed: Duration) -> Self {
        Self { table, cost, elapsed }
    }
}

/// Everything a full solve produced: the initial feasible solution and the optimum.
#[derive(Clone, Debug, PartialEq)]
pub struct Solved {
    /// Solution produced by the initial heuristic.
    pub presolve: SolveResult,
    /// Solution after optimization.
    pub optimized: SolveResult,
    /// Number of decimals used when presenting values.
    pub precision: u32,
}

impl Solved {
    /// Time spent on the whole solve.
    pub fn elapsed(&self) -> Duration {
        self.presolve.elapsed + self.optimized.elapsed
    }

    /// How much optimization lowered the cost.
    ///
    /// Never negative for a correct solver.
    pub fn improvement(&self) -> f64 {
        self.presolve.cost - self.optimized.cost
    }

    /// Format a value with the number of decimals the problem was solved with.
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision as usize, value)
    }
}
