//! # Transportation problem
//!
//! Solving balanced transportation problems with the minimal taxes (least cost) method for an
//! initial basic feasible solution, followed by the method of potentials.
//!
//! A basis is a set of `m + n - 1` cells forming a spanning tree on the bipartite graph of supply
//! and demand points; degenerate bases contain cells with a zero amount.
use crate::algorithm::{Solver, SolverError};

pub use condition::TransportCondition;
pub use plan::TransportPlan;

mod condition;
mod plan;
mod table;

/// Largest number of decimals that survives rounding in an `f64` for realistic magnitudes.
pub const MAX_PRECISION: u32 = 10;

/// The default solver.
#[derive(Copy, Clone, Debug, Default)]
pub struct Potentials;

impl Solver for Potentials {
    type Condition = TransportCondition;

    fn new_condition(
        &self,
        supply: &[f64],
        demand: &[f64],
        costs: &[Vec<f64>],
        precision: u32,
    ) -> Result<Self::Condition, SolverError> {
        TransportCondition::new(supply, demand, costs, precision)
    }
}

/// Round a value to a number of decimals.
///
/// Values too large to scale are returned as they are; they have no fractional part anyway.
fn round(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

/// Differences below this are rounding noise for values with `precision` decimals.
fn tolerance(precision: u32) -> f64 {
    0.5 * 10_f64.powi(-(precision as i32))
}

#[cfg(test)]
mod test;
