//! # Algorithms
//!
//! The solver is reached only through the traits in this module. A front-end constructs a
//! `Condition` from a problem, asks it for an initial feasible `Presolve` and then optimizes that.
//! Implementations can be swapped, e.g. for a deterministic double in tests.
use thiserror::Error;

pub mod transport;

/// Constructs problem instances that can be solved.
pub trait Solver {
    /// A validated problem instance.
    type Condition: Condition;

    /// Validate a problem and prepare it for solving.
    ///
    /// # Arguments
    ///
    /// * `supply`: Quantity available at each supply point.
    /// * `demand`: Quantity required at each demand point.
    /// * `costs`: Unit cost matrix, a row per supply point and a column per demand point.
    /// * `precision`: Number of decimals quantities are rounded to.
    ///
    /// # Errors
    ///
    /// When the shape of the cost matrix doesn't match the supply and demand, or when the precision
    /// can't be honored.
    fn new_condition(
        &self,
        supply: &[f64],
        demand: &[f64],
        costs: &[Vec<f64>],
        precision: u32,
    ) -> Result<Self::Condition, SolverError>;
}

/// A problem instance accepted by a solver.
pub trait Condition {
    /// A feasible solution of this instance.
    type Presolve: Presolve;

    /// Compute an initial feasible solution.
    ///
    /// # Errors
    ///
    /// When the instance has no feasible solution, e.g. if total supply and demand differ.
    fn minimal_taxes_method(&self) -> Result<Self::Presolve, SolverError>;
}

/// A feasible, not necessarily optimal, solution.
pub trait Presolve {
    /// Improve the solution in place until its cost is minimal.
    ///
    /// Feasibility is maintained and the cost never increases.
    fn optimize(&mut self);

    /// Total transportation cost of the current solution.
    fn cost_func(&self) -> f64;

    /// Human readable table of the current solution.
    fn well_printed_string(&self) -> String;
}

/// Problems a solver reports while constructing or presolving an instance.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// There are no supply points or no demand points.
    #[error("problem has {nr_supply} supply points and {nr_demand} demand points")]
    EmptyProblem {
        /// Number of supply points given.
        nr_supply: usize,
        /// Number of demand points given.
        nr_demand: usize,
    },
    /// The cost matrix doesn't have a row per supply point and a column per demand point.
    #[error("{0}")]
    Shape(String),
    /// A supply or demand value is negative or not finite.
    #[error("{kind} {index} has invalid quantity {value}")]
    NegativeQuantity {
        /// Whether it's a supply point or a demand point.
        kind: &'static str,
        /// Position of the point, 1-based.
        index: usize,
        /// The offending quantity.
        value: f64,
    },
    /// The requested number of decimals is out of range.
    #[error("precision {precision} is out of range, at most {maximum} decimals are supported")]
    Precision {
        /// Number of decimals requested.
        precision: u32,
        /// Largest supported number of decimals.
        maximum: u32,
    },
    /// Total supply and total demand differ.
    #[error("total supply {supply} does not match total demand {demand}")]
    Unbalanced {
        /// Sum of the supply of all supply points.
        supply: f64,
        /// Sum of the demand of all demand points.
        demand: f64,
    },
    /// Total supply or total demand is too large to be represented.
    #[error("total supply {supply} or total demand {demand} is not a finite number")]
    NonFiniteTotal {
        /// Sum of the supply of all supply points.
        supply: f64,
        /// Sum of the demand of all demand points.
        demand: f64,
    },
}
