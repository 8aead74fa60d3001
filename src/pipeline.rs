//! # Solving a problem from start to end
//!
//! The fixed call order of the solver adapter: construct an instance, presolve it, read its cost
//! and table, optimize and read them again.
use std::io;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::algorithm::{Condition, Presolve, Solver, SolverError};
use crate::data::problem::ProblemInstance;
use crate::data::solution::{SolveResult, Solved};
use crate::io::error::ImportError;
use crate::io::import;

/// Anything that stops a problem file from being solved.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The problem file couldn't be read or parsed.
    #[error(transparent)]
    Import(#[from] ImportError),
    /// The solver rejected the problem.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Read a problem file and solve it.
///
/// # Errors
///
/// If the file can't be read or parsed, or if the solver rejects the problem.
pub fn solve_file<S: Solver>(
    solver: &S,
    file_path: &Path,
    precision: u32,
) -> Result<Solved, SolveError> {
    let problem = import(file_path)?;
    Ok(solve(solver, &problem, precision)?)
}

/// Solve a problem instance.
///
/// # Return value
///
/// The tables and costs before and after optimizing, with the time each step took.
///
/// # Errors
///
/// If the solver can't construct or presolve the instance.
pub fn solve<S: Solver>(
    solver: &S,
    problem: &ProblemInstance,
    precision: u32,
) -> Result<Solved, SolverError> {
    if !problem.is_rectangular() {
        debug!("Cost matrix is not rectangular, passing it on as-is");
    }

    let start = Instant::now();
    let condition = solver.new_condition(&problem.supply, &problem.demand, &problem.costs, precision)?;
    info!("Constructed a {}x{} instance", problem.nr_supply_points(), problem.nr_demand_points());

    let mut presolve = condition.minimal_taxes_method()?;
    let initial = SolveResult::new(presolve.well_printed_string(), presolve.cost_func(), start.elapsed());
    info!("Presolve cost: {}", initial.cost);

    let start = Instant::now();
    presolve.optimize();
    let optimized = SolveResult::new(presolve.well_printed_string(), presolve.cost_func(), start.elapsed());
    info!("Optimized cost: {}", optimized.cost);

    let solved = Solved { presolve: initial, optimized, precision };
    info!("Optimizing lowered the cost by {}", solved.improvement());

    Ok(solved)
}

/// Write the results of a solve the way the batch interface prints them.
///
/// # Arguments
///
/// * `out`: Where to write to.
/// * `solved`: Results to print.
/// * `timing`: Whether to annotate each step with the time it took.
pub fn write_report(out: &mut impl Write, solved: &Solved, timing: bool) -> io::Result<()> {
    writeln!(out, "Minimal taxes method")?;
    write_result(out, solved, &solved.presolve, timing)?;
    writeln!(out, "Optimizing...")?;
    write_result(out, solved, &solved.optimized, timing)
}

fn write_result(
    out: &mut impl Write,
    solved: &Solved,
    result: &SolveResult,
    timing: bool,
) -> io::Result<()> {
    writeln!(out, "{}", result.table)?;
    writeln!(out, "Cost function: {}", solved.format_value(result.cost))?;
    if timing {
        writeln!(out, "Elapsed: {:?}", result.elapsed)?;
    }

    Ok(())
}
