//! # Driving the workflow
//!
//! The workflow is run against doubles for the solver and the file chooser, so that every outcome
//! of a stage can be produced on demand.
use std::cell::Cell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use opti::algorithm::{Condition, Presolve, Solver, SolverError};
use opti::workflow::chooser::{ChooserError, FileChooser};

/// # Stage transitions
mod test;

/// Solver that reports fixed costs, and counts how often it's asked to construct an instance.
#[derive(Clone, Default)]
struct Fixed {
    constructed: Rc<Cell<usize>>,
}

struct FixedCondition {
    nr_supply: usize,
    nr_demand: usize,
    precision: u32,
}

struct FixedPlan {
    cost: f64,
    nr_cells: usize,
    precision: u32,
}

impl Solver for Fixed {
    type Condition = FixedCondition;

    fn new_condition(
        &self,
        supply: &[f64],
        demand: &[f64],
        costs: &[Vec<f64>],
        precision: u32,
    ) -> Result<Self::Condition, SolverError> {
        self.constructed.set(self.constructed.get() + 1);
        if costs.len() != supply.len() {
            return Err(SolverError::Shape("rows".to_string()));
        }

        Ok(FixedCondition { nr_supply: supply.len(), nr_demand: demand.len(), precision })
    }
}

impl Condition for FixedCondition {
    type Presolve = FixedPlan;

    fn minimal_taxes_method(&self) -> Result<Self::Presolve, SolverError> {
        Ok(FixedPlan {
            cost: 20_f64,
            nr_cells: self.nr_supply + self.nr_demand - 1,
            precision: self.precision,
        })
    }
}

impl Presolve for FixedPlan {
    fn optimize(&mut self) {
        self.cost = 10_f64;
    }

    fn cost_func(&self) -> f64 {
        self.cost
    }

    fn well_printed_string(&self) -> String {
        format!("{} cells at {:.*}", self.nr_cells, self.precision as usize, self.cost)
    }
}

/// Chooser that hands out prepared answers, and cancels once they run out.
struct Scripted {
    answers: VecDeque<Result<PathBuf, ChooserError>>,
}

impl Scripted {
    fn new(answers: impl IntoIterator<Item = Result<PathBuf, ChooserError>>) -> Self {
        Self { answers: answers.into_iter().collect() }
    }
}

impl FileChooser for Scripted {
    fn choose(&mut self, _input: &str) -> Result<PathBuf, ChooserError> {
        self.answers.pop_front().unwrap_or(Err(ChooserError::Cancelled))
    }
}

/// Path of one of the matrix files used by the batch tests.
fn problem_file(name: &str) -> PathBuf {
    crate::batch::get_test_file_path(name)
}
