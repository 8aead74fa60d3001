//! # Validated problem instances
use itertools::iproduct;
use log::debug;

use crate::algorithm::{Condition, SolverError};
use crate::algorithm::transport::{MAX_PRECISION, round, tolerance, TransportPlan};

/// A transportation problem whose shape and quantities have been checked.
///
/// Supply and demand are rounded to `precision` decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportCondition {
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: Vec<Vec<f64>>,
    precision: u32,
}

impl TransportCondition {
    /// Validate a problem.
    ///
    /// # Errors
    ///
    /// If the precision is larger than `MAX_PRECISION`, if there are no supply or no demand points,
    /// if the cost matrix is not `supply.len()` by `demand.len()` or contains non-finite values, or
    /// if a quantity is negative or not finite.
    pub fn new(
        supply: &[f64],
        demand: &[f64],
        costs: &[Vec<f64>],
        precision: u32,
    ) -> Result<Self, SolverError> {
        if precision > MAX_PRECISION {
            return Err(SolverError::Precision { precision, maximum: MAX_PRECISION });
        }
        if supply.is_empty() || demand.is_empty() {
            return Err(SolverError::EmptyProblem {
                nr_supply: supply.len(),
                nr_demand: demand.len(),
            });
        }
        if costs.len() != supply.len() {
            return Err(SolverError::Shape(format!(
                "cost matrix has {} rows, but there are {} supply points",
                costs.len(), supply.len(),
            )));
        }
        for (i, row) in costs.iter().enumerate() {
            if row.len() != demand.len() {
                return Err(SolverError::Shape(format!(
                    "cost row {} has {} values, but there are {} demand points",
                    i + 1, row.len(), demand.len(),
                )));
            }
            if let Some(j) = row.iter().position(|cost| !cost.is_finite()) {
                return Err(SolverError::Shape(format!(
                    "cost in row {}, column {} is not a finite number", i + 1, j + 1,
                )));
            }
        }
        for (kind, values) in [("supply point", supply), ("demand point", demand)] {
            let invalid = values.iter()
                .enumerate()
                .find(|&(_, value)| !value.is_finite() || *value < 0_f64);
            if let Some((index, &value)) = invalid {
                return Err(SolverError::NegativeQuantity { kind, index: index + 1, value });
            }
        }

        let rounded = |values: &[f64]| -> Vec<f64> {
            values.iter().map(|&value| round(value, precision)).collect()
        };
        Ok(Self {
            supply: rounded(supply),
            demand: rounded(demand),
            costs: costs.to_vec(),
            precision,
        })
    }

    /// Number of supply points.
    pub fn nr_rows(&self) -> usize {
        self.supply.len()
    }

    /// Number of demand points.
    pub fn nr_columns(&self) -> usize {
        self.demand.len()
    }

    /// Supply of each supply point, rounded.
    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    /// Demand of each demand point, rounded.
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Cost of shipping one unit from supply point `i` to demand point `j`.
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.costs[i][j]
    }

    /// Number of decimals quantities are rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl Condition for TransportCondition {
    type Presolve = TransportPlan;

    /// Least cost method.
    ///
    /// Repeatedly ships as much as possible through the cheapest cell of the rows and columns that
    /// are still open, then closes exactly one line: the row if its supply is exhausted (unless it
    /// is the last open row), otherwise the column. Only the final allocation closes both. This
    /// yields `m + n - 1` basic cells forming a spanning tree, some of which may ship nothing.
    fn minimal_taxes_method(&self) -> Result<Self::Presolve, SolverError> {
        let total_supply = self.supply.iter().sum::<f64>();
        let total_demand = self.demand.iter().sum::<f64>();
        if !total_supply.is_finite() || !total_demand.is_finite() {
            return Err(SolverError::NonFiniteTotal { supply: total_supply, demand: total_demand });
        }
        // Rounding error of a sum grows with its magnitude
        let nr_terms = (self.supply.len() + self.demand.len()) as f64;
        let summation_error = f64::EPSILON * nr_terms * total_supply.max(total_demand);
        if (total_supply - total_demand).abs() > tolerance(self.precision).max(summation_error) {
            return Err(SolverError::Unbalanced { supply: total_supply, demand: total_demand });
        }

        let (m, n) = (self.nr_rows(), self.nr_columns());
        let mut remaining_supply = self.supply.clone();
        let mut remaining_demand = self.demand.clone();
        let mut row_open = vec![true; m];
        let mut column_open = vec![true; n];
        let (mut nr_open_rows, mut nr_open_columns) = (m, n);

        let mut basis = Vec::with_capacity(m + n - 1);
        while nr_open_rows > 0 && nr_open_columns > 0 {
            // Ties go to the lowest row, then the lowest column
            let cheapest = iproduct!(0..m, 0..n)
                .filter(|&(i, j)| row_open[i] && column_open[j])
                .min_by(|&(i1, j1), &(i2, j2)| self.costs[i1][j1].total_cmp(&self.costs[i2][j2]));
            let Some((i, j)) = cheapest else { break };

            let amount = round(remaining_supply[i].min(remaining_demand[j]), self.precision);
            basis.push((i, j, amount));
            debug!("Allocated {} to cell ({}, {})", amount, i, j);

            if nr_open_rows == 1 && nr_open_columns == 1 {
                break;
            }

            let close_row = nr_open_columns == 1
                || (nr_open_rows > 1 && remaining_supply[i] <= remaining_demand[j]);
            if close_row {
                row_open[i] = false;
                nr_open_rows -= 1;
                remaining_supply[i] = 0_f64;
                remaining_demand[j] = (remaining_demand[j] - amount).max(0_f64);
            } else {
                column_open[j] = false;
                nr_open_columns -= 1;
                remaining_demand[j] = 0_f64;
                remaining_supply[i] = (remaining_supply[i] - amount).max(0_f64);
            }
        }
        debug_assert_eq!(basis.len(), m + n - 1);

        Ok(TransportPlan::new(self.clone(), basis))
    }
}
