//! # Basic feasible solutions and the method of potentials
use std::collections::VecDeque;

use log::{debug, warn};

use crate::algorithm::Presolve;
use crate::algorithm::transport::{round, TransportCondition};

/// Upper bound on the number of pivots, per cell of the cost matrix.
///
/// Degenerate pivots don't lower the cost, and in rare cases the entering rule cycles through
/// them.
const MAX_PIVOTS_PER_CELL: usize = 50;

/// Reduced costs above `-EPSILON` (scaled by the largest cost) count as non-negative.
const EPSILON: f64 = 1e-9;

/// A basic feasible solution of a transportation problem.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportPlan {
    condition: TransportCondition,
    /// Amount shipped through each cell; `None` for cells that are not in the basis.
    amounts: Vec<Vec<Option<f64>>>,
}

/// A vertex of the bipartite graph the basis is a spanning tree of.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Node {
    Row(usize),
    Column(usize),
}

impl TransportPlan {
    /// Create a plan from basic cells.
    ///
    /// # Arguments
    ///
    /// * `condition`: Problem being solved.
    /// * `basis`: `(row, column, amount)` for each of the `m + n - 1` cells in the basis.
    pub(super) fn new(condition: TransportCondition, basis: Vec<(usize, usize, f64)>) -> Self {
        let mut amounts = vec![vec![None; condition.nr_columns()]; condition.nr_rows()];
        for (i, j, amount) in basis {
            amounts[i][j] = Some(amount);
        }

        Self { condition, amounts }
    }

    /// The problem this plan solves.
    pub fn condition(&self) -> &TransportCondition {
        &self.condition
    }

    /// Amount shipped from supply point `i` to demand point `j`, if that cell is basic.
    pub fn amount(&self, i: usize, j: usize) -> Option<f64> {
        self.amounts[i][j]
    }

    /// All basic cells with their amounts, row by row.
    pub fn basic_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.amounts.iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter_map(move |(j, amount)| amount.map(|amount| (i, j, amount)))
            })
    }

    fn is_basic(&self, i: usize, j: usize) -> bool {
        self.amounts[i][j].is_some()
    }

    /// Basic cells connecting a node to its neighbours.
    fn neighbours(&self, node: Node) -> Vec<(Node, (usize, usize))> {
        match node {
            Node::Row(i) => (0..self.condition.nr_columns())
                .filter(|&j| self.is_basic(i, j))
                .map(|j| (Node::Column(j), (i, j)))
                .collect(),
            Node::Column(j) => (0..self.condition.nr_rows())
                .filter(|&i| self.is_basic(i, j))
                .map(|i| (Node::Row(i), (i, j)))
                .collect(),
        }
    }

    /// Row potentials `u` and column potentials `v` such that `u[i] + v[j]` equals the cost of
    /// every basic cell `(i, j)`, with `u[0] = 0`.
    fn potentials(&self) -> (Vec<f64>, Vec<f64>) {
        let mut u = vec![None; self.condition.nr_rows()];
        let mut v = vec![None; self.condition.nr_columns()];
        u[0] = Some(0_f64);

        let mut queue = VecDeque::from([Node::Row(0)]);
        while let Some(node) = queue.pop_front() {
            for (next, (i, j)) in self.neighbours(node) {
                let cost = self.condition.cost(i, j);
                match (node, next) {
                    (Node::Row(_), Node::Column(_)) if v[j].is_none() => {
                        v[j] = u[i].map(|u_i| cost - u_i);
                        queue.push_back(next);
                    },
                    (Node::Column(_), Node::Row(_)) if u[i].is_none() => {
                        u[i] = v[j].map(|v_j| cost - v_j);
                        queue.push_back(next);
                    },
                    _ => {},
                }
            }
        }

        let settle = |potentials: Vec<Option<f64>>| -> Vec<f64> {
            potentials.into_iter().map(Option::unwrap_or_default).collect()
        };
        (settle(u), settle(v))
    }

    /// The non-basic cell with the most negative reduced cost, if any is negative.
    fn entering_cell(&self, u: &[f64], v: &[f64]) -> Option<(usize, usize, f64)> {
        let largest_cost = (0..self.condition.nr_rows())
            .flat_map(|i| (0..self.condition.nr_columns()).map(move |j| (i, j)))
            .map(|(i, j)| self.condition.cost(i, j).abs())
            .fold(1_f64, f64::max);
        let threshold = -EPSILON * largest_cost;

        (0..self.condition.nr_rows())
            .flat_map(|i| (0..self.condition.nr_columns()).map(move |j| (i, j)))
            .filter(|&(i, j)| !self.is_basic(i, j))
            .map(|(i, j)| (i, j, self.condition.cost(i, j) - u[i] - v[j]))
            .filter(|&(_, _, reduced)| reduced < threshold)
            .min_by(|(_, _, a), (_, _, b)| a.total_cmp(b))
    }

    /// Cells on the path through the basis from the row of the entering cell to its column.
    ///
    /// The path is returned starting at the column, so that signs alternate `-`, `+`, `-`, ...
    /// around the cycle closed by the entering cell.
    fn cycle_path(&self, row: usize, column: usize) -> Vec<(usize, usize)> {
        let nr_rows = self.condition.nr_rows();
        let index = |node| match node {
            Node::Row(i) => i,
            Node::Column(j) => nr_rows + j,
        };

        let mut parent = vec![None; nr_rows + self.condition.nr_columns()];
        let mut visited = vec![false; parent.len()];
        visited[index(Node::Row(row))] = true;

        let target = Node::Column(column);
        let mut queue = VecDeque::from([Node::Row(row)]);
        while let Some(node) = queue.pop_front() {
            if node == target {
                break;
            }
            for (next, cell) in self.neighbours(node) {
                if !visited[index(next)] {
                    visited[index(next)] = true;
                    parent[index(next)] = Some((node, cell));
                    queue.push_back(next);
                }
            }
        }

        let mut path = Vec::new();
        let mut node = target;
        while let Some((previous, cell)) = parent[index(node)] {
            path.push(cell);
            node = previous;
        }
        debug_assert!(path.len() % 2 == 1, "a row and a column are an odd distance apart");

        path
    }

    /// Bring cell `(row, column)` into the basis, moving as much as possible around its cycle.
    fn pivot(&mut self, row: usize, column: usize) {
        let path = self.cycle_path(row, column);
        let precision = self.condition.precision();

        let leaving = path.iter()
            .step_by(2)
            .filter_map(|&(i, j)| self.amounts[i][j].map(|amount| (i, j, amount)))
            .min_by(|(_, _, a), (_, _, b)| a.total_cmp(b));
        let Some((leaving_row, leaving_column, theta)) = leaving else {
            warn!("No cycle found for entering cell ({}, {})", row, column);
            return;
        };

        for (k, &(i, j)) in path.iter().enumerate() {
            if let Some(amount) = self.amounts[i][j].as_mut() {
                let shifted = if k % 2 == 0 { *amount - theta } else { *amount + theta };
                *amount = round(shifted, precision).max(0_f64);
            }
        }
        self.amounts[row][column] = Some(theta);
        self.amounts[leaving_row][leaving_column] = None;

        debug!(
            "Cell ({}, {}) entered with {}, cell ({}, {}) left",
            row, column, theta, leaving_row, leaving_column,
        );
    }
}

impl Presolve for TransportPlan {
    /// Method of potentials.
    fn optimize(&mut self) {
        let limit = MAX_PIVOTS_PER_CELL * self.condition.nr_rows() * self.condition.nr_columns();

        for iteration in 0..limit {
            let (u, v) = self.potentials();
            match self.entering_cell(&u, &v) {
                None => {
                    debug!("Optimal after {} pivots", iteration);
                    return;
                },
                Some((i, j, reduced_cost)) => {
                    debug!("Reduced cost {} at cell ({}, {})", reduced_cost, i, j);
                    self.pivot(i, j);
                },
            }
        }

        warn!("Stopped optimizing after {} pivots, solution may not be optimal", limit);
    }

    fn cost_func(&self) -> f64 {
        self.basic_cells()
            .map(|(i, j, amount)| self.condition.cost(i, j) * amount)
            .sum()
    }

    fn well_printed_string(&self) -> String {
        self.to_string()
    }
}
