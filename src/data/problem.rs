//! # Problem instances
//!
//! A transportation problem as read from a file: a cost per unit for every (supply point, demand
//! point) pair, and the quantities available and required.

/// A transportation problem, not yet validated by a solver.
///
/// Rows correspond to supply points, columns to demand points. The shape is not enforced here: an
/// importer passes rows of differing lengths through as-is, and the solver decides whether it can
/// work with them (see `ProblemInstance::is_rectangular`).
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemInstance {
    /// Cost of moving a single unit from supply point `i` to demand point `j`, at `costs[i][j]`.
    pub costs: Vec<Vec<f64>>,
    /// Quantity available at each supply point, one per row of `costs`.
    pub supply: Vec<f64>,
    /// Quantity required at each demand point, one per column of `costs`.
    pub demand: Vec<f64>,
}

impl ProblemInstance {
    /// Create a new instance.
    ///
    /// A plain constructor, no checks are done.
    pub fn new(costs: Vec<Vec<f64>>, supply: Vec<f64>, demand: Vec<f64>) -> Self {
        Self { costs, supply, demand }
    }

    /// Number of supply points.
    pub fn nr_supply_points(&self) -> usize {
        self.supply.len()
    }

    /// Number of demand points.
    pub fn nr_demand_points(&self) -> usize {
        self.demand.len()
    }

    /// Whether the cost matrix has a row per supply point and a column per demand point.
    pub fn is_rectangular(&self) -> bool {
        self.costs.len() == self.supply.len()
            && self.costs.iter().all(|row| row.len() == self.demand.len())
    }

    /// Rebuild the lines of an input file from this instance.
    ///
    /// Each cost row is followed by its supply value; the last line holds the demand values. Used
    /// to compare a parsed instance against the text it came from.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.costs.iter()
            .zip(&self.supply)
            .map(|(costs, &supply)| {
                let mut row = costs.clone();
                row.push(supply);
                row
            })
            .chain(std::iter::once(self.demand.clone()))
            .collect()
    }
}
