//! # Printing of transportation plans
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::once;

use itertools::Itertools;

use crate::algorithm::transport::TransportPlan;

impl Display for TransportPlan {
    /// A bordered table with a row per supply point and a column per demand point.
    ///
    /// Basic cells read `cost [amount]`, other cells only show the cost. The last column holds the
    /// supply, the last row the demand and, in its corner, the total quantity shipped.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let condition = self.condition();
        let precision = condition.precision() as usize;
        let quantity = |value: f64| format!("{:.*}", precision, value);

        let header = once(String::new())
            .chain((1..=condition.nr_columns()).map(|j| format!("D{}", j)))
            .chain(once("Supply".to_string()))
            .collect_vec();
        let body = (0..condition.nr_rows())
            .map(|i| {
                once(format!("S{}", i + 1))
                    .chain((0..condition.nr_columns()).map(|j| match self.amount(i, j) {
                        Some(amount) => format!("{} [{}]", condition.cost(i, j), quantity(amount)),
                        None => condition.cost(i, j).to_string(),
                    }))
                    .chain(once(quantity(condition.supply()[i])))
                    .collect_vec()
            })
            .collect_vec();
        let footer = once("Demand".to_string())
            .chain(condition.demand().iter().map(|&demand| quantity(demand)))
            .chain(once(quantity(condition.demand().iter().sum())))
            .collect_vec();

        let widths = (0..header.len())
            .map(|column| {
                once(&header).chain(&body).chain(once(&footer))
                    .map(|row| row[column].len())
                    .max()
                    .unwrap_or_default()
            })
            .collect_vec();

        let line = |row: &[String]| {
            row.iter()
                .zip(&widths)
                .map(|(text, &width)| format!(" {:<width$} ", text, width = width))
                .join("|")
        };
        let separator = widths.iter().map(|width| "-".repeat(width + 2)).join("+");

        writeln!(f, "{}", line(&header))?;
        writeln!(f, "{}", separator)?;
        for row in &body {
            writeln!(f, "{}", line(row))?;
        }
        writeln!(f, "{}", separator)?;
        write!(f, "{}", line(&footer))
    }
}
