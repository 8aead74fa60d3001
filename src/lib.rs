//! # A transportation problem workbench
//!
//! Problems are read from a plain text matrix: every row but the last holds the costs of shipping
//! from one supply point to each demand point, followed by the supply of that point. The last row
//! holds the demands. An initial plan is built with the least cost method and then improved with
//! the method of potentials.
//!
//! The same steps are available in batch, through `opti-cli`, and interactively, through
//! `opti-tui`, which walks the operator through the stages of the `workflow` module.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod tui;
pub mod workflow;
