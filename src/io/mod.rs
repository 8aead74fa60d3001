//! # Reading of transportation problems
//!
//! This module provides read functionality for the plain-text matrix format.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::data::problem::ProblemInstance;
use crate::io::error::ImportError;

pub mod error;
pub mod matrix;

/// Import a problem from a file.
///
/// The file is opened, read completely and closed again before parsing starts, so no handle
/// outlives this call.
///
/// # Errors
///
/// When a file cannot be found or read, or when its contents are not a well-formed matrix.
pub fn import(file_path: &Path) -> Result<ProblemInstance, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)?
        .read_to_string(&mut program)?;
    info!("Read {} bytes from \"{}\"", program.len(), file_path.display());

    let problem = matrix::parse(&program)?;
    info!(
        "Parsed {} supply points and {} demand points",
        problem.nr_supply_points(), problem.nr_demand_points(),
    );

    Ok(problem)
}
