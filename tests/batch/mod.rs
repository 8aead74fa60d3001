//! # Batch solving of problem files
//!
//! Small hand-made matrix files, solved the way `opti-cli` does it.
use std::path::{Path, PathBuf};

/// # Reports and exit codes
mod test;

/// Relative path of the folder where the matrix files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
pub(crate) fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}
