//! # Choosing a problem file
//!
//! The load stage asks a `FileChooser` for a path. Choosers may block until the operator has made
//! a choice.
use std::io;
use std::path::PathBuf;
use std::process::Command;

use log::debug;
use thiserror::Error;

/// Why no file was chosen.
#[derive(Debug, Error)]
pub enum ChooserError {
    /// The operator didn't choose a file.
    #[error("file selection was cancelled")]
    Cancelled,
    /// The chosen path is not an existing file.
    #[error("file \"{}\" does not exist", .0.display())]
    NotFound(PathBuf),
    /// The chooser program failed.
    #[error("{context}: {stderr}")]
    Process {
        /// What was being done.
        context: String,
        /// Error output of the program.
        stderr: String,
    },
    /// The chooser program could not be started.
    #[error(transparent)]
    IO(#[from] io::Error),
}

/// Obtains the path of a problem file from the operator.
pub trait FileChooser {
    /// Choose a file.
    ///
    /// # Arguments
    ///
    /// * `input`: Current text of the load region, which a chooser may use as the choice or as a
    /// starting point.
    fn choose(&mut self, input: &str) -> Result<PathBuf, ChooserError>;
}

/// Takes the path the operator typed into the load region.
#[derive(Copy, Clone, Debug, Default)]
pub struct TypedPath;

impl FileChooser for TypedPath {
    fn choose(&mut self, input: &str) -> Result<PathBuf, ChooserError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ChooserError::Cancelled);
        }

        let path = PathBuf::from(input);
        if path.is_file() {
            Ok(path)
        } else {
            Err(ChooserError::NotFound(path))
        }
    }
}

/// Opens a native file selection dialog through `zenity`.
#[derive(Clone, Debug)]
pub struct Zenity {
    program: PathBuf,
}

impl Default for Zenity {
    fn default() -> Self {
        Self::with_program("zenity")
    }
}

impl Zenity {
    /// Use a specific executable instead of `zenity` from the search path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl FileChooser for Zenity {
    fn choose(&mut self, input: &str) -> Result<PathBuf, ChooserError> {
        let mut command = Command::new(&self.program);
        command.arg("--file-selection").arg("--title=Choose a problem file");
        let input = input.trim();
        if !input.is_empty() {
            command.arg(format!("--filename={}", input));
        }
        debug!("Running {:?}", command);

        let output = command.output()?;
        if output.status.success() {
            let chosen = String::from_utf8_lossy(&output.stdout);
            let chosen = chosen.trim_end_matches(['\r', '\n']);
            if chosen.is_empty() {
                Err(ChooserError::Cancelled)
            } else {
                Ok(PathBuf::from(chosen))
            }
        } else if output.status.code() == Some(1) {
            // Closing the dialog or pressing cancel
            Err(ChooserError::Cancelled)
        } else {
            Err(ChooserError::Process {
                context: format!("{} failed with {}", self.program.display(), output.status),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}
