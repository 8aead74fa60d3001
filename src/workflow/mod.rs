//! # Interactive workflow
//!
//! The operator moves through a fixed cycle of stages: load a file, set a precision, process the
//! problem and view the output. Advancing runs the action of the current stage; only if it
//! succeeds does the next stage become active. A failing stage stays active, with its error on
//! display, so the operator can correct the input and try again.
//!
//! All state lives in the `SessionState` owned by the `Workflow`.
use std::path::{Path, PathBuf};

use enum_map::{Enum, enum_map, EnumMap};
use log::{debug, info, warn};
use thiserror::Error;

use crate::algorithm::Solver;
use crate::data::solution::Solved;
use crate::pipeline::{solve_file, SolveError};
use crate::render::{Region, Regions, render};
use crate::workflow::chooser::{ChooserError, FileChooser};
use crate::workflow::precision::PrecisionError;

pub mod chooser;
pub mod precision;

/// A step of the workflow.
///
/// The order of the variants is the order of the cycle.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Choose a problem file.
    Load,
    /// Read the number of decimals.
    Precision,
    /// Solve the problem.
    Process,
    /// Show the results.
    Output,
}

impl Stage {
    /// Position of the stage in the cycle, starting at 0.
    pub fn index(self) -> usize {
        self.into_usize()
    }

    /// Stage at a position in the cycle, wrapping around.
    pub fn from_index(index: usize) -> Self {
        Self::from_usize(index % Self::LENGTH)
    }

    /// The stage that follows this one; `Output` is followed by `Load`.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Why a stage could not be completed.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The load stage got no file.
    #[error("no file chosen: {0}")]
    Chooser(#[from] ChooserError),
    /// The precision region holds no valid precision.
    #[error("invalid precision: {0}")]
    Precision(#[from] PrecisionError),
    /// The process stage was reached without a file.
    #[error("no problem file loaded yet")]
    NoFile,
    /// The file couldn't be read or solved.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Everything the workflow remembers between operator actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    active_stage_index: usize,
    filename: Option<PathBuf>,
    precision: u32,
    last_error: Option<String>,
}

impl SessionState {
    fn new(precision: u32) -> Self {
        Self {
            active_stage_index: Stage::Load.index(),
            filename: None,
            precision,
            last_error: None,
        }
    }

    /// Position of the active stage in the cycle.
    pub fn active_stage_index(&self) -> usize {
        self.active_stage_index
    }

    /// The file chosen in the last successful load stage.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// The precision accepted in the last successful precision stage.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Message of the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

type Action<S, C> = fn(&mut Workflow<S, C>) -> Result<(), WorkflowError>;

/// What belongs to a stage: its name, the region it reads from and its action.
struct Transition<S, C> {
    name: &'static str,
    region: Region,
    action: Action<S, C>,
}

/// The stage machine, with the collaborators its stages use.
pub struct Workflow<S, C> {
    session: SessionState,
    regions: Regions,
    transitions: EnumMap<Stage, Transition<S, C>>,
    solver: S,
    chooser: C,
    solved: Option<Solved>,
}

impl<S: Solver, C: FileChooser> Workflow<S, C> {
    /// Create a workflow at the load stage.
    ///
    /// # Arguments
    ///
    /// * `solver`: Used by the process stage.
    /// * `chooser`: Used by the load stage.
    /// * `precision`: Initial precision, shown in the precision region.
    pub fn new(solver: S, chooser: C, precision: u32) -> Self {
        let transitions = enum_map! {
            Stage::Load => Transition { name: "load", region: Region::Load, action: Self::load },
            Stage::Precision => Transition { name: "precision", region: Region::Precision, action: Self::precision },
            Stage::Process => Transition { name: "process", region: Region::Process, action: Self::process },
            Stage::Output => Transition { name: "output", region: Region::Output, action: Self::output },
        };

        let mut regions = Regions::default();
        regions.set(Region::Precision, precision.to_string());

        Self {
            session: SessionState::new(precision),
            regions,
            transitions,
            solver,
            chooser,
            solved: None,
        }
    }

    /// Put a path in the load region, for the load stage to pick up.
    pub fn with_file(mut self, path: &Path) -> Self {
        self.regions.set(Region::Load, path.display().to_string());
        self
    }

    /// What the workflow remembers.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Text of all regions.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Regions, for the operator to edit.
    pub fn regions_mut(&mut self) -> &mut Regions {
        &mut self.regions
    }

    /// The stage whose action runs on the next advance.
    pub fn active_stage(&self) -> Stage {
        Stage::from_index(self.session.active_stage_index)
    }

    /// Name of a stage.
    pub fn stage_name(&self, stage: Stage) -> &'static str {
        self.transitions[stage].name
    }

    /// Region a stage reads its input from.
    pub fn stage_region(&self, stage: Stage) -> Region {
        self.transitions[stage].region
    }

    /// Result of the last successful process stage.
    pub fn solved(&self) -> Option<&Solved> {
        self.solved.as_ref()
    }

    /// Run the action of the active stage and move to the next stage if it succeeds.
    ///
    /// # Return value
    ///
    /// The stage that is active after the call.
    ///
    /// # Errors
    ///
    /// The error of the failed action. It is also recorded as the last error and shown in the
    /// error region; the active stage doesn't change.
    pub fn advance(&mut self) -> Result<Stage, WorkflowError> {
        let current = self.active_stage();
        let next = current.next();
        let action = self.transitions[current].action;

        match action(self) {
            Ok(()) => {
                self.session.active_stage_index = next.index();
                self.session.last_error = None;
                render(&mut self.regions, None, None);
                debug!("Stage {} done, {} is active", self.stage_name(current), self.stage_name(next));

                Ok(next)
            },
            Err(error) => {
                warn!("Stage {} failed: {}", self.stage_name(current), error);
                self.session.last_error = Some(error.to_string());
                render(&mut self.regions, None, self.session.last_error.as_deref());

                Err(error)
            },
        }
    }

    fn load(&mut self) -> Result<(), WorkflowError> {
        let input = self.regions.text(Region::Load).to_string();
        let path = self.chooser.choose(&input)?;
        info!("Chose problem file \"{}\"", path.display());

        self.regions.set(Region::Load, path.display().to_string());
        self.session.filename = Some(path);
        Ok(())
    }

    fn precision(&mut self) -> Result<(), WorkflowError> {
        self.session.precision = precision::parse(self.regions.text(Region::Precision))?;
        Ok(())
    }

    fn process(&mut self) -> Result<(), WorkflowError> {
        let file_path = self.session.filename.as_deref().ok_or(WorkflowError::NoFile)?;
        let solved = solve_file(&self.solver, file_path, self.session.precision)?;

        let summary = format!(
            "solved \"{}\" with precision {}",
            file_path.display(), self.session.precision,
        );
        self.regions.set(Region::Process, summary);
        render(&mut self.regions, Some(&solved), None);
        self.solved = Some(solved);
        Ok(())
    }

    fn output(&mut self) -> Result<(), WorkflowError> {
        Ok(())
    }
}
