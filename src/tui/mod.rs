//! # Terminal interface
//!
//! A single loop reads a key, applies it to the workflow and redraws. Stage actions run on this
//! loop, so the screen doesn't update while a file chooser is open or a problem is being solved.
use std::io;

use log::{debug, info};
use ratatui::crossterm::event::{read, Event};
use ratatui::DefaultTerminal;

use crate::algorithm::Solver;
use crate::tui::event::Action;
use crate::workflow::chooser::FileChooser;
use crate::workflow::Workflow;

pub mod event;
pub mod view;

/// Take over the terminal and run the workflow until the operator quits.
///
/// The terminal is restored before returning, also when drawing or reading fails.
///
/// # Errors
///
/// If the terminal can't be set up, drawn to or read from.
pub fn run<S: Solver, C: FileChooser>(workflow: &mut Workflow<S, C>) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    info!("Terminal interface started");

    let result = event_loop(&mut terminal, workflow);
    ratatui::restore();
    info!("Terminal interface stopped");

    result
}

fn event_loop<S: Solver, C: FileChooser>(
    terminal: &mut DefaultTerminal,
    workflow: &mut Workflow<S, C>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| view::draw(frame, workflow))?;

        if let Event::Key(key) = read()? {
            if let Some(action) = Action::from_key(key, workflow.active_stage()) {
                if !dispatch(workflow, action) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply an action to the workflow.
///
/// # Return value
///
/// Whether the interface should keep running.
pub fn dispatch<S: Solver, C: FileChooser>(workflow: &mut Workflow<S, C>, action: Action) -> bool {
    debug!("Dispatching {:?}", action);

    let region = workflow.stage_region(workflow.active_stage());
    match action {
        Action::Quit => return false,
        Action::Advance => {
            // The workflow shows the error itself
            let _ = workflow.advance();
        },
        Action::Insert(character) => workflow.regions_mut().push_char(region, character),
        Action::Delete => workflow.regions_mut().pop_char(region),
        Action::Scroll { lines, columns } => workflow.regions_mut().scroll_by(lines, columns),
        Action::ScrollHome => workflow.regions_mut().scroll_home(),
    }

    true
}
