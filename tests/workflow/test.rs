use std::path::PathBuf;

use opti::render::Region;
use opti::workflow::{Stage, Workflow, WorkflowError};
use opti::workflow::chooser::ChooserError;

use crate::workflow::{Fixed, problem_file, Scripted};

#[test]
fn full_cycle() {
    let solver = Fixed::default();
    let constructed = solver.constructed.clone();
    let path = problem_file("example");
    let mut workflow = Workflow::new(solver, Scripted::new([Ok(path.clone())]), 1);

    assert_eq!(workflow.advance().unwrap(), Stage::Precision);
    assert_eq!(workflow.session().filename(), Some(path.as_path()));
    assert_eq!(workflow.advance().unwrap(), Stage::Process);
    assert_eq!(workflow.advance().unwrap(), Stage::Output);
    assert_eq!(constructed.get(), 1);

    assert_eq!(
        workflow.regions().text(Region::Output),
        "Minimal taxes method\n4 cells at 20.0\nCost function: 20.0\n\nOptimizing...\n4 cells at 10.0\nCost function: 10.0\n",
    );
    assert_eq!(workflow.regions().text(Region::Cost), "20.0 -> 10.0");
    assert!(!workflow.regions().text(Region::Elapsed).is_empty());

    assert_eq!(workflow.advance().unwrap(), Stage::Load);
    assert_eq!(workflow.session().active_stage_index(), 0);
}

#[test]
fn failure_never_moves() {
    let mut workflow = Workflow::new(Fixed::default(), Scripted::new(Vec::new()), 2);

    for _ in 0..3 {
        assert!(matches!(workflow.advance(), Err(WorkflowError::Chooser(ChooserError::Cancelled))));
        assert_eq!(workflow.active_stage(), Stage::Load);
    }
    assert!(workflow.session().last_error().is_some());
}

#[test]
fn process_without_readable_file() {
    let solver = Fixed::default();
    let constructed = solver.constructed.clone();
    let chooser = Scripted::new([Ok(PathBuf::from("/opti/no/such/file.txt"))]);
    let mut workflow = Workflow::new(solver, chooser, 2);
    workflow.advance().unwrap();
    workflow.advance().unwrap();

    assert!(matches!(workflow.advance(), Err(WorkflowError::Solve(_))));
    assert_eq!(workflow.active_stage(), Stage::Process);
    assert_eq!(constructed.get(), 0);
    assert_eq!(workflow.regions().text(Region::Output), "");
}

#[test]
fn malformed_file_is_reported() {
    let chooser = Scripted::new([Ok(problem_file("malformed"))]);
    let mut workflow = Workflow::new(Fixed::default(), chooser, 2);
    workflow.advance().unwrap();
    workflow.advance().unwrap();

    assert!(workflow.advance().is_err());
    assert_eq!(
        workflow.regions().text(Region::Error),
        "malformed number \"abc\" at line 2, column 2",
    );
}

#[test]
fn precision_takes_first_valid_token() {
    let chooser = Scripted::new([Ok(problem_file("example"))]);
    let mut workflow = Workflow::new(Fixed::default(), chooser, 2);
    workflow.advance().unwrap();

    workflow.regions_mut().set(Region::Precision, "-2");
    assert!(matches!(workflow.advance(), Err(WorkflowError::Precision(_))));
    assert_eq!(workflow.session().precision(), 2);

    workflow.regions_mut().set(Region::Precision, "x -2 3 5");
    assert_eq!(workflow.advance().unwrap(), Stage::Process);
    assert_eq!(workflow.session().precision(), 3);
    assert_eq!(workflow.regions().text(Region::Error), "");

    workflow.advance().unwrap();
    assert_eq!(workflow.solved().unwrap().precision, 3);
    assert_eq!(workflow.regions().text(Region::Cost), "20.000 -> 10.000");
}

#[test]
fn solver_errors_are_shown() {
    let chooser = Scripted::new([Ok(problem_file("example"))]);
    let mut workflow = Workflow::new(opti::algorithm::transport::Potentials, chooser, 11);
    workflow.advance().unwrap();
    workflow.advance().unwrap();

    assert!(workflow.advance().is_err());
    assert_eq!(
        workflow.session().last_error(),
        Some("precision 11 is out of range, at most 10 decimals are supported"),
    );
}
