use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::LevelFilter;

use opti::algorithm::transport::Potentials;
use opti::logging::init_logger;
use opti::tui;
use opti::workflow::chooser::{FileChooser, TypedPath, Zenity};
use opti::workflow::Workflow;

/// Walk through loading, configuring and solving a transportation problem in the terminal.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// File to put in the load region at startup
    problem_file: Option<PathBuf>,
    /// Initial number of decimals used for quantities and costs
    #[arg(long, default_value_t = 2)]
    precision: u32,
    /// Choose files with a zenity dialog instead of typing the path
    #[arg(long)]
    dialog: bool,
    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let opts = Opts::parse();

    if let Some(log_file) = &opts.log_file {
        if let Err(error) = init_logger(LevelFilter::Debug, Some(log_file)) {
            eprintln!("{}", error);
            exit(1);
        }
    }

    let result = if opts.dialog {
        start(Zenity::default(), &opts)
    } else {
        start(TypedPath, &opts)
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        exit(1);
    }
}

fn start<C: FileChooser>(chooser: C, opts: &Opts) -> std::io::Result<()> {
    let mut workflow = Workflow::new(Potentials, chooser, opts.precision);
    if let Some(path) = &opts.problem_file {
        workflow = workflow.with_file(path);
    }

    tui::run(&mut workflow)
}
