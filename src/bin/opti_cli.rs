use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::LevelFilter;

use opti::algorithm::transport::Potentials;
use opti::logging::init_logger;
use opti::pipeline::{solve_file, write_report};

/// Solve a transportation problem file and print the tables before and after optimizing.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// File containing the cost matrix with supplies, and the demands on the last line
    problem_file: Option<PathBuf>,
    /// Also print how long each step took
    #[arg(long)]
    timing: bool,
    /// Number of decimals used for quantities and costs
    #[arg(long, default_value_t = 2)]
    precision: u32,
    /// Most verbose log level written to standard error
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() {
    let opts = Opts::parse();

    if let Err(error) = init_logger(opts.log_level, None) {
        eprintln!("{}", error);
        exit(1);
    }

    let Some(path) = opts.problem_file else {
        eprintln!("SRC field is empty");
        exit(1);
    };

    let solved = match solve_file(&Potentials, &path, opts.precision) {
        Ok(solved) => solved,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    };

    if let Err(error) = write_report(&mut io::stdout().lock(), &solved, opts.timing) {
        eprintln!("{}", error);
        exit(1);
    }
}
