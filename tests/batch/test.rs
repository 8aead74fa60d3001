use std::process::Command;

use opti::algorithm::transport::Potentials;
use opti::io::error::{ImportError, ParseError};
use opti::pipeline::{solve_file, SolveError, write_report};

use crate::batch::get_test_file_path;

fn report(name: &str, precision: u32, timing: bool) -> String {
    let solved = solve_file(&Potentials, &get_test_file_path(name), precision).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, &solved, timing).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn example() {
    let table = [
        "        | D1     | D2     | D3     | Supply ",
        "--------+--------+--------+--------+--------",
        " S1     | 4 [80] | 5      | 6 [20] | 100    ",
        " S2     | 7      | 2 [90] | 3 [60] | 150    ",
        "--------+--------+--------+--------+--------",
        " Demand | 80     | 90     | 80     | 250    ",
    ].join("\n");

    assert_eq!(
        report("example", 0, false),
        format!(
            "Minimal taxes method\n{table}\nCost function: 800\nOptimizing...\n{table}\nCost function: 800\n",
        ),
    );
}

#[test]
fn improvable() {
    let report = report("improvable", 0, false);

    let costs = report.lines()
        .filter_map(|line| line.strip_prefix("Cost function: "))
        .collect::<Vec<_>>();
    assert_eq!(costs, vec!["112", "100"]);
}

#[test]
fn timing() {
    let report = report("example", 0, true);

    assert_eq!(report.lines().filter(|line| line.starts_with("Elapsed: ")).count(), 2);
    let lines = report.lines().collect::<Vec<_>>();
    assert!(lines[lines.len() - 2].starts_with("Cost function: "));
    assert!(lines[lines.len() - 1].starts_with("Elapsed: "));
}

#[test]
fn decimal_comma() {
    let report = report("decimal_comma", 2, false);

    assert!(report.contains("1 [0.25]"));
    assert!(report.ends_with("Cost function: 1.50\n"));
}

#[test]
fn malformed() {
    let result = solve_file(&Potentials, &get_test_file_path("malformed"), 2);

    match result {
        Err(SolveError::Import(ImportError::Parse(error))) => assert_eq!(
            error,
            ParseError::MalformedNumber { line: 2, column: 2, token: "abc".to_string() },
        ),
        _ => panic!("expected a parse error"),
    }
}

#[test]
fn one_line() {
    let result = solve_file(&Potentials, &get_test_file_path("one_line"), 2);

    assert!(matches!(
        result,
        Err(SolveError::Import(ImportError::Parse(ParseError::EmptyInput { lines: 1 }))),
    ));
}

#[test]
fn missing_file() {
    let result = solve_file(&Potentials, &get_test_file_path("no_such_problem"), 2);

    assert!(matches!(result, Err(SolveError::Import(ImportError::IO(_)))));
}

#[test]
fn binary_prints_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_opti-cli"))
        .arg("--precision=0")
        .arg(get_test_file_path("example"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Minimal taxes method\n"));
    assert!(stdout.ends_with("Cost function: 800\n"));
}

#[test]
fn binary_without_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_opti-cli")).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stderr).unwrap().trim(), "SRC field is empty");
}

#[test]
fn binary_reports_errors() {
    let output = Command::new(env!("CARGO_BIN_EXE_opti-cli"))
        .arg(get_test_file_path("unbalanced"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap().trim(),
        "total supply 10 does not match total demand 11",
    );
}
