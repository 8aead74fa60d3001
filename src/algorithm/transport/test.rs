use rstest::rstest;

use crate::algorithm::{Condition, Presolve, Solver, SolverError};
use crate::algorithm::transport::{Potentials, TransportCondition, TransportPlan};

fn presolve(supply: &[f64], demand: &[f64], costs: &[Vec<f64>], precision: u32) -> TransportPlan {
    Potentials.new_condition(supply, demand, costs, precision).unwrap()
        .minimal_taxes_method().unwrap()
}

fn basis(plan: &TransportPlan) -> Vec<(usize, usize, f64)> {
    plan.basic_cells().collect()
}

fn two_by_three() -> (Vec<f64>, Vec<f64>, Vec<Vec<f64>>) {
    (
        vec![100_f64, 150_f64],
        vec![80_f64, 90_f64, 80_f64],
        vec![vec![4_f64, 5_f64, 6_f64], vec![7_f64, 2_f64, 3_f64]],
    )
}

#[test]
fn minimal_taxes_method() {
    let (supply, demand, costs) = two_by_three();
    let plan = presolve(&supply, &demand, &costs, 0);

    assert_eq!(basis(&plan), vec![
        (0, 0, 80_f64),
        (0, 2, 20_f64),
        (1, 1, 90_f64),
        (1, 2, 60_f64),
    ]);
    assert_eq!(plan.cost_func(), 800_f64);
}

#[test]
fn degenerate_basis_has_m_plus_n_minus_one_cells() {
    let supply = [20_f64, 30_f64, 50_f64];
    let demand = [30_f64, 40_f64, 30_f64];
    let costs = vec![
        vec![8_f64, 6_f64, 10_f64],
        vec![9_f64, 12_f64, 13_f64],
        vec![14_f64, 9_f64, 16_f64],
    ];
    let plan = presolve(&supply, &demand, &costs, 0);

    assert_eq!(basis(&plan), vec![
        (0, 1, 20_f64),
        (1, 0, 30_f64),
        (2, 0, 0_f64),
        (2, 1, 20_f64),
        (2, 2, 30_f64),
    ]);
    assert_eq!(plan.cost_func(), 1050_f64);
}

#[test]
fn optimize_improves() {
    let supply = [6_f64, 1_f64, 10_f64];
    let demand = [7_f64, 5_f64, 3_f64, 2_f64];
    let costs = vec![
        vec![2_f64, 3_f64, 11_f64, 7_f64],
        vec![1_f64, 0_f64, 6_f64, 1_f64],
        vec![5_f64, 8_f64, 15_f64, 9_f64],
    ];
    let mut plan = presolve(&supply, &demand, &costs, 0);
    assert_eq!(plan.cost_func(), 112_f64);

    plan.optimize();
    assert_eq!(plan.cost_func(), 100_f64);
    assert_eq!(basis(&plan).len(), 3 + 4 - 1);

    // Still feasible
    for (i, &value) in supply.iter().enumerate() {
        let shipped = (0..4).filter_map(|j| plan.amount(i, j)).sum::<f64>();
        assert_eq!(shipped, value);
    }
    for (j, &value) in demand.iter().enumerate() {
        let received = (0..3).filter_map(|i| plan.amount(i, j)).sum::<f64>();
        assert_eq!(received, value);
    }
}

#[test]
fn optimize_through_degenerate_basis() {
    let supply = [20_f64, 30_f64, 50_f64];
    let demand = [30_f64, 40_f64, 30_f64];
    let costs = vec![
        vec![8_f64, 6_f64, 10_f64],
        vec![9_f64, 12_f64, 13_f64],
        vec![14_f64, 9_f64, 16_f64],
    ];
    let mut plan = presolve(&supply, &demand, &costs, 0);
    plan.optimize();

    assert_eq!(plan.cost_func(), 990_f64);
}

#[test]
fn optimal_presolve_is_kept() {
    let (supply, demand, costs) = two_by_three();
    let mut plan = presolve(&supply, &demand, &costs, 0);
    let before = basis(&plan);

    plan.optimize();
    assert_eq!(basis(&plan), before);
    assert_eq!(plan.cost_func(), 800_f64);
}

#[test]
fn single_cell() {
    let mut plan = presolve(&[5_f64], &[5_f64], &[vec![3_f64]], 0);
    plan.optimize();
    assert_eq!(basis(&plan), vec![(0, 0, 5_f64)]);
    assert_eq!(plan.cost_func(), 15_f64);
}

#[test]
fn fractional_quantities() {
    let supply = [0.25, 0.75];
    let demand = [0.5, 0.5];
    let costs = vec![vec![1_f64, 2_f64], vec![3_f64, 1_f64]];
    let mut plan = presolve(&supply, &demand, &costs, 2);
    plan.optimize();

    assert_eq!(basis(&plan), vec![(0, 0, 0.25), (1, 0, 0.25), (1, 1, 0.5)]);
    assert_eq!(plan.cost_func(), 1.5);
}

#[test]
fn well_printed_string() {
    let (supply, demand, costs) = two_by_three();
    let plan = presolve(&supply, &demand, &costs, 0);

    assert_eq!(plan.well_printed_string(), [
        "        | D1     | D2     | D3     | Supply ",
        "--------+--------+--------+--------+--------",
        " S1     | 4 [80] | 5      | 6 [20] | 100    ",
        " S2     | 7      | 2 [90] | 3 [60] | 150    ",
        "--------+--------+--------+--------+--------",
        " Demand | 80     | 90     | 80     | 250    ",
    ].join("\n"));
}

#[test]
fn precision_in_table() {
    let plan = presolve(&[1.5], &[1.5], &[vec![2_f64]], 3);
    assert!(plan.well_printed_string().contains("2 [1.500]"));
}

#[test]
fn unbalanced() {
    let condition = TransportCondition::new(
        &[10_f64, 10_f64],
        &[15_f64],
        &[vec![1_f64], vec![2_f64]],
        0,
    ).unwrap();

    assert_eq!(
        condition.minimal_taxes_method(),
        Err(SolverError::Unbalanced { supply: 20_f64, demand: 15_f64 }),
    );
}

#[test]
fn rounding_within_precision_is_balanced() {
    let condition = TransportCondition::new(
        &[0.1, 0.2],
        &[0.3],
        &[vec![1_f64], vec![1_f64]],
        1,
    ).unwrap();

    assert!(condition.minimal_taxes_method().is_ok());
}

#[test]
fn shape_errors() {
    assert!(matches!(
        TransportCondition::new(&[1_f64], &[1_f64], &[vec![1_f64], vec![1_f64]], 0),
        Err(SolverError::Shape(_)),
    ));
    assert!(matches!(
        TransportCondition::new(&[1_f64, 1_f64], &[2_f64], &[vec![1_f64], vec![1_f64, 2_f64]], 0),
        Err(SolverError::Shape(_)),
    ));
    assert_eq!(
        TransportCondition::new(&[], &[1_f64], &[], 0),
        Err(SolverError::EmptyProblem { nr_supply: 0, nr_demand: 1 }),
    );
}

#[test]
fn quantity_errors() {
    assert_eq!(
        TransportCondition::new(&[1_f64, -1_f64], &[0_f64], &[vec![1_f64], vec![1_f64]], 0),
        Err(SolverError::NegativeQuantity { kind: "supply point", index: 2, value: -1_f64 }),
    );
}

#[test]
fn precision_out_of_range() {
    assert_eq!(
        TransportCondition::new(&[1_f64], &[1_f64], &[vec![1_f64]], 11),
        Err(SolverError::Precision { precision: 11, maximum: 10 }),
    );
    assert!(TransportCondition::new(&[1_f64], &[1_f64], &[vec![1_f64]], 10).is_ok());
}

#[rstest]
#[case(6)]
#[case(8)]
#[case(9)]
#[case(10)]
fn large_balanced_totals(#[case] precision: u32) {
    let condition = TransportCondition::new(
        &[1234567.1, 2345678.2],
        &[3580245.3],
        &[vec![1_f64], vec![1_f64]],
        precision,
    ).unwrap();

    let plan = condition.minimal_taxes_method().unwrap();
    assert!((plan.cost_func() - 3580245.3).abs() < 1e-6);
}

#[test]
fn huge_quantities() {
    let half = f64::MAX / 2_f64;

    let condition = TransportCondition::new(&[half], &[half + 1e300], &[vec![1_f64]], 10).unwrap();
    assert_eq!(condition.supply(), &[half]);
    assert!(matches!(condition.minimal_taxes_method(), Err(SolverError::Unbalanced { .. })));

    let condition = TransportCondition::new(
        &[f64::MAX, f64::MAX],
        &[f64::MAX, f64::MAX],
        &[vec![1_f64, 1_f64], vec![1_f64, 1_f64]],
        0,
    ).unwrap();
    assert!(matches!(condition.minimal_taxes_method(), Err(SolverError::NonFiniteTotal { .. })));
}
