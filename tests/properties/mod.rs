//! # Properties that hold for every solve
//!
//! A grid of small problems is generated and solved with both pivot rules.
use itertools::iproduct;

use dense_simplex::algorithm::config::{SolverConfig, EFFORT_CUTOFF};
use dense_simplex::algorithm::strategy::pivot_rule::{MaxScaledRatio, PivotRule, SmallestRatio};
use dense_simplex::{ConstraintRow, ConstraintType, Problem, SolveOutput};

const COEFFICIENTS: [f64; 4] = [-1f64, 0f64, 1f64, 2f64];
const RIGHT_HAND_SIDES: [f64; 2] = [1f64, 3f64];
const OPERATIONS: [ConstraintType; 3] = [ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal];

fn problems() -> impl Iterator<Item = Problem<f64>> {
    iproduct!(COEFFICIENTS, COEFFICIENTS, COEFFICIENTS, COEFFICIENTS, RIGHT_HAND_SIDES, OPERATIONS, OPERATIONS)
        .map(|(a, b, c, d, rhs, first, second)| Problem::new(
            vec![
                ConstraintRow::new(vec![a, b], first, rhs),
                ConstraintRow::new(vec![c, d], second, 4f64 - rhs),
            ],
            vec![1f64, 1f64],
        ))
}

fn check(problem: &Problem<f64>, output: &SolveOutput<f64>) {
    match &output.solution {
        None => assert!(output.iterations.is_empty()),
        Some(solution) => {
            assert!(!output.iterations.is_empty());
            assert!(output.iterations.len() <= EFFORT_CUTOFF + 2);
            for (index, iteration) in output.iterations.iter().enumerate() {
                assert_eq!(iteration.number, index);
            }
            assert_eq!(output.iterations[0].pivot, 0f64);

            let last = output.iterations.last().unwrap();
            assert!(last.matrix.last().unwrap().iter().all(|&value| value <= 0f64));

            assert_eq!(solution.values.len(), problem.nr_variables());
            assert_eq!(solution.objective_value, problem.objective_value(&solution.values));
        },
    }
}

fn check_rule<PR: PivotRule>() {
    let config = SolverConfig::default();
    for problem in problems() {
        let output = problem.solve_with::<PR>(&config).unwrap();
        check(&problem, &output);
        assert_eq!(problem.solve_with::<PR>(&config).unwrap(), output);
    }
}

#[test]
fn max_scaled_ratio() {
    check_rule::<MaxScaledRatio>();
}

#[test]
fn smallest_ratio() {
    check_rule::<SmallestRatio>();
}
