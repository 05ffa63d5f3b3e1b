use approx::assert_abs_diff_eq;

use dense_simplex::algorithm::config::SolverConfig;
use dense_simplex::algorithm::error::SolveError;
use dense_simplex::algorithm::strategy::pivot_rule::{MaxScaledRatio, SmallestRatio};
use dense_simplex::data::linear_program::error::ConfigurationError;
use dense_simplex::io::error::ImportError;
use dense_simplex::io::import;
use dense_simplex::{solve, ConstraintType, Problem, SolveOutput};

use super::get_test_file_path;

fn load(name: &str) -> Problem<f64> {
    import(&get_test_file_path(name)).unwrap()
}

#[test]
fn reference() {
    let problem = load("reference");
    assert_eq!(problem, Problem::default());

    let output = problem.solve().unwrap();
    assert_eq!(output.iterations.len(), 3);
    assert_eq!(output.iterations[1].pivot, 2f64);
    assert_eq!(output.iterations[2].pivot, 3f64);
    assert_eq!(output.iterations[2].matrix[3], vec![0f64, -1f64, 0f64, 0f64, -0.5f64, 0f64, -4f64]);

    let solution = output.solution.unwrap();
    let expected = [2f64 / 3f64, 0f64, 10f64 / 3f64];
    for (value, expected) in solution.values.iter().zip(expected) {
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(solution.objective_value, 4f64, epsilon = 1e-12);

    // Feasibility of the reported point
    for row in problem.rows() {
        let lhs = row.values.iter().zip(&solution.values).map(|(a, x)| a * x).sum::<f64>();
        assert!(lhs <= row.constraint + 1e-9);
    }
}

#[test]
fn mixed() {
    let problem = load("mixed");
    assert_eq!(problem.rows()[1].operation, ConstraintType::Greater);

    let output = problem.solve().unwrap();
    assert_eq!(output.iterations.len(), 2);
    assert_eq!(output.iterations[0].matrix, vec![
        vec![1f64, 1f64, 1f64, 0f64, 4f64],
        vec![-1f64, 1f64, 0f64, -1f64, -2f64],
        vec![1f64, 2f64, 0f64, 0f64, 0f64],
    ]);
    assert_eq!(output.iterations[1].matrix, vec![
        vec![1f64, 1f64, 1f64, 0f64, 4f64],
        vec![-2f64, 0f64, -1f64, -1f64, -6f64],
        vec![-1f64, 0f64, -2f64, 0f64, -8f64],
    ]);

    let solution = output.solution.unwrap();
    assert_eq!(solution.values, vec![0f64, 4f64]);
    assert_eq!(solution.objective_value, 8f64);
}

#[test]
fn equality() {
    let problem = load("equality");

    let output = problem.solve().unwrap();
    // No slack column for the equality row
    assert_eq!(output.iterations[0].matrix, vec![
        vec![1f64, 1f64, 0f64, 2f64],
        vec![1f64, 0f64, 1f64, 1f64],
        vec![1f64, 1f64, 0f64, 0f64],
    ]);
    assert_eq!(output.iterations.len(), 2);

    let solution = output.solution.unwrap();
    assert_eq!(solution.values, vec![0f64, 2f64]);
    assert_eq!(solution.objective_value, 2f64);
}

#[test]
fn unbounded() {
    let problem = load("unbounded");

    assert_eq!(problem.solve(), Ok(SolveOutput::no_solution()));
    assert_eq!(
        problem.solve_detailed::<MaxScaledRatio>(&SolverConfig::default()),
        Ok(Err(SolveError::NoFeasiblePivot { iteration: 1 })),
    );
    assert_eq!(
        problem.solve_detailed::<SmallestRatio>(&SolverConfig::default()),
        Ok(Err(SolveError::NoFeasiblePivot { iteration: 1 })),
    );
}

#[test]
fn malformed() {
    let result = import::<f64>(&get_test_file_path("malformed"));
    assert!(matches!(
        result,
        Err(ImportError::Configuration(ConfigurationError::ObjectiveLength { expected: 2, found: 3 })),
    ));
}

#[test]
fn edited() {
    let problem = load("reference")
        .without_constraint()
        .without_variable();
    assert_eq!(problem.nr_constraints(), 2);
    assert_eq!(problem.nr_variables(), 2);

    // max x1 + x2 subject to -x1 + 3x2 <= 6 and 2x1 + 4x2 <= 8
    let output = solve(problem.rows(), problem.objective()).unwrap();
    let solution = output.solution.unwrap();
    assert_abs_diff_eq!(solution.objective_value, 4f64, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.values[0], 4f64, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.values[1], 0f64, epsilon = 1e-12);
}

#[test]
fn json_output() {
    let output = load("reference").solve().unwrap();

    let text = serde_json::to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["iterations"].as_array().unwrap().len(), 3);
    assert_eq!(value["iterations"][1]["iterationNum"], 1);
    assert!(value["iterations"][1].get("number").is_none());
    assert!(value["solution"]["objective_value"].is_number());
}
