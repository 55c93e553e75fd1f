//! Finds a real root of a polynomial supplied on the command line.
//!
//! Coefficients are given in descending power order:
//!
//! ```text
//! cargo run --example find_root -- 1 -2 0 -5
//! ```
//!
//! When no coefficients are given, or they fail to parse, the default
//! cubic `x^3 - 2x^2 - 5` is used instead. The bracket search is
//! randomized, so reruns may report different brackets for the same
//! polynomial; the refined root is then reported together with the full
//! iteration table.

use std::process::ExitCode;

use taproot_core::Polynomial;
use taproot_report::Summary;
use taproot_solvers::{bisection, search};

const DEFAULT_COEFFS: [f64; 4] = [1.0, -2.0, 0.0, -5.0];

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let coeffs = match parse_coeffs(&args) {
        Some(coeffs) => coeffs,
        None => {
            eprintln!("No usable coefficients; using the default cubic: 1 -2 0 -5");
            DEFAULT_COEFFS.to_vec()
        }
    };

    let polynomial = match Polynomial::new(coeffs) {
        Ok(polynomial) => polynomial,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Searching for a sign-changing bracket of f(x) = {polynomial} ...");
    let bracket = match search::search_from_entropy(&polynomial, &search::Config::default()) {
        Ok(bracket) => bracket,
        Err(e) => {
            eprintln!("Bracket search failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Found bracket [{:.6}, {:.6}] with f(a) = {:.6}, f(b) = {:.6}",
        bracket.a, bracket.b, bracket.fa, bracket.fb
    );

    let solution =
        match bisection::solve_unobserved(&polynomial, bracket, &bisection::Config::default()) {
            Ok(solution) => solution,
            Err(e) => {
                eprintln!("Refinement failed: {e}");
                return ExitCode::FAILURE;
            }
        };
    println!(
        "Root estimate {:.10} after {} iterations ({:?}); f(root) = {:.4e}",
        solution.root, solution.iters, solution.status, solution.residual
    );

    println!();
    print!("{}", Summary::new(&polynomial, &solution.history));

    ExitCode::SUCCESS
}

/// Parses every argument as a coefficient, descending power order.
///
/// Returns `None` when there are no arguments or any argument fails to
/// parse, letting the caller fall back to the default polynomial.
fn parse_coeffs(args: &[String]) -> Option<Vec<f64>> {
    if args.is_empty() {
        return None;
    }

    args.iter()
        .map(|arg| arg.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()
}
