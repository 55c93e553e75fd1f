//! Bisection refinement of a sign-changing bracket.
//!
//! The refiner repeatedly halves the bracket, always keeping the half
//! whose endpoint values still change sign, and appends one
//! [`IterationRecord`] to a [`History`] per step. Two independent
//! tolerances stop the loop: one on the midpoint residual, one on the
//! bracket half-width. Spending the iteration budget is a defined
//! terminal state, not an error.

mod config;
mod error;
mod event;
mod history;
mod solution;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use history::{History, IterationRecord};
pub use solution::{Solution, Status};

use taproot_core::{Observer, RealFn};

use crate::bracket::Bracket;

/// Refines a bracket to a root estimate, recording each step.
///
/// The bracket's endpoint values are taken as given; only the midpoint is
/// evaluated. Observers see every iteration's record and may stop the
/// refinement early. The returned [`Solution`] owns the frozen history;
/// its length equals the number of iterations performed and never exceeds
/// `config.max_iters`.
///
/// Stopping tests run every step, in order: `|f(c)| < residual_tol`, then
/// `(b - a) / 2 < width_tol`. Either one terminates with
/// [`Status::Converged`]. When neither fires, the half whose endpoint
/// values still change sign is kept; an exact-zero product keeps the
/// right half (`a, fa ← c, fc`).
///
/// # Errors
///
/// Returns an error if the config is invalid or the bracket fails
/// validation (non-finite endpoints, zero width, or no strict sign
/// change). No iteration state is produced on either failure. Reversed
/// endpoints are normalized, not rejected.
pub fn solve<F, Obs>(
    f: &F,
    bracket: Bracket,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFn,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let Bracket {
        mut a,
        mut b,
        mut fa,
        ..
    } = bracket.validated()?;

    let mut history = History::new();
    let mut root = f64::NAN;
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters {
        let c = 0.5 * (a + b);
        let fc = f.eval(c);
        root = c;
        residual = fc;

        let record = IterationRecord {
            a,
            b,
            midpoint: c,
            residual: fc,
        };
        history.push(record);

        let action = observer.observe(&Event {
            iter,
            record: &record,
        });
        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: c,
                residual: fc,
                iters: iter,
                history,
            });
        }

        let residual_converged = fc.abs() < config.residual_tol;
        let width_converged = 0.5 * (b - a) < config.width_tol;

        if residual_converged || width_converged {
            return Ok(Solution {
                status: Status::Converged,
                root: c,
                residual: fc,
                iters: iter,
                history,
            });
        }

        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        root,
        residual,
        iters: config.max_iters,
        history,
    })
}

/// Runs the refiner without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid or the bracket fails
/// validation.
pub fn solve_unobserved<F>(f: &F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: RealFn,
{
    solve(f, bracket, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use taproot_core::Polynomial;

    use crate::bracket::BracketError;

    fn cubic() -> Polynomial {
        // x^3 - 2x^2 - 5, single real root near 2.6906474.
        Polynomial::new(vec![1.0, -2.0, 0.0, -5.0]).expect("valid coefficients")
    }

    fn cubic_bracket(p: &Polynomial) -> Bracket {
        // f(2) = -5, f(3) = 4.
        Bracket::from_endpoints(p, 2.0, 3.0)
    }

    #[test]
    fn converges_to_cubic_root() {
        let p = cubic();

        let solution = solve_unobserved(&p, cubic_bracket(&p), &Config::default())
            .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, 2.690_647_4, epsilon = 1e-5);
        assert!(solution.iters <= 100);
        assert!(!solution.history.is_empty());
        assert_eq!(solution.history.len(), solution.iters);
    }

    #[test]
    fn root_is_final_midpoint() {
        let p = cubic();

        let solution = solve_unobserved(&p, cubic_bracket(&p), &Config::default())
            .expect("should converge");

        let last = solution.history.last().expect("non-empty history");
        assert_relative_eq!(solution.root, last.midpoint);
        assert_relative_eq!(solution.residual, last.residual);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let p = cubic();
        let bracket = Bracket {
            a: 0.0,
            b: 1.0,
            fa: 1.0,
            fb: 1.0,
        };

        let mut events = 0_usize;
        let observer = |_event: &Event<'_>| {
            events += 1;
            None
        };

        let result = solve(&p, bracket, &Config::default(), observer);

        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        ));
        assert_eq!(events, 0);
    }

    #[test]
    fn rejects_non_finite_and_zero_width_brackets() {
        let p = cubic();

        let bracket = Bracket {
            a: f64::NAN,
            b: 1.0,
            fa: -1.0,
            fb: 1.0,
        };
        assert!(matches!(
            solve_unobserved(&p, bracket, &Config::default()),
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));

        let bracket = Bracket {
            a: 1.0,
            b: 1.0,
            fa: -1.0,
            fb: 1.0,
        };
        assert!(matches!(
            solve_unobserved(&p, bracket, &Config::default()),
            Err(Error::InvalidBracket(BracketError::ZeroWidth))
        ));
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let p = cubic();
        let reversed = Bracket::from_endpoints(&p, 3.0, 2.0);

        let solution =
            solve_unobserved(&p, reversed, &Config::default()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, 2.690_647_4, epsilon = 1e-5);
    }

    #[test]
    fn interval_halves_every_step() {
        let p = cubic();

        let solution = solve_unobserved(&p, cubic_bracket(&p), &Config::default())
            .expect("should converge");

        for pair in solution.history.records().windows(2) {
            let width = pair[0].b - pair[0].a;
            let next_width = pair[1].b - pair[1].a;
            assert_relative_eq!(next_width, 0.5 * width);
        }
    }

    #[test]
    fn reruns_are_identical() {
        let p = cubic();

        let first = solve_unobserved(&p, cubic_bracket(&p), &Config::default())
            .expect("should converge");
        let second = solve_unobserved(&p, cubic_bracket(&p), &Config::default())
            .expect("should converge");

        assert_eq!(first, second);
    }

    #[test]
    fn budget_exhaustion_returns_last_midpoint() {
        let p = cubic();
        let config = Config {
            max_iters: 5,
            residual_tol: 0.0,
            width_tol: 0.0,
        };

        let solution =
            solve_unobserved(&p, cubic_bracket(&p), &config).expect("exhaustion is not an error");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5);
        assert_eq!(solution.history.len(), 5);

        let last = solution.history.last().expect("non-empty history");
        assert_relative_eq!(solution.root, last.midpoint);
    }

    #[test]
    fn exact_zero_midpoint_keeps_right_half() {
        // The identity function hits an exact zero at the first midpoint of
        // [-1, 1]. With both tolerances zeroed out, neither stopping test
        // fires, so the step must take the right branch: a, fa ← c, fc.
        let f = |x: f64| x;
        let bracket = Bracket::from_endpoints(&f, -1.0, 1.0);
        let config = Config {
            max_iters: 3,
            residual_tol: 0.0,
            width_tol: 0.0,
        };

        let solution = solve_unobserved(&f, bracket, &config).expect("should run to budget");

        let records = solution.history.records();
        assert_relative_eq!(records[0].midpoint, 0.0);
        assert_relative_eq!(records[0].residual, 0.0);
        assert_relative_eq!(records[1].a, 0.0);
        assert_relative_eq!(records[1].b, 1.0);
    }

    #[test]
    fn exact_zero_midpoint_converges_under_default_tolerance() {
        let f = |x: f64| x;
        let bracket = Bracket::from_endpoints(&f, -1.0, 1.0);

        let solution =
            solve_unobserved(&f, bracket, &Config::default()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.root, 0.0);
    }

    #[test]
    fn width_tolerance_alone_stops_the_loop() {
        // A function whose residual never gets small near the root of its
        // sign change: a step from -1 to 1 at x = 0.25. The residual stays
        // at magnitude 1, so only the width test can stop the refinement.
        let f = |x: f64| if x < 0.25 { -1.0 } else { 1.0 };
        let bracket = Bracket::from_endpoints(&f, 0.0, 1.0);

        let solution =
            solve_unobserved(&f, bracket, &Config::default()).expect("should converge on width");

        assert_eq!(solution.status, Status::Converged);
        let last = solution.history.last().expect("non-empty history");
        assert!(0.5 * (last.b - last.a) < 1e-6);
        assert_relative_eq!(solution.root, 0.25, epsilon = 1e-5);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let p = cubic();

        let mut calls = 0_usize;
        let observer = |event: &Event<'_>| {
            calls += 1;
            if event.iter >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution =
            solve(&p, cubic_bracket(&p), &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.history.len(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn rejects_invalid_config() {
        let p = cubic();

        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert!(matches!(
            solve_unobserved(&p, cubic_bracket(&p), &config),
            Err(Error::InvalidConfig { .. })
        ));

        let config = Config {
            residual_tol: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            solve_unobserved(&p, cubic_bracket(&p), &config),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
