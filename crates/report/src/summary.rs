use std::fmt;

use taproot_core::Polynomial;
use taproot_solvers::bisection::History;

/// The per-iteration series extracted from a [`History`].
///
/// One entry per iteration in each vector, in iteration order: the bracket
/// endpoints, the midpoint, and the residual magnitude at the midpoint.
/// Suitable for tabular or graphical presentation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Series {
    /// Left endpoints, per iteration.
    pub a: Vec<f64>,
    /// Right endpoints, per iteration.
    pub b: Vec<f64>,
    /// Midpoints, per iteration.
    pub midpoint: Vec<f64>,
    /// Residual magnitudes `|f(midpoint)|`, per iteration.
    pub residual_magnitude: Vec<f64>,
}

impl Series {
    /// Extracts the four series from a history.
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let mut series = Self::default();

        for record in history {
            series.a.push(record.a);
            series.b.push(record.b);
            series.midpoint.push(record.midpoint);
            series.residual_magnitude.push(record.residual.abs());
        }

        series
    }

    /// Returns the number of iterations covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.midpoint.len()
    }

    /// Returns true if the series cover no iterations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.midpoint.is_empty()
    }
}

/// A diagnostic summary of one root-finding run.
///
/// Pure data: the polynomial rendered in descending powers and the
/// per-iteration series. The `Display` impl renders a fixed-width
/// iteration table headed by the polynomial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Summary {
    /// The polynomial, rendered in descending powers.
    pub function: String,
    /// The per-iteration series.
    pub series: Series,
}

impl Summary {
    /// Builds a summary from a polynomial and the history of its solve.
    #[must_use]
    pub fn new(polynomial: &Polynomial, history: &History) -> Self {
        Self {
            function: polynomial.to_string(),
            series: Series::from_history(history),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f(x) = {}", self.function)?;
        writeln!(
            f,
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>12}",
            "iter", "a", "b", "midpoint", "|f(mid)|"
        )?;

        for i in 0..self.series.len() {
            writeln!(
                f,
                "{:>4}  {:>14.8}  {:>14.8}  {:>14.8}  {:>12.4e}",
                i,
                self.series.a[i],
                self.series.b[i],
                self.series.midpoint[i],
                self.series.residual_magnitude[i]
            )?;
        }

        Ok(())
    }
}
