use std::fmt;

use thiserror::Error;

use crate::RealFn;

/// Errors that can occur when constructing a [`Polynomial`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    /// The coefficient sequence is empty.
    #[error("empty coefficient sequence")]
    Empty,
}

/// A real polynomial stored as coefficients in descending power order.
///
/// `coeffs[0]` is the leading coefficient; a length-1 sequence is a
/// constant. The constructor rejects an empty sequence, which keeps
/// [`eval`](Self::eval) total. Overflow at extreme arguments is the
/// caller's concern; evaluation performs no range checks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in descending power order.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::Empty` if `coeffs` is empty.
    pub fn new(coeffs: Vec<f64>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::Empty);
        }
        Ok(Self { coeffs })
    }

    /// Returns the coefficients in descending power order.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the degree (one less than the coefficient count).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

impl RealFn for Polynomial {
    fn eval(&self, x: f64) -> f64 {
        Polynomial::eval(self, x)
    }
}

impl fmt::Display for Polynomial {
    /// Renders descending powers, omitting zero coefficients.
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut wrote_term = false;

        for (i, &coef) in self.coeffs.iter().enumerate() {
            if coef == 0.0 {
                continue;
            }

            if wrote_term {
                f.write_str(if coef < 0.0 { " - " } else { " + " })?;
            } else if coef < 0.0 {
                f.write_str("-")?;
            }

            let magnitude = coef.abs();
            match degree - i {
                0 => write!(f, "{magnitude}")?,
                1 => write!(f, "{magnitude}x")?,
                power => write!(f, "{magnitude}x^{power}")?,
            }
            wrote_term = true;
        }

        if !wrote_term {
            f.write_str("0")?;
        }

        Ok(())
    }
}
