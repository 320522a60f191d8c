#![warn(missing_docs)]
//! Analytical dispersion formula families.
//!
//! The RefractiveIndex.info database describes analytical dispersion data as one of nine
//! closed-form formula families, each with its own grouping of a flat coefficient sequence
//! (a leading scalar followed by pairs, fixed-size quads, etc.). [`DispersionFormula`] holds
//! the parsed coefficients of one family and evaluates the refractive index either directly
//! in wavelength space or, composed with the [`units`](crate::units) conversion, as a
//! function of angular frequency.
use num::pow::Pow;
use serde::{Deserialize, Serialize};
use uom::si::length::micrometer;

use crate::error::{UfResult, UltrafastError};
use crate::units::wavelength;

/// Refractive index models of the RefractiveIndex.info database, selected by the formula
/// index 1-9 of the database type tag. Each variant holds its flat coefficient sequence.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, strum::Display)]
pub enum DispersionFormula {
    /// Formula 1, the preferred Sellmeier form
    #[strum(to_string = "Sellmeier equation")]
    Sellmeier(Vec<f64>),
    /// Formula 2, Sellmeier with unsquared resonance terms
    #[strum(to_string = "Sellmeier-2 equation")]
    Sellmeier2(Vec<f64>),
    /// Formula 3, plain polynomial in powers of the wavelength
    #[strum(to_string = "polynomial equation")]
    Polynomial(Vec<f64>),
    /// Formula 4, the general RefractiveIndex.info form
    #[strum(to_string = "RefractiveIndex.info equation")]
    RefractiveIndexInfo(Vec<f64>),
    /// Formula 5, Cauchy
    #[strum(to_string = "Cauchy equation")]
    Cauchy(Vec<f64>),
    /// Formula 6, for gases
    #[strum(to_string = "gases equation")]
    Gases(Vec<f64>),
    /// Formula 7, Herzberger
    #[strum(to_string = "Herzberger equation")]
    Herzberger(Vec<f64>),
    /// Formula 8, retro materials
    #[strum(to_string = "retro equation")]
    Retro(Vec<f64>),
    /// Formula 9, exotic materials
    #[strum(to_string = "exotic equation")]
    Exotic(Vec<f64>),
}

impl DispersionFormula {
    /// Create the dispersion formula model with the given database formula index (1-9).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the formula index is outside the supported set 1-9.
    ///   - the coefficient count does not fit the grouping of the selected family.
    pub fn new(formula: i32, coefficients: Vec<f64>) -> UfResult<Self> {
        let model = match formula {
            1 => Self::Sellmeier(coefficients),
            2 => Self::Sellmeier2(coefficients),
            3 => Self::Polynomial(coefficients),
            4 => Self::RefractiveIndexInfo(coefficients),
            5 => Self::Cauchy(coefficients),
            6 => Self::Gases(coefficients),
            7 => Self::Herzberger(coefficients),
            8 => Self::Retro(coefficients),
            9 => Self::Exotic(coefficients),
            _ => {
                return Err(UltrafastError::Range {
                    value: f64::from(formula),
                    valid: (1.0, 9.0),
                    message: "dispersion formula index out of range".into(),
                })
            }
        };
        model.check_grouping()?;
        Ok(model)
    }

    fn coefficients(&self) -> &[f64] {
        match self {
            Self::Sellmeier(c)
            | Self::Sellmeier2(c)
            | Self::Polynomial(c)
            | Self::RefractiveIndexInfo(c)
            | Self::Cauchy(c)
            | Self::Gases(c)
            | Self::Herzberger(c)
            | Self::Retro(c)
            | Self::Exotic(c) => c,
        }
    }

    /// Check that the coefficient sequence can be partitioned as the family requires, so
    /// that evaluation never indexes past the end of the sequence.
    fn check_grouping(&self) -> UfResult<()> {
        let (min_len, pair_tail_start) = match self {
            Self::Sellmeier(_)
            | Self::Sellmeier2(_)
            | Self::Polynomial(_)
            | Self::Cauchy(_)
            | Self::Gases(_) => (1, Some(1)),
            Self::RefractiveIndexInfo(_) => (9, Some(9)),
            Self::Herzberger(_) => (3, None),
            Self::Retro(_) => (4, None),
            Self::Exotic(_) => (6, None),
        };
        let count = self.coefficients().len();
        if count < min_len {
            return Err(UltrafastError::Other(format!(
                "{self} requires at least {min_len} coefficients, got {count}"
            )));
        }
        if let Some(tail_start) = pair_tail_start {
            if (count - tail_start) % 2 != 0 {
                return Err(UltrafastError::Other(format!(
                    "{self} requires coefficient pairs after the first {tail_start}, got {count} coefficients"
                )));
            }
        }
        Ok(())
    }

    /// Evaluate the refractive index at the given vacuum wavelength in micrometers.
    #[must_use]
    pub fn n_lambda(&self, lambda: f64) -> f64 {
        let l_sq = lambda * lambda;
        match self {
            Self::Sellmeier(c) => {
                let mut n_sq = 1.0 + c[0];
                for x in c[1..].chunks_exact(2) {
                    n_sq += x[0] * l_sq / (l_sq - x[1] * x[1]);
                }
                n_sq.sqrt()
            }
            Self::Sellmeier2(c) => {
                let mut n_sq = 1.0 + c[0];
                for x in c[1..].chunks_exact(2) {
                    n_sq += x[0] * l_sq / (l_sq - x[1]);
                }
                n_sq.sqrt()
            }
            Self::Polynomial(c) => {
                let mut n_sq = c[0];
                for x in c[1..].chunks_exact(2) {
                    n_sq += x[0] * lambda.pow(x[1]);
                }
                n_sq.sqrt()
            }
            Self::RefractiveIndexInfo(c) => {
                let mut n_sq = c[0];
                for i in [1, 5] {
                    n_sq += c[i] * lambda.pow(c[i + 1]) / (l_sq - c[i + 2].pow(c[i + 3]));
                }
                for x in c[9..].chunks_exact(2) {
                    n_sq += x[0] * lambda.pow(x[1]);
                }
                n_sq.sqrt()
            }
            Self::Cauchy(c) => {
                let mut n = c[0];
                for x in c[1..].chunks_exact(2) {
                    n += x[0] * lambda.pow(x[1]);
                }
                n
            }
            Self::Gases(c) => {
                let mut n = 1.0 + c[0];
                for x in c[1..].chunks_exact(2) {
                    n += x[0] / (x[1] - lambda.powi(-2));
                }
                n
            }
            Self::Herzberger(c) => {
                let mut n = c[0];
                n += c[1] / (l_sq - 0.028);
                n += c[2] * (l_sq - 0.028).powi(-2);
                for (i, x) in c[3..].iter().enumerate() {
                    #[allow(clippy::cast_possible_truncation)]
                    let exponent = 2 * (i as i32 + 1);
                    n += x * lambda.powi(exponent);
                }
                n
            }
            Self::Retro(c) => {
                let alpha = c[0] + c[1] * l_sq / (l_sq - c[2]) + c[3] * l_sq;
                (-(2.0f64.mul_add(alpha, 1.0) / (alpha - 1.0))).sqrt()
            }
            Self::Exotic(c) => {
                let n_sq = c[0]
                    + c[1] / (l_sq - c[2])
                    + c[3] * (lambda - c[4]) / ((lambda - c[4]).powi(2) + c[5]);
                n_sq.sqrt()
            }
        }
    }

    /// Evaluate the refractive index at the given angular frequency in rad/fs.
    #[must_use]
    pub fn n_omega(&self, omega: f64) -> f64 {
        self.n_lambda(wavelength(omega).get::<micrometer>())
    }
}
