#![warn(missing_docs)]
//! Conversion between vacuum wavelength and angular frequency.
//!
//! Most analytical dispersion formulas are stated in wavelength space (micrometers) while
//! [`Material`](crate::material::Material) operates on angular frequencies in rad/fs. Both
//! directions of the conversion are the same reciprocal relation `2 pi c / x` with `c` in
//! micrometers per femtosecond, so applying the conversion twice returns the input (modulo
//! floating point rounding).
use std::f64::consts::PI;

use uom::si::f64::Length;
use uom::si::length::micrometer;

/// Speed of light in micrometers per femtosecond (SI value scaled by 1e-9).
pub const C: f64 = 299_792_458e-9;

fn converter(value: f64) -> f64 {
    2.0 * PI * C / value
}

/// Convert a vacuum wavelength to its angular frequency in rad/fs.
#[must_use]
pub fn frequency(lambda: Length) -> f64 {
    converter(lambda.get::<micrometer>())
}

/// Convert an angular frequency in rad/fs to its vacuum wavelength.
#[must_use]
pub fn wavelength(omega: f64) -> Length {
    crate::micrometer!(converter(omega))
}
