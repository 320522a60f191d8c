//! Tools for performing ultrafast optics calculations.
//!
//! The crate currently focusses on dispersive optical materials. A
//! [`Material`] couples a dispersion function with its angular frequency
//! validity range and derives the quantities that ultrafast calculations are
//! built from (refractive index, wavevector, Brewster angle). Materials can be
//! defined directly from a closure or resolved from a RefractiveIndex.info
//! database record ([`RiidMaterial`]), whose analytical dispersion formulas
//! (nine families) are evaluated by [`DispersionFormula`].
//!
//! Angular frequencies are given in rad/fs throughout; wavelengths are
//! micrometers, typed as [`uom`] lengths at the conversion boundary.
//!
//! # Example
//! ```rust
//! use ultrafast::{frequency, micrometer, Material, UfResult};
//!
//! # fn main() -> UfResult<()> {
//! let omega_800nm = frequency(micrometer!(0.8));
//! let glass = Material::new(
//!     |_omega| 1.453,
//!     &[frequency(micrometer!(2.0)), frequency(micrometer!(0.3))],
//!     Some("fused silica (approx.)".to_string()),
//!     None,
//!     None,
//! )?;
//! let theta = glass.brewster(omega_800nm, None)?;
//! assert!(theta > 0.96 && theta < 0.97);
//! # Ok(())
//! # }
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod dispersion;
pub mod error;
pub mod material;
pub mod riid;
pub mod units;
pub mod utils;

pub use dispersion::DispersionFormula;
pub use error::{UfResult, UltrafastError};
pub use material::{air, Material, AIR_RECORD_ID};
pub use riid::{RiidMaterial, RiidRecord};
pub use units::{frequency, wavelength, C};
