#![warn(missing_docs)]
//! Dispersive optical materials.
//!
//! A [`Material`] couples a dispersion function with the angular frequency interval over
//! which that function is valid. All derived quantities (refractive index, wavevector,
//! Brewster angle) check their frequency argument against the interval that is active at
//! call time and fail fast on violation.
use std::fmt;
use std::sync::LazyLock;

use crate::error::{UfResult, UltrafastError};
use crate::riid::{RiidMaterial, RiidRecord};
use crate::units::C;

/// Dispersion function mapping an angular frequency in rad/fs to a refractive index.
pub type DispersionFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Database identifier of the bundled standard-air record (Ciddor 1996).
pub const AIR_RECORD_ID: &str =
    "http://refractiveindex.info/database/other/mixed%20gases/air/Ciddor.yml";

static AIR: LazyLock<RiidMaterial> = LazyLock::new(|| {
    let record = RiidRecord::from_string(include_str!("../data/Ciddor.yml"))
        .expect("bundled air record is readable");
    RiidMaterial::from_record(AIR_RECORD_ID, &record).expect("bundled air record is resolvable")
});

/// Process-wide reference material describing standard air (Ciddor 1996).
///
/// Built lazily from a bundled copy of the RefractiveIndex.info record and used as the
/// default incident material of [`Material::brewster`]. Immutable for the process lifetime.
pub fn air() -> &'static RiidMaterial {
    &AIR
}

/// A dispersive material employed in ultrafast optics.
///
/// The dispersion function takes one argument, the angular frequency in rad/fs, and returns
/// the refractive index at this angular frequency. The frequency range describes the lower
/// and upper angular frequencies for which the dispersion function is valid; it is
/// normalized to (low, high) ordering no matter how it was supplied.
pub struct Material {
    n: DispersionFn,
    range: (f64, f64),
    name: Option<String>,
    references: Option<String>,
    comments: Option<String>,
}

impl Material {
    /// Create a new [`Material`] from a dispersion function and its validity range.
    ///
    /// `range` must hold exactly two finite angular frequencies in rad/fs; a descending
    /// pair is swapped into ascending order. Name, reference and comment strings are
    /// optional metadata.
    ///
    /// # Errors
    ///
    /// This function will return an error if `range` does not hold exactly two finite
    /// values.
    ///
    /// # Example
    /// ```rust
    /// use ultrafast::material::Material;
    ///
    /// let glass = Material::new(|_omega| 1.46, &[1.1, 8.2], None, None, None).unwrap();
    /// assert!(glass.n(2.4).unwrap() > 1.0);
    /// ```
    pub fn new<F>(
        n: F,
        range: &[f64],
        name: Option<String>,
        references: Option<String>,
        comments: Option<String>,
    ) -> UfResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Ok(Self {
            n: Box::new(n),
            range: checked_range(range)?,
            name,
            references,
            comments,
        })
    }

    fn assert_frequency(&self, omega: f64) -> UfResult<()> {
        if omega < self.range.0 || omega > self.range.1 {
            return Err(UltrafastError::Range {
                value: omega,
                valid: self.range,
                message: "angular frequency out of material range".into(),
            });
        }
        Ok(())
    }

    /// Return the refractive index at the angular frequency `omega` in rad/fs.
    ///
    /// # Errors
    ///
    /// This function will return an error if `omega` is outside the currently active
    /// frequency range of this material.
    pub fn n(&self, omega: f64) -> UfResult<f64> {
        self.assert_frequency(omega)?;
        Ok((self.n)(omega))
    }

    /// Return the effective wavevector `omega * n / c` at the angular frequency `omega`.
    ///
    /// # Errors
    ///
    /// This function will return an error if `omega` is outside the currently active
    /// frequency range of this material.
    pub fn wavevector(&self, omega: f64) -> UfResult<f64> {
        self.assert_frequency(omega)?;
        Ok(omega * self.n(omega)? / C)
    }

    /// Return the Brewster angle in radians for rays incident from `incident`.
    ///
    /// If `incident` is `None`, the process-wide [`air`] material is assumed.
    ///
    /// # Errors
    ///
    /// This function will return an error if `omega` is outside the frequency range of
    /// this material or of the incident material.
    pub fn brewster(&self, omega: f64, incident: Option<&Self>) -> UfResult<f64> {
        self.assert_frequency(omega)?;
        let incident = incident.unwrap_or_else(|| air().material());
        Ok((self.n(omega)? / incident.n(omega)?).atan())
    }

    /// Return the currently active frequency range as (low, high) in rad/fs.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Replace the frequency range, with the same validation and normalization as on
    /// construction. The stored dispersion function is checked against the new range from
    /// the next evaluation on.
    ///
    /// # Errors
    ///
    /// This function will return an error if `range` does not hold exactly two finite
    /// values.
    pub fn set_range(&mut self, range: &[f64]) -> UfResult<()> {
        self.range = checked_range(range)?;
        Ok(())
    }

    /// Replace the dispersion function. The new function is checked against the currently
    /// active frequency range on every evaluation, exactly as on construction.
    pub fn set_n<F>(&mut self, n: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.n = Box::new(n);
    }

    /// Return the material name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Return the reference string for the material properties, if set.
    #[must_use]
    pub fn references(&self) -> Option<&str> {
        self.references.as_deref()
    }

    /// Return the comment string, if set.
    #[must_use]
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("name", &self.name)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

fn checked_range(range: &[f64]) -> UfResult<(f64, f64)> {
    let [low, high] = *range else {
        return Err(UltrafastError::PropertySet {
            property: "range".into(),
            message: format!(
                "frequency range must hold exactly 2 values, got {}",
                range.len()
            ),
        });
    };
    if !low.is_finite() || !high.is_finite() {
        return Err(UltrafastError::PropertySet {
            property: "range".into(),
            message: "frequency range bounds must be finite".into(),
        });
    }
    if low > high {
        Ok((high, low))
    } else {
        Ok((low, high))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::micrometer;
    use crate::units::frequency;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use std::f64::consts::FRAC_PI_4;

    fn test_material() -> Material {
        Material::new(
            |omega| omega,
            &[1.0, 10.0],
            Some("Test material name".into()),
            Some("Test material references".into()),
            Some("Test material comments".into()),
        )
        .unwrap()
    }
    #[test]
    fn new() {
        let mat = test_material();
        assert_eq!(mat.range(), (1.0, 10.0));
        assert_eq!(mat.name(), Some("Test material name"));
        assert_eq!(mat.references(), Some("Test material references"));
        assert_eq!(mat.comments(), Some("Test material comments"));
    }
    #[test]
    fn new_wrong_range() {
        assert_matches!(
            Material::new(|omega| omega, &[0.0, 1.0, 2.0], None, None, None).unwrap_err(),
            UltrafastError::PropertySet { .. }
        );
        assert_matches!(
            Material::new(|omega| omega, &[1.0], None, None, None).unwrap_err(),
            UltrafastError::PropertySet { .. }
        );
        assert_matches!(
            Material::new(|omega| omega, &[1.0, f64::NAN], None, None, None).unwrap_err(),
            UltrafastError::PropertySet { .. }
        );
        assert_matches!(
            Material::new(|omega| omega, &[f64::INFINITY, 1.0], None, None, None).unwrap_err(),
            UltrafastError::PropertySet { .. }
        );
    }
    #[test]
    fn range_normalization() {
        let mut mat = test_material();
        mat.set_range(&[10.0, 1.0]).unwrap();
        assert_eq!(mat.range(), (1.0, 10.0));
        // idempotent: normalizing an already ascending range changes nothing
        mat.set_range(&[1.0, 10.0]).unwrap();
        assert_eq!(mat.range(), (1.0, 10.0));
    }
    #[test]
    fn set_range_wrong() {
        let mut mat = test_material();
        let error = mat.set_range(&[0.0, 1.0, 2.0]).unwrap_err();
        assert_matches!(error, UltrafastError::PropertySet { .. });
        if let UltrafastError::PropertySet { property, .. } = error {
            assert_eq!(property, "range");
        }
        // failed mutation leaves the old range active
        assert_eq!(mat.range(), (1.0, 10.0));
    }
    #[test]
    fn n() {
        let mat = test_material();
        let omega = 5.5;
        assert_relative_eq!(mat.n(omega).unwrap(), omega);
    }
    #[test]
    fn n_out_of_range() {
        let mat = test_material();
        for omega in [0.9, 11.0] {
            let error = mat.n(omega).unwrap_err();
            assert_eq!(
                error,
                UltrafastError::Range {
                    value: omega,
                    valid: (1.0, 10.0),
                    message: "angular frequency out of material range".into()
                }
            );
        }
    }
    #[test]
    fn n_checks_against_current_range() {
        let mut mat = test_material();
        assert!(mat.n(9.0).is_ok());
        mat.set_range(&[1.0, 5.0]).unwrap();
        assert_matches!(mat.n(9.0).unwrap_err(), UltrafastError::Range { .. });
    }
    #[test]
    fn set_n() {
        let mut mat = test_material();
        mat.set_n(|omega| 2.0 * omega);
        assert_relative_eq!(mat.n(2.0).unwrap(), 4.0);
        // the replaced function inherits range validation
        assert_matches!(mat.n(11.0).unwrap_err(), UltrafastError::Range { .. });
    }
    #[test]
    fn wavevector() {
        let mat = test_material();
        let omega = 5.5;
        assert_relative_eq!(
            mat.wavevector(omega).unwrap(),
            omega * mat.n(omega).unwrap() / C
        );
    }
    #[test]
    fn wavevector_out_of_range() {
        let mat = test_material();
        assert_matches!(mat.wavevector(0.9).unwrap_err(), UltrafastError::Range { .. });
        assert_matches!(
            mat.wavevector(11.0).unwrap_err(),
            UltrafastError::Range { .. }
        );
    }
    #[test]
    fn brewster_self() {
        let mat = test_material();
        let other = test_material();
        assert_relative_eq!(mat.brewster(5.5, Some(&other)).unwrap(), FRAC_PI_4);
    }
    #[test]
    fn brewster_default_air() {
        let mat = test_material();
        let omega = 5.5;
        assert_relative_eq!(
            mat.brewster(omega, None).unwrap(),
            (mat.n(omega).unwrap() / air().n(omega).unwrap()).atan()
        );
    }
    #[test]
    fn brewster_out_of_range() {
        let mat = test_material();
        assert_matches!(
            mat.brewster(0.9, None).unwrap_err(),
            UltrafastError::Range { .. }
        );
    }
    #[test]
    fn air_singleton() {
        let air = air();
        assert_eq!(air.name(), Some(AIR_RECORD_ID));
        assert_eq!(air.data_type(), "formula 6");
        assert!(air.references().is_some());
        assert!(air.comments().is_some());
        // Ciddor 1996 at the sodium d line
        let omega = frequency(micrometer!(0.5876));
        assert_relative_eq!(
            air.n(omega).unwrap(),
            1.000_277_174_239_194_7,
            max_relative = 1e-12
        );
        // valid range covers 0.23 um to 1.690 um
        let (low, high) = air.range();
        assert_relative_eq!(low, frequency(micrometer!(1.690)));
        assert_relative_eq!(high, frequency(micrometer!(0.23)));
    }
    #[test]
    fn debug() {
        let mat = test_material();
        assert_eq!(
            format!("{mat:?}"),
            "Material { name: Some(\"Test material name\"), range: (1.0, 10.0), .. }"
        );
    }
}
