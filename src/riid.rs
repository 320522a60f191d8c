#![warn(missing_docs)]
//! Materials backed by RefractiveIndex.info database records.
//!
//! Database records are YAML documents holding a list of dispersion data entries together
//! with optional reference and comment strings. [`RiidRecord`] is the decoded form of such
//! a document, obtainable from a local file or fetched over HTTP. [`RiidMaterial`] scans the
//! data entries of a record for the first one describing a supported analytical dispersion
//! formula and builds a [`Material`] from it. Tabulated dispersion data is not supported
//! yet; such entries are skipped with a warning and scanning continues.
use std::fs;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;

use crate::dispersion::DispersionFormula;
use crate::error::{UfResult, UltrafastError};
use crate::material::Material;
use crate::micrometer;
use crate::units::frequency;

/// Decoded RefractiveIndex.info database record.
#[derive(Debug, Clone, Deserialize)]
pub struct RiidRecord {
    /// Dispersion data entries, scanned in order during material construction.
    #[serde(default, rename = "DATA")]
    pub data: Vec<RiidDataEntry>,
    /// Literature reference(s) for the stored material properties.
    #[serde(default, rename = "REFERENCES")]
    pub references: Option<String>,
    /// Free-form comments attached to the record.
    #[serde(default, rename = "COMMENTS")]
    pub comments: Option<String>,
}

/// One dispersion data entry of a database record.
#[derive(Debug, Clone, Deserialize)]
pub struct RiidDataEntry {
    /// Data type tag, e.g. `formula 1` or `tabulated n`.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Wavelength validity bounds in micrometers, whitespace separated.
    #[serde(default)]
    pub range: Option<String>,
    /// Flat formula coefficient sequence, whitespace separated.
    #[serde(default)]
    pub coefficients: Option<String>,
}

impl RiidRecord {
    /// Decode a database record from YAML text.
    ///
    /// # Errors
    ///
    /// This function will return an error if the YAML document cannot be decoded.
    pub fn from_string(contents: &str) -> UfResult<Self> {
        serde_yaml::from_str(contents).map_err(|e| {
            UltrafastError::Other(format!("parsing of database record failed: {e}"))
        })
    }

    /// Read and decode a database record from a local file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file is not readable or cannot be decoded.
    pub fn from_file(path: &Path) -> UfResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            UltrafastError::Other(format!("cannot read file {}: {e}", path.display()))
        })?;
        Self::from_string(&contents)
    }

    /// Fetch and decode a database record from a HTTP(S) location.
    ///
    /// # Errors
    ///
    /// This function will return an error if the request fails or the response cannot be
    /// decoded.
    pub fn from_url(url: &str) -> UfResult<Self> {
        let contents = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.text())
            .map_err(|e| UltrafastError::Other(format!("cannot fetch record from {url}: {e}")))?;
        Self::from_string(&contents)
    }

    /// Retrieve a database record from the given identifier.
    ///
    /// Identifiers carrying a network scheme prefix are fetched over HTTP, everything else
    /// is treated as a local file path.
    ///
    /// # Errors
    ///
    /// This function will return an error if retrieval or decoding fails.
    pub fn from_identifier(db: &str) -> UfResult<Self> {
        if has_url_scheme(db) {
            Self::from_url(db)
        } else {
            Self::from_file(Path::new(db))
        }
    }
}

fn has_url_scheme(identifier: &str) -> bool {
    identifier.starts_with("http://") || identifier.starts_with("https://")
}

/// A [`Material`] whose dispersion data stems from a RefractiveIndex.info database record.
///
/// Beyond the plain material it keeps the database type tag of the data entry it was built
/// from. All [`Material`] operations are available through deref.
#[derive(Debug)]
pub struct RiidMaterial {
    data_type: String,
    material: Material,
}

impl RiidMaterial {
    /// Build a material from the database record at the given identifier.
    ///
    /// The identifier may be a local file path or a HTTP(S) URL; it also becomes the name
    /// of the constructed material.
    ///
    /// # Errors
    ///
    /// This function will return an error if retrieval, decoding or resolution of the
    /// record fails.
    pub fn from_identifier(db: &str) -> UfResult<Self> {
        let record = RiidRecord::from_identifier(db)?;
        Self::from_record(db, &record)
    }

    /// Build a material from an already decoded database record.
    ///
    /// The data entries are scanned in order; the first entry with a supported dispersion
    /// type wins. Entries with tabulated dispersion data are skipped with a warning.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - no data entry yields a usable dispersion function.
    ///   - a matching entry has a missing or malformed range or coefficient field.
    ///   - the formula index of a matching entry is outside the supported set 1-9.
    pub fn from_record(name: &str, record: &RiidRecord) -> UfResult<Self> {
        let mut resolved = None;
        for entry in &record.data {
            if entry.data_type.starts_with("formula") {
                let formula = DispersionFormula::new(
                    parse_formula_index(&entry.data_type)?,
                    parse_numbers(entry.coefficients.as_deref(), "coefficients")?,
                )?;
                debug!("resolved {formula} dispersion from entry '{}'", entry.data_type);
                let range = parse_numbers(entry.range.as_deref(), "range")?;
                resolved = Some((entry.data_type.clone(), formula, range));
                break;
            } else if entry.data_type.starts_with("tabulated n") {
                warn!("tabulated dispersion data is not supported yet, skipping entry");
            }
        }
        let Some((data_type, formula, range)) = resolved else {
            return Err(UltrafastError::Other(
                "no dispersion data found in database record".into(),
            ));
        };
        // range bounds are wavelengths in reverse order of the frequency convention
        let range: Vec<f64> = range
            .iter()
            .rev()
            .map(|&lambda| frequency(micrometer!(lambda)))
            .collect();
        let material = Material::new(
            move |omega| formula.n_omega(omega),
            &range,
            Some(name.to_string()),
            record.references.clone(),
            record.comments.clone(),
        )?;
        Ok(Self {
            data_type,
            material,
        })
    }

    /// Return the database type tag of the data entry this material was built from.
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Return the wrapped [`Material`].
    #[must_use]
    pub const fn material(&self) -> &Material {
        &self.material
    }

    /// Consume this value and return the wrapped [`Material`].
    #[must_use]
    pub fn into_material(self) -> Material {
        self.material
    }
}

impl Deref for RiidMaterial {
    type Target = Material;
    fn deref(&self) -> &Self::Target {
        &self.material
    }
}
impl DerefMut for RiidMaterial {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.material
    }
}

fn parse_formula_index(data_type: &str) -> UfResult<i32> {
    data_type
        .split_whitespace()
        .nth(1)
        .and_then(|index| i32::from_str(index).ok())
        .ok_or_else(|| {
            UltrafastError::Other(format!(
                "cannot parse formula index from type tag '{data_type}'"
            ))
        })
}

fn parse_numbers(field: Option<&str>, field_name: &str) -> UfResult<Vec<f64>> {
    let field = field.ok_or_else(|| {
        UltrafastError::Other(format!("formula entry has no {field_name} field"))
    })?;
    field
        .split_whitespace()
        .map(|value| {
            f64::from_str(value).map_err(|e| {
                UltrafastError::Other(format!(
                    "cannot parse {field_name} value '{value}': {e}"
                ))
            })
        })
        .collect()
}
