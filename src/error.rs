#![warn(missing_docs)]
//! Ultrafast specific error structures
use std::{error::Error, fmt::Display};

/// Ultrafast specific Result type
pub type UfResult<T> = std::result::Result<T, UltrafastError>;

/// Errors that can be returned by various ultrafast functions.
#[derive(Debug, Clone, PartialEq)]
pub enum UltrafastError {
    /// a numeric value lies outside its declared valid interval, e.g. an angular frequency
    /// outside a material range or a dispersion formula index outside the supported set
    Range {
        /// the offending value
        value: f64,
        /// the valid interval as (low, high)
        valid: (f64, f64),
        /// description of the check that failed
        message: String,
    },
    /// an attempted mutation of a validated attribute failed a structural check
    PropertySet {
        /// name of the attribute being set
        property: String,
        /// description of the check that failed
        message: String,
    },
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for UltrafastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range {
                value,
                valid,
                message,
            } => {
                write!(
                    f,
                    "{message}. Value: {value}. Valid range: ({}, {})",
                    valid.0, valid.1
                )
            }
            Self::PropertySet { property, message } => {
                write!(f, "{message}. Property: {property}.")
            }
            Self::Other(m) => write!(f, "Ultrafast Error:Other:{m}"),
        }
    }
}
impl Error for UltrafastError {}

impl std::convert::From<String> for UltrafastError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
