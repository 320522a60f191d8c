#![warn(missing_docs)]
//! Module for additional uom macros that facilitate the creation of unit values

///macro to create a Length in micrometer
#[macro_export]
macro_rules! micrometer {
    ($val:expr) => {{
        use uom::si::{f64::Length, length::micrometer};
        Length::new::<micrometer>($val)
    }};
}
///macro to create a Length in nanometer
#[macro_export]
macro_rules! nanometer {
    ($val:expr) => {{
        use uom::si::{f64::Length, length::nanometer};
        Length::new::<nanometer>($val)
    }};
}
