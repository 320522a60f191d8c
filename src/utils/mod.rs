//! Helper macros and test utilities
pub mod test_helper;
pub mod uom_macros;
