//! various helper functions used to simplify unit tests.
//!
//! **Note**: This module is only compiled and used during testing.
#[cfg(test)]
use log::Level;

/// Assert the exact sequence of WARN-level messages captured by `testing_logger`.
#[cfg(test)]
pub fn check_warnings(expected_warnings: Vec<&str>) {
    testing_logger::validate(|captured_logs| {
        let warnings: Vec<_> = captured_logs
            .iter()
            .filter(|l| l.level == Level::Warn)
            .collect();
        assert_eq!(warnings.len(), expected_warnings.len());
        for log in warnings.iter().zip(expected_warnings.clone()) {
            assert_eq!(log.0.body, log.1);
        }
    });
}
