//! The `utils` module provides the definitions shared across `mock-sensors`:
//! the error taxonomy and the logging setup used by the binary and tests.

pub mod error;
pub mod logging;
