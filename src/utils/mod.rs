//! Utility modules
//!
//! This module contains common utilities used throughout the application:
//! error handling and logging setup.

pub mod errors;
pub mod logging;

pub use errors::{CallCentreError, Result};

#[cfg(test)]
pub(crate) mod test_support;
