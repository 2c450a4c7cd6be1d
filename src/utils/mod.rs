//! Utility functions

pub mod validation;

pub use validation::LOGIN_NAME_REGEX;
