//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

/// Login names are restricted to ASCII word characters
pub static LOGIN_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("login name pattern is a valid regex")
});
