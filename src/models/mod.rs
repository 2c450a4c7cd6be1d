//! Domain models
//!
//! Domain-side representations, independent of the wire format.

pub mod user;

pub use user::*;
