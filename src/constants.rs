//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// User store backends selectable through `USER_STORE`
pub mod stores {
    pub const POSTGRES: &str = "postgres";
    pub const MEMORY: &str = "memory";
}

// =============================================================================
// API PATHS
// =============================================================================

/// Collection path of the user resource
pub const USERS_PATH: &str = "/api/users";

// =============================================================================
// VALIDATION
// =============================================================================

/// Login name minimum length
pub const MIN_LOGIN_NAME_LENGTH: u64 = 1;

/// Login name maximum length
pub const MAX_LOGIN_NAME_LENGTH: u64 = 64;

/// Maximum length of first and last names
pub const MAX_PERSON_NAME_LENGTH: u64 = 255;
