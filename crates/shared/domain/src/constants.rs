//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_CUSTOMER: &str = "customer";

/// Administrator role with catalog write privileges
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_CUSTOMER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// User Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted at registration and login
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Display name bounds (characters, after trimming)
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;

/// Email bounds (characters, after trimming)
pub const MIN_EMAIL_LENGTH: usize = 5;
pub const MAX_EMAIL_LENGTH: usize = 255;

// =============================================================================
// Product Validation
// =============================================================================

pub const MIN_PRODUCT_NAME_LENGTH: usize = 2;
pub const MAX_PRODUCT_NAME_LENGTH: usize = 200;

pub const MIN_CATEGORY_LENGTH: usize = 2;
pub const MAX_CATEGORY_LENGTH: usize = 100;

pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Number of decimal places a price may carry
pub const PRICE_SCALE: u32 = 2;

/// Largest accepted price, in cents (keeps storage in a signed 64-bit column)
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

// =============================================================================
// Pagination
// =============================================================================

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page
pub const MAX_PAGE_SIZE: u64 = 100;

/// Maximum length of a search term
pub const MAX_SEARCH_LENGTH: usize = 200;

// =============================================================================
// Authentication
// =============================================================================

/// Default session token lifetime in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Default name of the session cookie
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "authToken";
