//! Well-known role name constants.
//!
//! These must match the CHECK constraint in the users migration.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
