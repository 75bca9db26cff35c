//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates
//! - `Serialize` response shapes where the API exposes a reduced view

pub mod episode;
pub mod favorite;
pub mod media;
pub mod session;
pub mod user;
