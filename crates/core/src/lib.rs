//! Framework-free domain primitives shared by the db and api crates.

pub mod error;
pub mod listfield;
pub mod media_types;
pub mod roles;
pub mod storage;
pub mod types;
