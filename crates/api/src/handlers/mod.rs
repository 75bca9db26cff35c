//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod media_admin;
pub mod stream;
