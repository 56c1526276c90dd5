//! Users API Library
//!
//! This library provides a small CRUD service over a single `users` table,
//! split into domain types, PostgreSQL adapters and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
