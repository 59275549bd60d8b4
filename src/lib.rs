//! # backoffice-db — shared database layer for the Backoffice server
//!
//! This crate owns the one PostgreSQL connection pool the Backoffice backend
//! shares across every request handler.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`db`] | PostgreSQL connection pool (lazy `OnceCell` singleton) and its startup readiness probe |
//! | [`settings`] | Typed configuration loaded from the environment and an optional `config.toml` |
//! | [`error`] | Configuration-class errors surfaced by pool initialization |
//!
//! The pool accessor is re-exported at the crate root, so
//! `backoffice_db::get_pool` and `backoffice_db::db::get_pool` are the same
//! function and hand back the same `&'static PgPool`.

pub mod db;
pub mod error;
pub mod settings;

pub use db::get_pool;
pub use error::DbError;
pub use settings::Settings;
