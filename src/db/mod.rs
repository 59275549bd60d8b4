//! # Database module — PostgreSQL connection pool management
//!
//! Provides the shared PostgreSQL connection pool used by every part of the
//! Backoffice server.
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] loads
//! [`Settings`](crate::Settings), builds the pool without touching the
//! network (`connect_lazy`), and caches the result for all subsequent
//! callers. A detached readiness probe then checks that the backend is
//! actually reachable and reports the outcome through `tracing` — nothing
//! waits on it, and its failure does not invalidate the handle.
//!
//! ## Re-exports
//!
//! - [`get_pool`] — returns `&'static PgPool`, initialising it on first use.

mod pool;

pub use pool::get_pool;
