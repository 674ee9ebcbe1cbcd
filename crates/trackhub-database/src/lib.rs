//! # trackhub-database
//!
//! PostgreSQL access layer for TrackHub. Exposes the connection pool,
//! the migration runner, and one repository per logical table.
//!
//! Repositories only expose tenant-scoped finders for protected data, so
//! tenant isolation is enforced at the query layer rather than left to
//! individual handlers.

pub mod connection;
pub mod migration;
pub mod repositories;
