//! SQLite storage implementation for Holdfolio.
//!
//! This crate provides the database-backed holding collections using Diesel
//! ORM with SQLite. It implements the repository traits defined in
//! `holdfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The holding repository (per-user `stocks` and `mutual_funds` tables)
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod holdings;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use holdings::HoldingRepository;

// Re-export from holdfolio-core for convenience
pub use holdfolio_core::errors::{DatabaseError, Error, Result};
