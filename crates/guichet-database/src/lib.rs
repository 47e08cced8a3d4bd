//! # guichet-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for Guichet. The repositories implement the
//! data-access traits declared in `guichet-auth::store`.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
