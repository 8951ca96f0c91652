//! Storage layer for the patro dual-calendar lookup service: diesel schema,
//! models, connection pooling, the day-query builder, and the artifact
//! import pass.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub mod db;
pub mod error;
pub mod model;

/// Embedded SQL migrations for the three calendar tables.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
