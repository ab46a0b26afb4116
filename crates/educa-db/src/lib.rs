//! `SQLite` persistence adapter for the educa platform.
//!
//! Implements the repository ports from `educa-core` using sqlx. The
//! `SqlitePool` never leaks through the port trait signatures.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::{SqliteAlunoRepository, SqliteCursoRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
