//! CLI surface for the educa platform.
//!
//! Only the argument parser lives here; wiring happens in `main.rs`,
//! which delegates to the `educa-axum` bootstrap.

pub mod commands;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
