//! Axum web adapter for the educa platform.
//!
//! Controllers are thin request/response translators: they extract and
//! validate input shape, delegate to the application services from
//! `educa-core`, and wrap the outcome in the uniform response envelope.

pub mod bootstrap;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, serve};
pub use envelope::{Envelope, ResponseType};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
