//! Shared application state type.

use std::sync::Arc;

use crate::bootstrap::AxumContext;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`AxumContext`] containing the application services
/// needed by the API handlers.
pub type AppState = Arc<AxumContext>;
