//! Presentation layer for capital-ai
//!
//! This crate contains the HTTP endpoints, the mapping of service errors
//! onto responses, and the CLI definition.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, router, serve};
