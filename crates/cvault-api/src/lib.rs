//! Axum HTTP API server.
//!
//! This crate provides:
//! - Bearer token (HS256 JWT) authentication
//! - The video upload orchestrator and record endpoints
//! - Signed-URL materialization on every read path

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod signing;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
