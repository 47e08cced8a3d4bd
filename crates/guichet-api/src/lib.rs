//! # guichet-api
//!
//! HTTP API layer for the Guichet helpdesk backend: routes, handlers,
//! extractors, middleware, and DTOs.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
