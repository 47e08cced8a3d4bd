//! HTTP request handlers.

pub mod auth;
pub mod group;
pub mod health;
pub mod support;
pub mod user;
