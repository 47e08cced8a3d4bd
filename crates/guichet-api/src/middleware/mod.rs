//! HTTP middleware layers.

pub mod gate;
pub mod logging;
