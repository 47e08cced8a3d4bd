//! # guichet-entity
//!
//! Domain entity models for the Guichet helpdesk backend.

pub mod membership;
pub mod ticket;
pub mod user;

pub use membership::GroupMembership;
pub use ticket::Ticket;
pub use user::User;
