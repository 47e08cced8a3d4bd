//! Ticket entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A helpdesk ticket.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: i64,
    /// Short summary.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Current status (`open`, `in_progress`, `closed`).
    pub status: String,
    /// The user who opened the ticket.
    pub requester_id: i64,
    /// The location the ticket concerns, if any.
    pub location_id: Option<i64>,
    /// When the ticket was opened.
    pub created_at: DateTime<Utc>,
}
