//! Ticket repository implementation.

use sqlx::PgPool;

use guichet_core::error::{AppError, ErrorKind};
use guichet_core::result::AppResult;
use guichet_entity::ticket::Ticket;

/// Repository for ticket queries used by the support surface.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All tickets not yet closed, oldest first.
    pub async fn list_open(&self) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE status <> 'closed' ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list open tickets", e))
    }
}
