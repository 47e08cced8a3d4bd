//! Support-staff handlers, guarded by the support-membership gate.

use axum::Json;
use axum::extract::State;

use guichet_entity::ticket::Ticket;

use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/support/tickets
///
/// Open tickets, reserved for users with at least one membership under
/// `Support.` regardless of location.
pub async fn open_tickets(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    state.scope_engine.require_support(user.id).await?;

    let tickets = state.ticket_repo.list_open().await?;
    Ok(Json(tickets))
}
