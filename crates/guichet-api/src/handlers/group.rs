//! Group-scope query handler.

use axum::Json;
use axum::extract::{Query, State};

use guichet_core::error::AppError;

use crate::dto::request::ScopeQuery;
use crate::dto::response::ScopedLocationsResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/groups/locations?prefix=…
///
/// Location names the caller may see or manage under the given group-name
/// prefix. The session resolves first (extractor), then the scope engine
/// runs; an empty set is a 200, not an error.
pub async fn scoped_locations(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<ScopedLocationsResponse>, ApiError> {
    let prefix = query
        .prefix
        .ok_or_else(|| AppError::validation("Missing 'prefix' query parameter"))?;

    let locations = state.scope_engine.locations_for(user.id, &prefix).await?;

    Ok(Json(ScopedLocationsResponse { locations }))
}
