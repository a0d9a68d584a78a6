//! User listing relay endpoint

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// GET /api/users
///
/// Relays the upstream user listing verbatim. Every invocation performs a
/// fresh upstream call; a failed call becomes a 500 with the structured
/// `{error, message}` body and a server-side diagnostic, never a retry.
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    debug!(
        source = state.directory_source.source_name(),
        "Relaying user listing"
    );

    match state.directory_source.fetch_raw().await {
        Ok(body) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()),
        Err(err) => {
            error!("Error fetching users from upstream: {}", err);
            Err(ApiError::from(err))
        }
    }
}
