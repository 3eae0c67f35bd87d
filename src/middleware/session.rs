use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::session::session_id_from_headers;
use crate::state::AppState;

/// Session middleware guarding every protected /api route.
///
/// Resolves the session cookie against the store and injects the [`Session`]
/// as a request extension. A missing or unknown session short-circuits with
/// 401 before any backend call is made - this is the authoritative check;
/// whatever the UI does with redirects is best-effort UX only.
///
/// The session id is read from the headers before the store lookup so the
/// future holds no request borrow across the await.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let id = session_id_from_headers(request.headers(), &state.session_cfg.cookie_name);

    let session = match id {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };

    let session = match session {
        Some(session) => session,
        None => return ApiError::unauthorized("Não autenticado").into_response(),
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}
