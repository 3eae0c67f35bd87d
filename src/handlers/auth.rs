//! Login, logout, password change and the current-user endpoint.
//!
//! Login is the one route with real local behavior: it relays the credentials
//! to the backend, decodes the returned access token into a session user,
//! registers the session, and hands the browser an opaque httpOnly cookie.
//! The token itself stays server-side.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::decode_claims;
use crate::proxy::{Method, Relay};
use crate::session::{login_cookie, logout_cookie, session_id_from_headers, Session, SessionUser};
use crate::state::AppState;

const LOGIN_FALLBACK: &str = "Erro ao realizar login";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Subset of the backend's login response the gateway needs.
#[derive(Debug, Deserialize)]
struct LoginGrant {
    access_token: String,
    #[serde(rename = "mustChangePassword", default)]
    must_change_password: bool,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Response {
    let relay = state
        .backend
        .post_public(
            "/auth/login",
            json!({ "login": payload.login, "password": payload.password }),
            LOGIN_FALLBACK,
        )
        .await;

    // Backend rejections (wrong password, locked user) pass through as-is.
    if !relay.is_success() {
        return relay.into_response();
    }

    let grant: LoginGrant = match serde_json::from_value(relay.body) {
        Ok(grant) => grant,
        Err(err) => {
            tracing::error!(error = %err, "login response missing access_token");
            return Relay::fallback(LOGIN_FALLBACK).into_response();
        }
    };

    let user: SessionUser = match decode_claims(&grant.access_token) {
        Ok(claims) => claims.into(),
        Err(err) => {
            tracing::error!(error = %err, "could not decode access token");
            return Relay::fallback(LOGIN_FALLBACK).into_response();
        }
    };

    // A re-login from a browser that still carries a session cookie must not
    // orphan the old entry in the store.
    if let Some(old) = session_id_from_headers(&headers, &state.session_cfg.cookie_name) {
        state.sessions.remove(old).await;
    }

    let session = Session {
        token: grant.access_token,
        user: user.clone(),
    };
    let id = state.sessions.insert(session).await;
    tracing::info!(user = %user.login, "session opened");

    let body = json!({
        "user": user,
        "mustChangePassword": grant.must_change_password,
        "success": true,
    });

    (
        StatusCode::OK,
        [(SET_COOKIE, login_cookie(&state.session_cfg, id))],
        Json(body),
    )
        .into_response()
}

/// POST /api/auth/logout
///
/// Always succeeds: drops the session if the cookie resolves to one, and
/// expires the cookie either way. No backend call.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let id = session_id_from_headers(&headers, &state.session_cfg.cookie_name);

    if let Some(id) = id {
        if let Some(session) = state.sessions.remove(id).await {
            tracing::info!(user = %session.user.login, "session closed");
        }
    }

    (
        StatusCode::OK,
        [(SET_COOKIE, logout_cookie(&state.session_cfg))],
        Json(json!({ "success": true })),
    )
        .into_response()
}

/// POST /api/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<Value>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::POST,
            "/auth/change-password",
            None,
            Some(body),
            "Erro ao alterar senha",
        )
        .await
}

/// GET /api/auth/me - the session user, no backend call.
pub async fn me(Extension(session): Extension<Session>) -> Json<Value> {
    Json(json!({ "user": session.user }))
}
