//! Investment wallets.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/wallets/user/:user_id
pub async fn by_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(user_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/wallets/user/{user_id}"),
            query.as_deref(),
            None,
            "Erro ao buscar carteiras",
        )
        .await
}

/// GET /api/wallets/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/wallets/{id}"),
            None,
            None,
            "Erro ao buscar carteira",
        )
        .await
}

/// POST /api/wallets
pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<Value>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::POST,
            "/wallets",
            None,
            Some(body),
            "Erro ao criar carteira",
        )
        .await
}

/// PUT /api/wallets/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::PUT,
            &format!("/wallets/{id}"),
            None,
            Some(body),
            "Erro ao atualizar carteira",
        )
        .await
}

/// DELETE /api/wallets/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::DELETE,
            &format!("/wallets/{id}"),
            None,
            None,
            "Erro ao excluir carteira",
        )
        .await
}
