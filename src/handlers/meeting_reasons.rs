//! Catalog of meeting reasons selectable when scheduling.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/meeting-reasons
pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    RawQuery(query): RawQuery,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            "/meeting-reasons",
            query.as_deref(),
            None,
            "Erro ao buscar motivos de reunião",
        )
        .await
}

/// POST /api/meeting-reasons
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
            "/meeting-reasons",
            None,
            Some(body),
            "Erro ao criar motivo de reunião",
        )
        .await
}

/// PUT /api/meeting-reasons/:id
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
            &format!("/meeting-reasons/{id}"),
            None,
            Some(body),
            "Erro ao atualizar motivo de reunião",
        )
        .await
}

/// DELETE /api/meeting-reasons/:id
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
            &format!("/meeting-reasons/{id}"),
            None,
            None,
            "Erro ao excluir motivo de reunião",
        )
        .await
}
