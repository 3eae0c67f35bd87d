//! Transaction categories used to classify wallet movements.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/transaction-categories
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
            "/transaction-categories",
            query.as_deref(),
            None,
            "Erro ao buscar categorias de transação",
        )
        .await
}

/// POST /api/transaction-categories
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
            "/transaction-categories",
            None,
            Some(body),
            "Erro ao criar categoria de transação",
        )
        .await
}

/// PUT /api/transaction-categories/:id
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
            &format!("/transaction-categories/{id}"),
            None,
            Some(body),
            "Erro ao atualizar categoria de transação",
        )
        .await
}

/// DELETE /api/transaction-categories/:id
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
            &format!("/transaction-categories/{id}"),
            None,
            None,
            "Erro ao excluir categoria de transação",
        )
        .await
}
