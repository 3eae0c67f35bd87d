//! Monthly budgets per client.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/budgets
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
            "/budgets",
            query.as_deref(),
            None,
            "Erro ao buscar orçamentos",
        )
        .await
}

/// GET /api/budgets/client/:client_id
pub async fn by_client(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(client_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/budgets/client/{client_id}"),
            query.as_deref(),
            None,
            "Erro ao buscar orçamentos",
        )
        .await
}

/// POST /api/budgets
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
            "/budgets",
            None,
            Some(body),
            "Erro ao criar orçamento",
        )
        .await
}

/// PUT /api/budgets/:id
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
            &format!("/budgets/{id}"),
            None,
            Some(body),
            "Erro ao atualizar orçamento",
        )
        .await
}

/// DELETE /api/budgets/:id
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
            &format!("/budgets/{id}"),
            None,
            None,
            "Erro ao excluir orçamento",
        )
        .await
}
