//! Wallet transactions.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/transactions
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
            "/transactions",
            query.as_deref(),
            None,
            "Erro ao buscar transações",
        )
        .await
}

/// POST /api/transactions
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
            "/transactions",
            None,
            Some(body),
            "Erro ao criar transação",
        )
        .await
}

/// GET /api/transactions/:id
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
            &format!("/transactions/{id}"),
            None,
            None,
            "Erro ao buscar transação",
        )
        .await
}

/// PUT /api/transactions/:id
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
            &format!("/transactions/{id}"),
            None,
            Some(body),
            "Erro ao atualizar transação",
        )
        .await
}

/// DELETE /api/transactions/:id
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
            &format!("/transactions/{id}"),
            None,
            None,
            "Erro ao excluir transação",
        )
        .await
}

/// GET /api/transactions/wallet/:wallet_id
pub async fn by_wallet(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(wallet_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/transactions/wallet/{wallet_id}"),
            query.as_deref(),
            None,
            "Erro ao buscar transações",
        )
        .await
}
