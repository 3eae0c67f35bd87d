//! Payment methods accepted for advisory fees.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/payment-methods
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
            "/payment-methods",
            query.as_deref(),
            None,
            "Erro ao buscar formas de pagamento",
        )
        .await
}

/// POST /api/payment-methods
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
            "/payment-methods",
            None,
            Some(body),
            "Erro ao criar forma de pagamento",
        )
        .await
}

/// PUT /api/payment-methods/:id
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
            &format!("/payment-methods/{id}"),
            None,
            Some(body),
            "Erro ao atualizar forma de pagamento",
        )
        .await
}

/// DELETE /api/payment-methods/:id
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
            &format!("/payment-methods/{id}"),
            None,
            None,
            "Erro ao excluir forma de pagamento",
        )
        .await
}
