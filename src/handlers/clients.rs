//! Clients managed by an advisor.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/clients
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
            "/clients",
            query.as_deref(),
            None,
            "Erro ao buscar clientes",
        )
        .await
}

/// POST /api/clients
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
            "/clients",
            None,
            Some(body),
            "Erro ao criar cliente",
        )
        .await
}

/// GET /api/clients/:id
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
            &format!("/clients/{id}"),
            None,
            None,
            "Erro ao buscar cliente",
        )
        .await
}

/// PUT /api/clients/:id
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
            &format!("/clients/{id}"),
            None,
            Some(body),
            "Erro ao atualizar cliente",
        )
        .await
}

/// DELETE /api/clients/:id
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
            &format!("/clients/{id}"),
            None,
            None,
            "Erro ao excluir cliente",
        )
        .await
}

/// GET /api/clients/user/:user_id - clients assigned to one advisor.
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
            &format!("/clients/user/{user_id}"),
            query.as_deref(),
            None,
            "Erro ao buscar clientes",
        )
        .await
}
