//! Advisor and assistant accounts.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/users
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
            "/users",
            query.as_deref(),
            None,
            "Erro ao buscar usuários",
        )
        .await
}

/// POST /api/users
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
            "/users",
            None,
            Some(body),
            "Erro ao criar usuário",
        )
        .await
}

/// GET /api/users/roles
pub async fn roles(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            "/users/roles",
            None,
            None,
            "Erro ao buscar perfis de acesso",
        )
        .await
}

/// GET /api/users/:id
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
            &format!("/users/{id}"),
            None,
            None,
            "Erro ao buscar usuário",
        )
        .await
}

/// PUT /api/users/:id
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
            &format!("/users/{id}"),
            None,
            Some(body),
            "Erro ao atualizar usuário",
        )
        .await
}

/// DELETE /api/users/:id
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
            &format!("/users/{id}"),
            None,
            None,
            "Erro ao excluir usuário",
        )
        .await
}
