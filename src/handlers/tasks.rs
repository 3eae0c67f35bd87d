//! Advisor to-do tasks.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/tasks
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
            "/tasks",
            query.as_deref(),
            None,
            "Erro ao buscar tarefas",
        )
        .await
}

/// POST /api/tasks
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
            "/tasks",
            None,
            Some(body),
            "Erro ao criar tarefa",
        )
        .await
}

/// GET /api/tasks/user/:user_id
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
            &format!("/tasks/user/{user_id}"),
            query.as_deref(),
            None,
            "Erro ao buscar tarefas",
        )
        .await
}

/// GET /api/tasks/:id
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
            &format!("/tasks/{id}"),
            None,
            None,
            "Erro ao buscar tarefa",
        )
        .await
}

/// PUT /api/tasks/:id
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
            &format!("/tasks/{id}"),
            None,
            Some(body),
            "Erro ao atualizar tarefa",
        )
        .await
}

/// DELETE /api/tasks/:id
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
            &format!("/tasks/{id}"),
            None,
            None,
            "Erro ao excluir tarefa",
        )
        .await
}
