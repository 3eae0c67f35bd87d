//! Meeting schedulings shown on the advisor calendar.

use axum::extract::{Path, RawQuery, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/schedulings/user/:user_id
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
            &format!("/schedulings/user/{user_id}"),
            query.as_deref(),
            None,
            "Erro ao buscar agendamentos",
        )
        .await
}

/// POST /api/schedulings
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
            "/schedulings",
            None,
            Some(body),
            "Erro ao criar agendamento",
        )
        .await
}

/// GET /api/schedulings/:id
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
            &format!("/schedulings/{id}"),
            None,
            None,
            "Erro ao buscar agendamento",
        )
        .await
}

/// PUT /api/schedulings/:id
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
            &format!("/schedulings/{id}"),
            None,
            Some(body),
            "Erro ao atualizar agendamento",
        )
        .await
}

/// DELETE /api/schedulings/:id
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
            &format!("/schedulings/{id}"),
            None,
            None,
            "Erro ao excluir agendamento",
        )
        .await
}
