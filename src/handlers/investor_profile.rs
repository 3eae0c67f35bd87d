//! Investor-profile questionnaire: questions, answers, and the computed
//! profile per client. The scoring lives in the backend.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/investor-profile/questions
pub async fn questions(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            "/investor-profile/questions",
            None,
            None,
            "Erro ao buscar questionário",
        )
        .await
}

/// GET /api/investor-profile/client/:client_id
pub async fn by_client(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(client_id): Path<String>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/investor-profile/client/{client_id}"),
            None,
            None,
            "Erro ao buscar perfil do investidor",
        )
        .await
}

/// POST /api/investor-profile/answers
pub async fn submit_answers(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<Value>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::POST,
            "/investor-profile/answers",
            None,
            Some(body),
            "Erro ao enviar respostas do questionário",
        )
        .await
}
