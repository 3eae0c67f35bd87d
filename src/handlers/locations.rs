//! Country / state / city lookups for address forms. Read-only.

use axum::extract::{Path, State};
use axum::Extension;

use crate::proxy::{Method, Relay};
use crate::session::Session;
use crate::state::AppState;

/// GET /api/locations/countries
pub async fn countries(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            "/locations/countries",
            None,
            None,
            "Erro ao buscar países",
        )
        .await
}

/// GET /api/locations/countries/:id/states
pub async fn states(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/locations/countries/{id}/states"),
            None,
            None,
            "Erro ao buscar estados",
        )
        .await
}

/// GET /api/locations/states/:id/cities
pub async fn cities(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Relay {
    state
        .backend
        .forward(
            &session.token,
            Method::GET,
            &format!("/locations/states/{id}/cities"),
            None,
            None,
            "Erro ao buscar cidades",
        )
        .await
}
