use crate::config::{AppConfig, SessionConfig};
use crate::proxy::{Backend, BackendError};
use crate::session::SessionStore;

/// Shared handler context: the backend client, the session registry, and the
/// cookie settings. Everything else is per-request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: Backend,
    pub sessions: SessionStore,
    pub session_cfg: SessionConfig,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Ok(Self {
            backend: Backend::new(&config.backend.base_url)?,
            sessions: SessionStore::new(),
            session_cfg: config.session.clone(),
        })
    }
}
