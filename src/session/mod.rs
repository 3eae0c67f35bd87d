//! Server-side session state.
//!
//! The session record (bearer token plus the user decoded from it at login)
//! is the only state this process owns. The browser holds an opaque httpOnly
//! cookie carrying the session id; the token itself never reaches the client.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header::COOKIE, HeaderMap};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::auth::Claims;

/// User identity shown to the browser, decoded from the backend JWT at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub login: String,
    pub role: String,
}

impl From<Claims> for SessionUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            login: claims.login,
            role: claims.role,
        }
    }
}

/// One authenticated browser session: the backend bearer token and its user.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Process-local session registry keyed by the cookie's session id.
///
/// Sessions live until logout; token expiry is enforced by the backend on
/// every relayed call, not here.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return the id to hand to the browser.
    pub async fn insert(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, session);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn remove(&self, id: Uuid) -> Option<Session> {
        self.inner.write().await.remove(&id)
    }
}

/// Pull the session id out of a request's headers. Synchronous on purpose:
/// callers resolve the id before touching the store, so no request borrow is
/// held across an await.
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    session_id_from_cookies(header, cookie_name)
}

/// Pull the session id out of a `Cookie` request header value.
pub fn session_id_from_cookies(header: &str, cookie_name: &str) -> Option<Uuid> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == cookie_name {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

/// `Set-Cookie` value installing the session id after login.
pub fn login_cookie(cfg: &SessionConfig, id: Uuid) -> String {
    let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cfg.cookie_name, id);
    if cfg.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value clearing the session cookie at logout.
pub fn logout_cookie(cfg: &SessionConfig) -> String {
    let mut cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        cfg.cookie_name
    );
    if cfg.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}
