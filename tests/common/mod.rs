#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use advisor_gateway::app::app;
use advisor_gateway::auth::Claims;
use advisor_gateway::config::SessionConfig;
use advisor_gateway::proxy::Backend;
use advisor_gateway::session::SessionStore;
use advisor_gateway::state::AppState;

/// One request as seen by the stub backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum StubBody {
    Json(Value),
    Text(String),
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    response: Arc<Mutex<Option<(u16, StubBody)>>>,
}

/// A scripted backend bound to an ephemeral local port. Records every
/// request and answers each one with whatever response was last scripted.
pub struct StubBackend {
    pub base_url: String,
    state: StubState,
}

impl StubBackend {
    pub async fn spawn() -> Self {
        let state = StubState::default();
        let router = Router::new()
            .fallback(record_and_respond)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub backend");
        let addr = listener.local_addr().expect("stub backend addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Script the next responses as a JSON body with the given status.
    pub fn respond_json(&self, status: u16, body: Value) {
        *self.state.response.lock().unwrap() = Some((status, StubBody::Json(body)));
    }

    /// Script the next responses as a plain-text body with the given status.
    pub fn respond_text(&self, status: u16, body: &str) {
        *self.state.response.lock().unwrap() = Some((status, StubBody::Text(body.to_string())));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().last().cloned().expect("stub backend saw no requests")
    }
}

async fn record_and_respond(State(state): State<StubState>, request: Request<Body>) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let authorization = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice::<Value>(&bytes).ok();

    state.requests.lock().unwrap().push(Recorded {
        method,
        path,
        query,
        authorization,
        body,
    });

    let scripted = state.response.lock().unwrap().clone();
    let (status, body) = scripted.unwrap_or((200, StubBody::Json(json!({}))));
    let status = StatusCode::from_u16(status).expect("scripted status");

    match body {
        StubBody::Json(value) => (status, Json(value)).into_response(),
        StubBody::Text(text) => (status, text).into_response(),
    }
}

/// The gateway under test, wired to a given backend base URL.
pub struct Gateway {
    pub app: Router,
    pub state: AppState,
}

pub fn gateway(backend_base_url: &str) -> Gateway {
    gateway_with_sessions(backend_base_url, SessionStore::new())
}

/// Same gateway, sharing an existing session store. Lets a test log in
/// against one backend and then point the relay at another (e.g. a dead port).
pub fn gateway_with_sessions(backend_base_url: &str, sessions: SessionStore) -> Gateway {
    let state = AppState {
        backend: Backend::new(backend_base_url).expect("backend url"),
        sessions,
        session_cfg: SessionConfig {
            cookie_name: "advisor_session".to_string(),
            cookie_secure: false,
        },
    };

    Gateway {
        app: app(state.clone()),
        state,
    }
}

/// Drive one request through the router in-process.
pub async fn send(
    gateway: &Gateway,
    method: &str,
    path: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }

    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = gateway
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("router never fails");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, headers, value)
}

/// Issue a backend-style access token. The gateway decodes without verifying,
/// so the signing secret is arbitrary.
pub fn issue_token(sub: &str, name: &str, login: &str, role: &str) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        name: name.to_string(),
        login: login.to_string(),
        role: role.to_string(),
        exp: 4102444800,
        iat: 1700000000,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("token")
}

/// Log in against the stub backend and return the session cookie pair
/// (`advisor_session=<uuid>`) to attach to subsequent requests.
pub async fn login(gateway: &Gateway, stub: &StubBackend, login_name: &str) -> String {
    let token = issue_token("u-1", "Alice Example", login_name, "advisor");
    stub.respond_json(200, json!({ "access_token": token, "mustChangePassword": false }));

    let (status, headers, _body) = send(
        gateway,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": login_name, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login against stub should succeed");

    let set_cookie = headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("login sets a session cookie");

    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
