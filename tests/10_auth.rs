mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_creates_session_and_relays_user() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    let token = common::issue_token("u-42", "Alice Example", "alice", "advisor");
    stub.respond_json(200, json!({ "access_token": token, "mustChangePassword": false }));

    let (status, headers, body) = common::send(
        &gw,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": "alice", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["mustChangePassword"], json!(false));
    assert_eq!(body["user"]["id"], json!("u-42"));
    assert_eq!(body["user"]["login"], json!("alice"));
    assert_eq!(body["user"]["role"], json!("advisor"));

    // Token must never reach the browser; only the opaque session id does.
    let set_cookie = headers.get("set-cookie").unwrap().to_str()?;
    assert!(set_cookie.starts_with("advisor_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(!set_cookie.contains(&token));

    // The backend saw the credentials at /auth/login, unauthenticated.
    let seen = stub.last_request();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.path, "/auth/login");
    assert_eq!(seen.authorization, None);
    assert_eq!(seen.body, Some(json!({ "login": "alice", "password": "secret" })));

    Ok(())
}

#[tokio::test]
async fn login_relays_backend_rejection() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    stub.respond_json(401, json!({ "message": "Usuário ou senha inválidos" }));

    let (status, headers, body) = common::send(
        &gw,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": "alice", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Usuário ou senha inválidos" }));
    assert!(headers.get("set-cookie").is_none(), "no session on failed login");

    Ok(())
}

#[tokio::test]
async fn login_with_unreachable_backend_is_a_500() -> Result<()> {
    let port = portpicker::pick_unused_port().expect("free port");
    let gw = common::gateway(&format!("http://127.0.0.1:{}", port));

    let (status, _headers, body) = common::send(
        &gw,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": "alice", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Erro ao realizar login" }));

    Ok(())
}

#[tokio::test]
async fn login_with_garbage_token_is_a_500() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    stub.respond_json(200, json!({ "access_token": "not-a-jwt", "mustChangePassword": false }));

    let (status, _headers, body) = common::send(
        &gw,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "login": "alice", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Erro ao realizar login" }));

    Ok(())
}

#[tokio::test]
async fn relogin_replaces_the_previous_session() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    let first_cookie = common::login(&gw, &stub, "alice").await;

    // Second login from the same browser, old cookie still attached.
    let token = common::issue_token("u-1", "Alice Example", "alice", "advisor");
    stub.respond_json(200, json!({ "access_token": token, "mustChangePassword": false }));
    let (status, headers, _body) = common::send(
        &gw,
        "POST",
        "/api/auth/login",
        Some(&first_cookie),
        Some(json!({ "login": "alice", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let second_cookie = headers
        .get("set-cookie")
        .unwrap()
        .to_str()?
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert_ne!(first_cookie, second_cookie);

    // The old entry is gone from the store, not orphaned.
    let (status, _h, body) =
        common::send(&gw, "GET", "/api/auth/me", Some(&first_cookie), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Não autenticado" }));

    let (status, _h, _b) =
        common::send(&gw, "GET", "/api/auth/me", Some(&second_cookie), None).await;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn me_returns_the_session_user_without_backend_calls() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    let cookie = common::login(&gw, &stub, "alice").await;
    let hits_after_login = stub.hits();

    let (status, _headers, body) =
        common::send(&gw, "GET", "/api/auth/me", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["login"], json!("alice"));
    assert_eq!(stub.hits(), hits_after_login, "me is served locally");

    Ok(())
}

#[tokio::test]
async fn logout_invalidates_the_session() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    let cookie = common::login(&gw, &stub, "alice").await;

    let (status, headers, body) =
        common::send(&gw, "POST", "/api/auth/logout", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let set_cookie = headers.get("set-cookie").unwrap().to_str()?;
    assert!(set_cookie.contains("Max-Age=0"), "cookie should be expired");

    // The old session id no longer authenticates.
    let (status, _headers, body) =
        common::send(&gw, "GET", "/api/auth/me", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Não autenticado" }));

    Ok(())
}

#[tokio::test]
async fn logout_without_a_session_still_succeeds() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    let (status, _headers, body) =
        common::send(&gw, "POST", "/api/auth/logout", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(stub.hits(), 0);

    Ok(())
}

#[tokio::test]
async fn change_password_relays_with_the_session_token() -> Result<()> {
    let stub = common::StubBackend::spawn().await;
    let gw = common::gateway(&stub.base_url);

    let cookie = common::login(&gw, &stub, "alice").await;
    stub.respond_json(200, json!({ "success": true }));

    let (status, _headers, _body) = common::send(
        &gw,
        "POST",
        "/api/auth/change-password",
        Some(&cookie),
        Some(json!({ "currentPassword": "secret", "newPassword": "s3cr3t!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let seen = stub.last_request();
    assert_eq!(seen.path, "/auth/change-password");
    assert!(seen.authorization.unwrap().starts_with("Bearer "));

    Ok(())
}
