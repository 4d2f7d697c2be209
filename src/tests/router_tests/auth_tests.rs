use crate::tests::utils::{address_body, body_json, TestApp};
use astra::Body;
use http::Method;
use rusqlite::params;
use serde_json::json;

#[test]
fn requests_without_a_session_are_unauthorised() {
    let app = TestApp::new();

    for (method, uri) in [
        (Method::GET, "/appraisals"),
        (Method::POST, "/appraisals"),
        (Method::GET, "/appraisals/1"),
        (Method::PATCH, "/api/appraisals/1"),
        (Method::DELETE, "/appraisals/1"),
    ] {
        let resp = app.json(method, uri, None, Some(address_body()));
        assert_eq!(resp.status(), 401, "{uri}");
        assert_eq!(body_json(resp), json!({ "error": "Unauthorised" }));
    }
}

#[test]
fn unknown_tokens_are_unauthorised() {
    let app = TestApp::new();
    let resp = app.json(Method::GET, "/appraisals", Some("not-a-real-token"), None);
    assert_eq!(resp.status(), 401);
}

#[test]
fn browser_pages_render_an_error_page_when_unauthorised() {
    let app = TestApp::new();
    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/appraisals/new")
        .body(Body::empty())
        .unwrap();

    let resp = app.send(req);
    assert_eq!(resp.status(), 401);
    let content_type = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[test]
fn session_cookie_is_accepted() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/api/appraisals")
        .header("Cookie", format!("theme=dark; session={token}"))
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.send(req).status(), 200);
}

#[test]
fn revoked_and_expired_sessions_are_refused() {
    let app = TestApp::new();
    let revoked = app.login("agent-1");
    let expired = app.login("agent-2");

    app.state
        .db
        .with_conn(|conn| {
            conn.execute("update sessions set revoked_at = 1 where user_id = ?", params!["agent-1"])?;
            conn.execute("update sessions set expires_at = 1 where user_id = ?", params!["agent-2"])?;
            Ok(())
        })
        .unwrap();

    for token in [revoked, expired] {
        let resp = app.json(Method::GET, "/appraisals", Some(&token), None);
        assert_eq!(resp.status(), 401);
    }
}

#[test]
fn identity_is_checked_before_the_path_id() {
    let app = TestApp::new();
    assert_eq!(app.json(Method::GET, "/appraisals/abc", None, None).status(), 401);

    let token = app.login("agent-1");
    assert_eq!(app.json(Method::GET, "/appraisals/abc", Some(&token), None).status(), 400);
}
