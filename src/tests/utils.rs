use crate::auth::sessions::create_session;
use crate::auth::SessionAuth;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::{Body, Request, Response};
use chrono::Utc;
use http::Method;
use serde_json::Value;
use std::io::Read;
use tempfile::TempDir;

/// A router over a throwaway database. The directory lives as long as the app.
pub struct TestApp {
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("test.sqlite3");
        let db = Database::new(path.to_string_lossy().into_owned());
        init_db(&db).expect("schema applies");

        let config = AppConfig {
            db_path: db.path().to_string(),
            ..AppConfig::default()
        };
        let state = AppState {
            identity: Box::new(SessionAuth::new(db.clone())),
            db,
            config,
        };
        Self { state, _dir: dir }
    }

    /// A live session token for `user_id`.
    pub fn login(&self, user_id: &str) -> String {
        self.state
            .db
            .with_conn(|conn| create_session(conn, user_id, Utc::now().timestamp(), 3600))
            .expect("session created")
    }

    pub fn send(&self, req: Request) -> Response {
        handle(req, &self.state)
    }

    pub fn json(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
        let mut builder = http::Request::builder()
            .method(method)
            .uri(uri)
            .header("Accept", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).expect("request builds"))
    }

    /// A browser GET carrying the session cookie.
    pub fn page(&self, uri: &str, token: &str) -> Response {
        let req = http::Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Cookie", format!("session={token}"))
            .body(Body::empty())
            .expect("request builds");
        self.send(req)
    }

    /// A browser form POST carrying the session cookie.
    pub fn form(&self, uri: &str, token: &str, pairs: &[(&str, &str)]) -> Response {
        let body: String = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        let req = http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Accept", "text/html")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Cookie", format!("session={token}"))
            .body(Body::from(body))
            .expect("request builds");
        self.send(req)
    }

    /// Creates a record over the JSON API and returns its body.
    pub fn create(&self, token: &str, body: Value) -> Value {
        let resp = self.json(Method::POST, "/appraisals", Some(token), Some(body));
        assert_eq!(resp.status(), 201);
        body_json(resp)
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("body reads");
    body
}

pub fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("body is json")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Pulls the hidden `state` input back out of a rendered wizard page.
pub fn wizard_state(html: &str) -> String {
    let marker = r#"name="state" value=""#;
    let start = html.find(marker).expect("state input present") + marker.len();
    let end = start + html[start..].find('"').expect("state value closes");
    html[start..end]
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn address_body() -> Value {
    serde_json::json!({
        "streetAddress": "11 Maple Crescent",
        "suburb": "Helena Valley",
        "postcode": "6056"
    })
}
