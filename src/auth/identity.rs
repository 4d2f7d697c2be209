// src/auth/identity.rs
use crate::auth::sessions::load_user_from_session;
use crate::db::Database;
use crate::errors::ServerError;
use astra::Request;
use chrono::Utc;

pub const SESSION_COOKIE: &str = "session";

/// The authenticated caller. Every appraisal query is scoped to `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

/// Resolves who is making a request. Called once per request by the router.
pub trait IdentityProvider {
    fn current_user(&self, req: &Request) -> Result<Option<Identity>, ServerError>;
}

/// Looks the request's session token up in the `sessions` table.
pub struct SessionAuth {
    db: Database,
}

impl SessionAuth {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl IdentityProvider for SessionAuth {
    fn current_user(&self, req: &Request) -> Result<Option<Identity>, ServerError> {
        let Some(token) = session_token(req) else {
            return Ok(None);
        };
        let now = Utc::now().timestamp();
        let user_id = self
            .db
            .with_conn(|conn| load_user_from_session(conn, &token, now))?;
        Ok(user_id.map(|user_id| Identity { user_id }))
    }
}

/// `Authorization: Bearer <token>` wins over the `session` cookie.
pub fn session_token(req: &Request) -> Option<String> {
    let bearer = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
