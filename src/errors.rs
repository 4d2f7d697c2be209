use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, validation, ownership) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unauthorised")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    DbError(String),

    #[error("{0}")]
    InternalError(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::Unauthorized => 401,
            ServerError::BadRequest(_) => 400,
            ServerError::NotFound(_) => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::DbError(_) | ServerError::InternalError(_) => 500,
        }
    }

    /// Message safe to hand back to the caller. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::DbError(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }

    /// Wraps any storage failure in a context-specific 500, logging the cause.
    /// Client-facing errors (400/401/404) pass through untouched.
    pub fn internal(context: &'static str) -> impl FnOnce(ServerError) -> ServerError {
        move |err| match err {
            ServerError::DbError(_) | ServerError::InternalError(_) => {
                tracing::error!(error = %err, "{context}");
                ServerError::InternalError(context.to_string())
            }
            other => other,
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<crate::domain::FormError> for ServerError {
    fn from(e: crate::domain::FormError) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::InternalError(format!("serialization failed: {e}"))
    }
}
