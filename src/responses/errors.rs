use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// `{"error": message}` with the error's status.
pub fn json_error_response(err: &ServerError) -> Response {
    let body = json!({ "error": err.public_message() }).to_string();
    build(err.status(), "application/json", body)
}

/// Error page for browser routes.
pub fn html_error_response(err: &ServerError) -> Response {
    let body = error_page(err.status(), &err.public_message()).into_string();
    build(err.status(), "text/html; charset=utf-8", body)
}

fn build(status: u16, content_type: &str, body: String) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
