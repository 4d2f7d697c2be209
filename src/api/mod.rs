pub mod appraisals;

use crate::errors::ServerError;
use astra::Request;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;

/// Reads the whole body, refusing anything over `limit` bytes.
pub fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::BadRequest(format!(
            "Request body exceeds {limit} bytes"
        )));
    }
    Ok(buf)
}

pub fn read_json_body(req: &mut Request, limit: usize) -> Result<Value, ServerError> {
    let bytes = read_body(req, limit)?;
    serde_json::from_slice(&bytes).map_err(|_| ServerError::BadRequest("Invalid JSON body".into()))
}

/// `application/x-www-form-urlencoded` pairs; later duplicates win.
pub fn read_form_body(
    req: &mut Request,
    limit: usize,
) -> Result<Vec<(String, String)>, ServerError> {
    let bytes = read_body(req, limit)?;
    Ok(url::form_urlencoded::parse(&bytes).into_owned().collect())
}

pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Path ids must be positive integers.
pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ServerError::BadRequest("Invalid id".into())),
    }
}
