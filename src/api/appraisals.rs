// src/api/appraisals.rs

//! JSON CRUD over the caller's appraisals.
//!
//! The service functions here are shared by the JSON handlers and by the
//! wizard (through [`LocalApi`]), so both paths validate and persist the same way.

use crate::auth::Identity;
use crate::db::{appraisals as db_appraisals, Database};
use crate::domain::form::DEFAULT_STATE;
use crate::domain::{
    Appraisal, AppraisalApi, AppraisalInput, AppraisalStatus, Created, SavePayload,
};
use crate::errors::{ResultResp, ServerError};
use crate::responses::json_response;
use chrono::Utc;
use serde_json::{json, Map, Value};

pub const REQUIRED_FIELDS_MESSAGE: &str = "streetAddress, suburb and postcode are required";
pub const INVALID_STATUS_MESSAGE: &str = "status must be DRAFT or COMPLETED";
pub const NOT_FOUND_MESSAGE: &str = "Appraisal not found";

// ----- Validation -----

/// Validates a create/update body and fills in defaults.
///
/// `data` is the body's `data` member, or the whole body when that is absent or null.
pub fn parse_input(body: &Value) -> Result<AppraisalInput, ServerError> {
    let obj = body
        .as_object()
        .ok_or_else(|| ServerError::BadRequest("Invalid JSON body".into()))?;

    let address = required_text(obj, "streetAddress");
    let suburb = required_text(obj, "suburb");
    let postcode = required_text(obj, "postcode");
    let (Some(address), Some(suburb), Some(postcode)) = (address, suburb, postcode) else {
        return Err(ServerError::BadRequest(REQUIRED_FIELDS_MESSAGE.into()));
    };

    let status = match obj.get("status") {
        None | Some(Value::Null) => AppraisalStatus::Draft,
        Some(Value::String(s)) => s
            .parse()
            .map_err(|_| ServerError::BadRequest(INVALID_STATUS_MESSAGE.into()))?,
        Some(_) => return Err(ServerError::BadRequest(INVALID_STATUS_MESSAGE.into())),
    };

    let state = match obj.get("state").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_STATE.to_string(),
    };

    let title = obj
        .get("appraisalTitle")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let form_key = obj
        .get("formKey")
        .and_then(Value::as_str)
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    let data = match obj.get("data") {
        Some(d) if !d.is_null() => d.clone(),
        _ => body.clone(),
    };

    Ok(AppraisalInput {
        title,
        address,
        suburb,
        postcode,
        state,
        status,
        data,
        form_key,
    })
}

/// Non-empty string, or a number written as one.
fn required_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ----- Service -----

pub fn list(db: &Database, who: &Identity) -> Result<Vec<Appraisal>, ServerError> {
    db.with_conn(|conn| db_appraisals::list_for_user(conn, &who.user_id))
        .map_err(ServerError::internal("Failed to load appraisals"))
}

pub fn get(db: &Database, who: &Identity, id: i64) -> Result<Appraisal, ServerError> {
    db.with_conn(|conn| db_appraisals::find_for_user(conn, id, &who.user_id))
        .map_err(ServerError::internal("Failed to load appraisal"))?
        .ok_or_else(|| ServerError::NotFound(NOT_FOUND_MESSAGE.into()))
}

pub fn create(db: &Database, who: &Identity, input: &AppraisalInput) -> Result<Created, ServerError> {
    let created = db
        .with_conn(|conn| db_appraisals::insert(conn, &who.user_id, input, Utc::now()))
        .map_err(ServerError::internal("Failed to create appraisal"))?;
    match &created {
        Created::Fresh(record) => {
            tracing::info!(id = record.id, user = %who.user_id, status = %record.status, "appraisal created")
        }
        Created::Replayed(record) => {
            tracing::info!(id = record.id, user = %who.user_id, "repeated create, returning existing appraisal")
        }
    }
    Ok(created)
}

pub fn update(
    db: &Database,
    who: &Identity,
    id: i64,
    input: &AppraisalInput,
) -> Result<Appraisal, ServerError> {
    let updated = db
        .with_conn(|conn| db_appraisals::update_for_user(conn, id, &who.user_id, input, Utc::now()))
        .map_err(ServerError::internal("Failed to update appraisal"))?
        .ok_or_else(|| ServerError::NotFound(NOT_FOUND_MESSAGE.into()))?;
    tracing::info!(id, user = %who.user_id, status = %updated.status, "appraisal updated");
    Ok(updated)
}

/// Deleting a missing or foreign id is not an error; nothing changes.
pub fn delete(db: &Database, who: &Identity, id: i64) -> Result<(), ServerError> {
    let removed = db
        .with_conn(|conn| db_appraisals::delete_for_user(conn, id, &who.user_id))
        .map_err(ServerError::internal("Failed to delete appraisal"))?;
    tracing::info!(id, user = %who.user_id, removed, "appraisal delete");
    Ok(())
}

// ----- Handlers -----

pub fn list_handler(db: &Database, who: &Identity) -> ResultResp {
    json_response(200, &list(db, who)?)
}

pub fn create_handler(db: &Database, who: &Identity, body: &Value) -> ResultResp {
    let input = parse_input(body)?;
    match create(db, who, &input)? {
        Created::Fresh(record) => json_response(201, &record),
        Created::Replayed(record) => json_response(200, &record),
    }
}

pub fn get_handler(db: &Database, who: &Identity, id: i64) -> ResultResp {
    json_response(200, &get(db, who, id)?)
}

pub fn update_handler(db: &Database, who: &Identity, id: i64, body: &Value) -> ResultResp {
    let input = parse_input(body)?;
    json_response(200, &update(db, who, id, &input)?)
}

pub fn delete_handler(db: &Database, who: &Identity, id: i64) -> ResultResp {
    delete(db, who, id)?;
    json_response(200, &json!({ "ok": true }))
}

// ----- In-process client for the wizard -----

/// Sends the controller's saves through the same validation and service path
/// as the JSON endpoints, scoped to the requesting user.
pub struct LocalApi<'a> {
    pub db: &'a Database,
    pub identity: &'a Identity,
}

impl AppraisalApi for LocalApi<'_> {
    fn create(&self, payload: &SavePayload) -> Result<Created, ServerError> {
        let input = parse_input(&serde_json::to_value(payload)?)?;
        create(self.db, self.identity, &input)
    }

    fn update(&self, id: i64, payload: &SavePayload) -> Result<Appraisal, ServerError> {
        let input = parse_input(&serde_json::to_value(payload)?)?;
        update(self.db, self.identity, id, &input)
    }

    fn delete(&self, id: i64) -> Result<(), ServerError> {
        delete(self.db, self.identity, id)
    }
}
