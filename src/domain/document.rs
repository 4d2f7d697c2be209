// src/domain/document.rs

//! Reading and writing the `data` column.
//!
//! New saves wrap the form in `{"schemaVersion": 2, "payload": ...}`. Older
//! documents are either the flat form itself or a `{ "data": {...} }` double
//! wrap left behind by clients that posted their whole body. Each stored value
//! is classified once, then merged over the blank form.

use crate::domain::form::{FormState, DEFAULT_GOAL_RATING};
use serde_json::{json, Map, Value};

pub const SCHEMA_VERSION: i64 = 2;

/// How a stored `data` value was shaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Versioned { version: i64, payload: &'a Value },
    LegacyNested(&'a Value),
    LegacyFlat(&'a Value),
}

impl<'a> Shape<'a> {
    pub fn classify(data: &'a Value) -> Self {
        if let Some(version) = data.get("schemaVersion").and_then(Value::as_i64) {
            return Shape::Versioned {
                version,
                payload: data.get("payload").unwrap_or(&Value::Null),
            };
        }
        match data.get("data") {
            Some(nested) if nested.is_object() => Shape::LegacyNested(nested),
            _ => Shape::LegacyFlat(data),
        }
    }

    /// The form content. Anything that isn't an object reads as empty.
    pub fn content(&self) -> Option<&'a Map<String, Value>> {
        match self {
            Shape::Versioned { payload, .. } => payload.as_object(),
            Shape::LegacyNested(inner) => inner.as_object(),
            Shape::LegacyFlat(flat) => flat.as_object(),
        }
    }
}

/// Wraps a form for storage.
pub fn wrap(form: &FormState) -> Value {
    json!({
        "schemaVersion": SCHEMA_VERSION,
        "payload": form,
    })
}

/// Loads any stored shape into a complete form.
pub fn load(data: &Value) -> FormState {
    let shape = Shape::classify(data);
    if let Shape::Versioned { version, .. } = shape {
        if version != SCHEMA_VERSION {
            tracing::warn!(version, "loading document with unexpected schema version");
        }
    }
    match shape.content() {
        Some(content) => merge_over_defaults(content),
        None => FormState::default(),
    }
}

/// True when the stored form content carries `key` as text the form can load
/// (a string, or a number read as one).
pub fn has_text(data: &Value, key: &str) -> bool {
    Shape::classify(data)
        .content()
        .and_then(|c| c.get(key))
        .is_some_and(|v| v.is_string() || v.is_number())
}

/// Looks up a string value inside the stored form content.
pub fn content_str<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    Shape::classify(data)
        .content()
        .and_then(|c| c.get(key))
        .and_then(Value::as_str)
}

/// Applies each known key over the defaults, skipping values of the wrong type.
fn merge_over_defaults(content: &Map<String, Value>) -> FormState {
    let defaults = FormState::default();
    let mut merged = match serde_json::to_value(&defaults) {
        Ok(Value::Object(map)) => map,
        _ => return defaults,
    };

    for (key, value) in content {
        if value.is_null() || !merged.contains_key(key) {
            continue;
        }
        // Numbers posted for text fields (a bare postcode) are kept as text.
        let value = match (merged.get(key), value) {
            (Some(Value::String(_)), Value::Number(n)) => Value::String(n.to_string()),
            _ => value.clone(),
        };
        let previous = merged.insert(key.clone(), value);
        if serde_json::from_value::<FormState>(Value::Object(merged.clone())).is_err() {
            tracing::debug!(key = %key, "ignoring stored value with unexpected type");
            if let Some(previous) = previous {
                merged.insert(key.clone(), previous);
            }
        }
    }

    let mut form = serde_json::from_value::<FormState>(Value::Object(merged)).unwrap_or(defaults);
    clamp_goals(&mut form);
    form
}

fn clamp_goals(form: &mut FormState) {
    let goals = &mut form.non_price_goals;
    for rating in [
        &mut goals.best_price,
        &mut goals.speed,
        &mut goals.minimal_disruption,
        &mut goals.privacy,
        &mut goals.long_settlement,
    ] {
        if !(1..=5).contains(rating) {
            *rating = DEFAULT_GOAL_RATING;
        }
    }
}
