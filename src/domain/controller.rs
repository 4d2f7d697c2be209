// src/domain/controller.rs

//! Wizard state and the operations the step pages drive.
//!
//! The controller owns the current step, the form being edited and, once the
//! record exists, its id. Persistence goes through [`AppraisalApi`] so the
//! same logic runs against the HTTP service or a test double.

use crate::domain::appraisal::{Appraisal, AppraisalStatus, Created};
use crate::domain::document;
use crate::domain::form::{
    ExteriorArea, FormError, FormState, GoalKey, ListField, Room, Step, DEFAULT_STATE,
};
use crate::errors::ServerError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_REQUIRED_MESSAGE: &str =
    "Please fill in street address, suburb and postcode before saving.";
pub const SAVED_COMPLETED_MESSAGE: &str = "Appraisal saved and marked as completed.";
pub const SAVED_DRAFT_MESSAGE: &str = "Appraisal saved as draft.";
pub const SAVE_FAILED_MESSAGE: &str = "There was a problem saving the appraisal.";
pub const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this appraisal? This cannot be undone.";
pub const DELETED_MESSAGE: &str = "Appraisal deleted.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete appraisal.";

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub status: AppraisalStatus,
    pub appraisal_title: String,
    pub street_address: String,
    pub suburb: String,
    pub postcode: String,
    pub state: String,
    pub data: Value,
    /// Sent on creates only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_key: Option<String>,
}

/// The persistence calls the controller makes.
pub trait AppraisalApi {
    fn create(&self, payload: &SavePayload) -> Result<Created, ServerError>;
    fn update(&self, id: i64, payload: &SavePayload) -> Result<Appraisal, ServerError>;
    fn delete(&self, id: i64) -> Result<(), ServerError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Required address fields are empty; nothing was sent.
    MissingRequired,
    Saved { id: i64, created: bool, completed: bool },
    /// The form was submitted again after its create went through. Nothing
    /// new was stored; `id` is the record the first submission made.
    AlreadySaved { id: i64, completed: bool },
    Failed,
}

impl SaveOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SaveOutcome::MissingRequired => Some(MISSING_REQUIRED_MESSAGE),
            SaveOutcome::Saved { completed: true, .. }
            | SaveOutcome::AlreadySaved { completed: true, .. } => Some(SAVED_COMPLETED_MESSAGE),
            SaveOutcome::Saved { .. } | SaveOutcome::AlreadySaved { .. } => Some(SAVED_DRAFT_MESSAGE),
            SaveOutcome::Failed => Some(SAVE_FAILED_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NotConfirmed,
    /// Never saved, so there is no record to remove.
    NothingToDelete,
    /// Deleted; the caller should go back to the list.
    Deleted,
    Failed,
}

impl DeleteOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DeleteOutcome::Deleted => Some(DELETED_MESSAGE),
            DeleteOutcome::Failed => Some(DELETE_FAILED_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormController {
    pub step: Step,
    pub form: FormState,
    #[serde(default)]
    pub appraisal_id: Option<i64>,
    /// Identifies one capture of a new appraisal. Empty means creates are not
    /// deduplicated.
    #[serde(default)]
    pub form_key: String,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

impl FormController {
    pub fn new(form: FormState) -> Self {
        Self {
            step: Step::FIRST,
            form,
            appraisal_id: None,
            form_key: String::new(),
        }
    }

    /// Controller for editing a stored record. Overview fields the document
    /// lacks are taken from the record's columns.
    pub fn hydrate(record: &Appraisal) -> Self {
        let mut form = document::load(&record.data);

        let fallbacks = [
            ("appraisalTitle", &record.title, &mut form.appraisal_title),
            ("streetAddress", &record.address, &mut form.street_address),
            ("suburb", &record.suburb, &mut form.suburb),
            ("postcode", &record.postcode, &mut form.postcode),
        ];
        for (key, column, slot) in fallbacks {
            if !document::has_text(&record.data, key) {
                *slot = column.clone();
            }
        }
        if !document::has_text(&record.data, "state") {
            form.state = if record.state.is_empty() {
                DEFAULT_STATE.to_string()
            } else {
                record.state.clone()
            };
        }

        Self {
            appraisal_id: Some(record.id),
            ..Self::new(form)
        }
    }

    pub fn step_label(&self) -> &'static str {
        self.step.label()
    }

    pub fn update_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        self.form.set_field(key, value)
    }

    /// Adds `value` if absent, removes it if present. Order of the rest is kept.
    pub fn toggle_array_value(&mut self, list: ListField, value: &str) {
        let items = self.form.list_mut(list);
        if let Some(pos) = items.iter().position(|v| v == value) {
            items.remove(pos);
        } else {
            items.push(value.to_string());
        }
    }

    // ----- Rooms -----

    pub fn add_room(&mut self) -> i64 {
        let id = next_item_id(self.form.rooms.iter().map(|r| r.id));
        let label = format!("Room {}", self.form.rooms.len() + 1);
        self.form.rooms.push(Room::new(id, label));
        id
    }

    pub fn update_room(&mut self, id: i64, key: &str, value: &str) -> Result<(), FormError> {
        self.form
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(FormError::UnknownItem(id))?
            .set_field(key, value)
    }

    /// Returns false when no room had that id.
    pub fn delete_room(&mut self, id: i64) -> bool {
        let before = self.form.rooms.len();
        self.form.rooms.retain(|r| r.id != id);
        self.form.rooms.len() != before
    }

    // ----- Exterior areas -----

    pub fn add_exterior_area(&mut self) -> i64 {
        let id = next_item_id(self.form.exterior_areas.iter().map(|a| a.id));
        let label = format!("Area {}", self.form.exterior_areas.len() + 1);
        self.form.exterior_areas.push(ExteriorArea::new(id, label));
        id
    }

    pub fn update_exterior_area(
        &mut self,
        id: i64,
        key: &str,
        value: &str,
    ) -> Result<(), FormError> {
        self.form
            .exterior_areas
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(FormError::UnknownItem(id))?
            .set_field(key, value)
    }

    pub fn delete_exterior_area(&mut self, id: i64) -> bool {
        let before = self.form.exterior_areas.len();
        self.form.exterior_areas.retain(|a| a.id != id);
        self.form.exterior_areas.len() != before
    }

    pub fn update_non_price_goal(&mut self, key: GoalKey, value: i64) -> Result<(), FormError> {
        self.form.non_price_goals.set(key, value)
    }

    // ----- Navigation -----

    pub fn go_next(&mut self) {
        self.step = self.step.next();
    }

    pub fn go_back(&mut self) {
        self.step = self.step.prev();
    }

    pub fn go_to(&mut self, step: i64) {
        self.step = Step::new(step.clamp(1, 9) as u8);
    }

    /// Copies the property address into the postal address when first ticked.
    pub fn handle_same_as_property_toggle(&mut self, checked: bool) {
        if checked && !self.form.same_as_property {
            self.form.postal_address = self.form.composed_address();
        }
        self.form.same_as_property = checked;
    }

    // ----- Persistence -----

    pub fn save_payload(&self, mark_complete: bool) -> SavePayload {
        let form = &self.form;
        SavePayload {
            status: if mark_complete {
                AppraisalStatus::Completed
            } else {
                AppraisalStatus::Draft
            },
            appraisal_title: form.appraisal_title.clone(),
            street_address: form.street_address.clone(),
            suburb: form.suburb.clone(),
            postcode: form.postcode.clone(),
            state: if form.state.is_empty() {
                DEFAULT_STATE.to_string()
            } else {
                form.state.clone()
            },
            data: document::wrap(form),
            form_key: match self.appraisal_id {
                None if !self.form_key.is_empty() => Some(self.form_key.clone()),
                _ => None,
            },
        }
    }

    /// Creates the record on the first save and updates it afterwards. A create
    /// repeating this form's key resolves to the record that key already made.
    pub fn handle_save(&mut self, api: &dyn AppraisalApi, mark_complete: bool) -> SaveOutcome {
        if self.form.missing_required() {
            return SaveOutcome::MissingRequired;
        }

        let payload = self.save_payload(mark_complete);
        let result = match self.appraisal_id {
            Some(id) => api.update(id, &payload).map(|saved| (saved.id, false, false)),
            None => api.create(&payload).map(|created| match created {
                Created::Fresh(saved) => (saved.id, true, false),
                Created::Replayed(saved) => (saved.id, true, true),
            }),
        };

        match result {
            Ok((id, created, replayed)) => {
                self.appraisal_id = Some(id);
                if replayed {
                    tracing::info!(id, form_key = %self.form_key, "form already saved");
                    return SaveOutcome::AlreadySaved {
                        id,
                        completed: mark_complete,
                    };
                }
                tracing::info!(id, created, status = %payload.status, "appraisal saved");
                SaveOutcome::Saved {
                    id,
                    created,
                    completed: mark_complete,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "saving appraisal failed");
                SaveOutcome::Failed
            }
        }
    }

    pub fn handle_delete(&mut self, api: &dyn AppraisalApi, confirmed: bool) -> DeleteOutcome {
        let Some(id) = self.appraisal_id else {
            return DeleteOutcome::NothingToDelete;
        };
        if !confirmed {
            return DeleteOutcome::NotConfirmed;
        }
        match api.delete(id) {
            Ok(()) => {
                tracing::info!(id, "appraisal deleted");
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::error!(error = %err, id, "deleting appraisal failed");
                DeleteOutcome::Failed
            }
        }
    }
}

/// Millisecond timestamp, bumped past any id already in the list.
fn next_item_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::OccupancyType;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        keys: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FakeApi {
        fn record(&self, id: i64, payload: &SavePayload) -> Appraisal {
            let now = Utc::now();
            Appraisal {
                id,
                user_id: "agent-1".into(),
                title: payload.appraisal_title.clone(),
                address: payload.street_address.clone(),
                suburb: payload.suburb.clone(),
                postcode: payload.postcode.clone(),
                state: payload.state.clone(),
                status: payload.status,
                data: payload.data.clone(),
                created_at: now,
                updated_at: now,
            }
        }
    }

    impl AppraisalApi for FakeApi {
        fn create(&self, payload: &SavePayload) -> Result<Created, ServerError> {
            self.calls.borrow_mut().push("create".into());
            if self.fail {
                return Err(ServerError::DbError("disk full".into()));
            }
            let mut keys = self.keys.borrow_mut();
            if let Some(key) = &payload.form_key {
                if keys.contains(key) {
                    return Ok(Created::Replayed(self.record(41, payload)));
                }
                keys.push(key.clone());
            }
            Ok(Created::Fresh(self.record(41, payload)))
        }

        fn update(&self, id: i64, payload: &SavePayload) -> Result<Appraisal, ServerError> {
            self.calls.borrow_mut().push(format!("update {id}"));
            if self.fail {
                return Err(ServerError::NotFound("Appraisal not found".into()));
            }
            Ok(self.record(id, payload))
        }

        fn delete(&self, id: i64) -> Result<(), ServerError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            Ok(())
        }
    }

    fn filled() -> FormController {
        let mut c = FormController::default();
        c.update_field("streetAddress", "1 Main St").unwrap();
        c.update_field("suburb", "Perth").unwrap();
        c.update_field("postcode", "6000").unwrap();
        c
    }

    #[test]
    fn adding_two_rooms_then_deleting_the_first_keeps_the_second() {
        let mut c = FormController::default();
        let first = c.add_room();
        let second = c.add_room();
        assert_ne!(first, second);

        c.update_room(second, "flooring", "Carpet").unwrap();
        let expected = c.form.rooms[1].clone();

        assert!(c.delete_room(first));
        assert_eq!(c.form.rooms, vec![expected]);
        assert_eq!(c.form.rooms[0].id, second);
        assert_eq!(c.form.rooms[0].label, "Room 2");
        assert_eq!(c.form.rooms[0].features.type_code(), "bedroom");
    }

    #[test]
    fn new_areas_default_to_patio() {
        let mut c = FormController::default();
        let id = c.add_exterior_area();
        assert_eq!(c.form.exterior_areas[0].label, "Area 1");
        assert_eq!(c.form.exterior_areas[0].features.type_code(), "patio");

        c.update_exterior_area(id, "type", "pool").unwrap();
        c.update_exterior_area(id, "poolHeating", "Solar").unwrap();
        assert_eq!(c.form.exterior_areas[0].field("poolHeating"), Some("Solar"));

        assert_eq!(
            c.update_exterior_area(id + 1, "label", "x"),
            Err(FormError::UnknownItem(id + 1))
        );
        assert!(!c.delete_exterior_area(id + 1));
    }

    #[test]
    fn toggling_twice_restores_the_list() {
        let mut c = FormController::default();
        c.toggle_array_value(ListField::Services, "Bore");
        c.toggle_array_value(ListField::Services, "NBN");
        let before = c.form.services.clone();

        c.toggle_array_value(ListField::Services, "Scheme water");
        c.toggle_array_value(ListField::Services, "Scheme water");
        assert_eq!(c.form.services, before);

        c.toggle_array_value(ListField::Services, "Bore");
        assert_eq!(c.form.services, vec!["NBN".to_string()]);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut c = FormController::default();
        c.go_back();
        assert_eq!(c.step, Step::FIRST);
        c.go_to(99);
        assert_eq!(c.step, Step::LAST);
        c.go_next();
        assert_eq!(c.step.number(), 9);
        c.go_to(-3);
        assert_eq!(c.step.number(), 1);
        c.go_next();
        assert_eq!(c.step_label(), "Property basics & site");
    }

    #[test]
    fn same_as_property_copies_the_address_once() {
        let mut c = filled();
        c.handle_same_as_property_toggle(true);
        assert_eq!(c.form.postal_address, "1 Main St, Perth 6000 WA");

        c.update_field("postalAddress", "PO Box 1").unwrap();
        c.handle_same_as_property_toggle(true);
        assert_eq!(c.form.postal_address, "PO Box 1");

        c.handle_same_as_property_toggle(false);
        assert!(!c.form.same_as_property);
        assert_eq!(c.form.postal_address, "PO Box 1");
    }

    #[test]
    fn save_without_address_makes_no_call() {
        let api = FakeApi::default();
        let mut c = FormController::default();
        c.update_field("streetAddress", "1 Main St").unwrap();

        let outcome = c.handle_save(&api, false);
        assert_eq!(outcome, SaveOutcome::MissingRequired);
        assert_eq!(outcome.message(), Some(MISSING_REQUIRED_MESSAGE));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn first_save_creates_then_later_saves_update() {
        let api = FakeApi::default();
        let mut c = filled();

        let outcome = c.handle_save(&api, false);
        assert_eq!(
            outcome,
            SaveOutcome::Saved { id: 41, created: true, completed: false }
        );
        assert_eq!(outcome.message(), Some(SAVED_DRAFT_MESSAGE));
        assert_eq!(c.appraisal_id, Some(41));

        let outcome = c.handle_save(&api, true);
        assert_eq!(outcome.message(), Some(SAVED_COMPLETED_MESSAGE));
        assert_eq!(*api.calls.borrow(), vec!["create", "update 41"]);
    }

    #[test]
    fn resubmitting_a_saved_form_does_not_create_twice() {
        let api = FakeApi::default();
        let mut c = filled();
        c.form_key = "k-1".into();
        let stale = c.clone();

        assert!(matches!(c.handle_save(&api, false), SaveOutcome::Saved { created: true, .. }));

        // The same page posted again still has no id.
        let mut again = stale;
        let outcome = again.handle_save(&api, false);
        assert_eq!(outcome, SaveOutcome::AlreadySaved { id: 41, completed: false });
        assert_eq!(outcome.message(), Some(SAVED_DRAFT_MESSAGE));
        assert_eq!(again.appraisal_id, Some(41));
        assert_eq!(api.keys.borrow().len(), 1);
    }

    #[test]
    fn form_key_is_sent_on_create_only() {
        let mut c = filled();
        assert_eq!(c.save_payload(false).form_key, None);

        c.form_key = "k-1".into();
        assert_eq!(c.save_payload(false).form_key.as_deref(), Some("k-1"));

        c.appraisal_id = Some(3);
        assert_eq!(c.save_payload(false).form_key, None);
    }

    #[test]
    fn payload_carries_the_envelope() {
        let mut c = filled();
        c.form.state.clear();
        let payload = c.save_payload(true);

        assert_eq!(payload.status, AppraisalStatus::Completed);
        assert_eq!(payload.state, "WA");
        assert_eq!(payload.data["schemaVersion"], 2);
        assert_eq!(payload.data["payload"]["suburb"], "Perth");

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["streetAddress"], "1 Main St");
        assert_eq!(body["status"], "COMPLETED");
    }

    #[test]
    fn failed_save_reports_and_keeps_no_id() {
        let api = FakeApi {
            fail: true,
            ..Default::default()
        };
        let mut c = filled();
        assert_eq!(c.handle_save(&api, false), SaveOutcome::Failed);
        assert_eq!(c.appraisal_id, None);
    }

    #[test]
    fn delete_needs_confirmation_and_an_id() {
        let api = FakeApi::default();
        let mut c = filled();
        assert_eq!(c.handle_delete(&api, true), DeleteOutcome::NothingToDelete);

        c.appraisal_id = Some(7);
        assert_eq!(c.handle_delete(&api, false), DeleteOutcome::NotConfirmed);
        assert!(api.calls.borrow().is_empty());

        assert_eq!(c.handle_delete(&api, true), DeleteOutcome::Deleted);
        assert_eq!(*api.calls.borrow(), vec!["delete 7"]);
    }

    #[test]
    fn hydrate_fills_missing_overview_fields_from_columns() {
        let now = Utc::now();
        let record = Appraisal {
            id: 9,
            user_id: "agent-1".into(),
            title: "Hills acreage".into(),
            address: "12 Ridge Rd".into(),
            suburb: "Kalamunda".into(),
            postcode: "6076".into(),
            state: String::new(),
            status: AppraisalStatus::Draft,
            data: json!({ "suburb": "Gooseberry Hill", "occupancyType": "TENANT" }),
            created_at: now,
            updated_at: now,
        };

        let c = FormController::hydrate(&record);
        assert_eq!(c.appraisal_id, Some(9));
        assert_eq!(c.step, Step::FIRST);
        assert_eq!(c.form.appraisal_title, "Hills acreage");
        assert_eq!(c.form.street_address, "12 Ridge Rd");
        assert_eq!(c.form.suburb, "Gooseberry Hill");
        assert_eq!(c.form.state, "WA");
        assert_eq!(c.form.occupancy_type, OccupancyType::Tenant);
    }

    #[test]
    fn state_round_trips() {
        let mut c = filled();
        c.go_to(4);
        c.appraisal_id = Some(3);
        c.form_key = "k-1".into();

        let raw = serde_json::to_string(&c).unwrap();
        assert!(raw.contains(r#""formKey":"k-1""#));
        let back: FormController = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, c);
    }
}
