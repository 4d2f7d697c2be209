// src/wizard.rs

//! Server-rendered capture wizard.
//!
//! The controller travels with the page as JSON in a hidden `state` input.
//! A POST restores it, applies the submitted inputs, then runs the pressed
//! button's `action`.

use crate::api::appraisals::{self as api, LocalApi};
use crate::api::read_form_body;
use crate::auth::token::generate_token_default;
use crate::auth::Identity;
use crate::domain::controller::{SAVED_COMPLETED_MESSAGE, SAVED_DRAFT_MESSAGE};
use crate::domain::form::{parse_flag, GoalKey, ListField};
use crate::domain::{DeleteOutcome, FormController, SaveOutcome};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect};
use crate::router::AppState;
use crate::templates::components::{Notice, NoticeKind};
use crate::templates::pages::{wizard_page, WizardVm};
use astra::Request;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Re-render the current step with the submitted inputs applied.
    Stay,
    Next,
    Back,
    GoTo(i64),
    Toggle(ListField, String),
    AddRoom,
    DeleteRoom(i64),
    AddArea,
    DeleteArea(i64),
    Goal(GoalKey, i64),
    SaveDraft,
    SaveComplete,
    Delete,
    ConfirmDelete,
}

impl FromStr for WizardAction {
    type Err = ServerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bad = || ServerError::BadRequest(format!("Unknown action: {raw}"));
        let int = |s: &str| s.trim().parse::<i64>().map_err(|_| bad());

        let mut parts = raw.splitn(3, ':');
        let head = parts.next().unwrap_or_default();
        let action = match (head, parts.next(), parts.next()) {
            ("stay", None, None) => WizardAction::Stay,
            ("next", None, None) => WizardAction::Next,
            ("back", None, None) => WizardAction::Back,
            ("goto", Some(n), None) => WizardAction::GoTo(int(n)?),
            ("toggle", Some(list), Some(value)) => {
                WizardAction::Toggle(list.parse().map_err(|_| bad())?, value.to_string())
            }
            ("add-room", None, None) => WizardAction::AddRoom,
            ("delete-room", Some(id), None) => WizardAction::DeleteRoom(int(id)?),
            ("add-area", None, None) => WizardAction::AddArea,
            ("delete-area", Some(id), None) => WizardAction::DeleteArea(int(id)?),
            ("goal", Some(key), Some(n)) => {
                WizardAction::Goal(key.parse().map_err(|_| bad())?, int(n)?)
            }
            ("save-draft", None, None) => WizardAction::SaveDraft,
            ("save-complete", None, None) => WizardAction::SaveComplete,
            ("delete", None, None) => WizardAction::Delete,
            ("confirm-delete", None, None) => WizardAction::ConfirmDelete,
            _ => return Err(bad()),
        };
        Ok(action)
    }
}

fn action_url(ctrl: &FormController) -> String {
    match ctrl.appraisal_id {
        Some(id) => format!("/appraisals/{id}/edit"),
        None => "/appraisals/new".to_string(),
    }
}

fn render(ctrl: &FormController, notice: Option<Notice>, confirm_delete: bool) -> ResultResp {
    let state_json = serde_json::to_string(ctrl)?;
    let url = action_url(ctrl);
    html_response(wizard_page(&WizardVm {
        controller: ctrl,
        state_json: &state_json,
        action_url: &url,
        notice: notice.as_ref(),
        confirm_delete,
    }))
}

/// GET /appraisals/new
///
/// Each fresh page gets its own form key, so posting it twice stores one record.
pub fn new_page() -> ResultResp {
    let ctrl = FormController {
        form_key: generate_token_default(),
        ..FormController::default()
    };
    render(&ctrl, None, false)
}

/// GET /appraisals/{id}/edit
pub fn edit_page(
    state: &AppState,
    who: &Identity,
    id: i64,
    params: &HashMap<String, String>,
) -> ResultResp {
    let record = api::get(&state.db, who, id)?;
    let mut ctrl = FormController::hydrate(&record);
    if let Some(step) = params.get("step").and_then(|s| s.parse::<i64>().ok()) {
        ctrl.go_to(step);
    }

    let notice = match params.get("saved").map(String::as_str) {
        Some("completed") => Some(Notice::new(NoticeKind::Info, SAVED_COMPLETED_MESSAGE)),
        Some("draft") => Some(Notice::new(NoticeKind::Info, SAVED_DRAFT_MESSAGE)),
        _ => None,
    };
    render(&ctrl, notice, false)
}

/// POST /appraisals/new and /appraisals/{id}/edit
pub fn submit(
    state: &AppState,
    who: &Identity,
    path_id: Option<i64>,
    req: &mut Request,
) -> ResultResp {
    let pairs = read_form_body(req, state.config.max_body_bytes)?;

    // Checkboxes post a hidden "false" before the box; the last value wins.
    let fields: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let raw_state = fields
        .get("state")
        .ok_or_else(|| ServerError::BadRequest("Missing wizard state".into()))?;
    let mut ctrl: FormController = serde_json::from_str(raw_state)
        .map_err(|_| ServerError::BadRequest("Invalid wizard state".into()))?;
    if path_id.is_some() {
        ctrl.appraisal_id = path_id;
    }

    apply_inputs(&mut ctrl, &fields)?;

    let action = match fields.get("action") {
        Some(raw) => raw.parse()?,
        None => WizardAction::Stay,
    };
    tracing::debug!(?action, step = ctrl.step.number(), id = ?ctrl.appraisal_id, "wizard submit");

    let api = LocalApi {
        db: &state.db,
        identity: who,
    };

    match action {
        WizardAction::Stay => {}
        WizardAction::Next => ctrl.go_next(),
        WizardAction::Back => ctrl.go_back(),
        WizardAction::GoTo(n) => ctrl.go_to(n),
        WizardAction::Toggle(list, value) => ctrl.toggle_array_value(list, &value),
        WizardAction::AddRoom => {
            ctrl.add_room();
        }
        WizardAction::DeleteRoom(id) => {
            ctrl.delete_room(id);
        }
        WizardAction::AddArea => {
            ctrl.add_exterior_area();
        }
        WizardAction::DeleteArea(id) => {
            ctrl.delete_exterior_area(id);
        }
        WizardAction::Goal(key, n) => ctrl.update_non_price_goal(key, n)?,
        WizardAction::SaveDraft => return save(ctrl, &api, false),
        WizardAction::SaveComplete => return save(ctrl, &api, true),
        WizardAction::Delete => {
            let confirm = ctrl.handle_delete(&api, false) == DeleteOutcome::NotConfirmed;
            return render(&ctrl, None, confirm);
        }
        WizardAction::ConfirmDelete => {
            let outcome = ctrl.handle_delete(&api, true);
            if outcome == DeleteOutcome::Deleted {
                return redirect("/");
            }
            let notice = outcome
                .message()
                .map(|m| Notice::new(NoticeKind::Error, m));
            return render(&ctrl, notice, false);
        }
    }

    render(&ctrl, None, false)
}

fn save(mut ctrl: FormController, api: &LocalApi<'_>, complete: bool) -> ResultResp {
    let outcome = ctrl.handle_save(api, complete);
    // A first save (or a repeat of it) moves to the record's own URL, same step.
    if let SaveOutcome::Saved { id, created: true, .. } | SaveOutcome::AlreadySaved { id, .. } =
        outcome
    {
        let saved = if complete { "completed" } else { "draft" };
        return redirect(&format!(
            "/appraisals/{id}/edit?saved={saved}&step={}",
            ctrl.step.number()
        ));
    }

    let kind = match outcome {
        SaveOutcome::Saved { .. } => NoticeKind::Info,
        SaveOutcome::MissingRequired => NoticeKind::Warning,
        _ => NoticeKind::Error,
    };
    let notice = outcome.message().map(|m| Notice::new(kind, m));
    render(&ctrl, notice, false)
}

/// Applies `f.*`, `goal.*`, `room.*` and `area.*` inputs. Item types go last
/// so detail values entered alongside a type change are carried where they fit.
fn apply_inputs(ctrl: &mut FormController, fields: &BTreeMap<&str, &str>) -> Result<(), ServerError> {
    let mut retypes: Vec<(&str, i64, &str)> = Vec::new();
    let mut same_as_property = None;

    for (&name, &value) in fields {
        if let Some(key) = name.strip_prefix("f.") {
            if key == "sameAsProperty" {
                same_as_property = Some(parse_flag(key, value)?);
            } else {
                ctrl.update_field(key, value)?;
            }
        } else if let Some(key) = name.strip_prefix("goal.") {
            let rating = value
                .parse::<i64>()
                .map_err(|_| ServerError::BadRequest(format!("Invalid rating for {key}")))?;
            ctrl.update_non_price_goal(key.parse()?, rating)?;
        } else if let Some((kind, rest)) = name.split_once('.') {
            if kind != "room" && kind != "area" {
                continue;
            }
            let (id, key) = rest
                .split_once('.')
                .and_then(|(id, key)| Some((id.parse::<i64>().ok()?, key)))
                .ok_or_else(|| ServerError::BadRequest(format!("Invalid input name: {name}")))?;
            if key == "type" {
                retypes.push((kind, id, value));
                continue;
            }
            if kind == "room" {
                ctrl.update_room(id, key, value)?;
            } else {
                ctrl.update_exterior_area(id, key, value)?;
            }
        }
    }

    // After the address fields, which it may copy.
    if let Some(checked) = same_as_property {
        ctrl.handle_same_as_property_toggle(checked);
    }

    for (kind, id, value) in retypes {
        if kind == "room" {
            ctrl.update_room(id, "type", value)?;
        } else {
            ctrl.update_exterior_area(id, "type", value)?;
        }
    }
    Ok(())
}
