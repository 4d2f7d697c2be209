use crate::domain::controller::{
    DELETE_CONFIRM_MESSAGE, MISSING_REQUIRED_MESSAGE, SAVED_COMPLETED_MESSAGE, SAVED_DRAFT_MESSAGE,
};
use crate::tests::utils::{address_body, body_json, body_string, location, wizard_state, TestApp};
use http::Method;
use serde_json::{json, Value};

fn fresh_state(app: &TestApp, token: &str) -> String {
    let resp = app.page("/appraisals/new", token);
    assert_eq!(resp.status(), 200);
    wizard_state(&body_string(resp))
}

fn created_id(location: &str) -> i64 {
    location
        .trim_start_matches("/appraisals/")
        .split('/')
        .next()
        .and_then(|id| id.parse().ok())
        .expect("location carries the new id")
}

#[test]
fn new_page_starts_on_the_first_step() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let html = body_string(app.page("/appraisals/new", &token));
    assert!(html.contains("New appraisal"));
    assert!(html.contains("Step 1 of 9 · Appraisal overview"));
    assert!(html.contains(r#"action="/appraisals/new""#));

    let state: Value = serde_json::from_str(&wizard_state(&html)).unwrap();
    assert_eq!(state["step"], 1);
    assert_eq!(state["form"]["state"], "WA");
}

#[test]
fn next_and_back_move_between_steps() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let html = body_string(app.form("/appraisals/new", &token, &[("state", &state), ("action", "next")]));
    assert!(html.contains("Step 2 of 9"));

    let state = wizard_state(&html);
    let html = body_string(app.form("/appraisals/new", &token, &[("state", &state), ("action", "goto:9")]));
    assert!(html.contains("Step 9 of 9"));

    let state = wizard_state(&html);
    let html = body_string(app.form("/appraisals/new", &token, &[("state", &state), ("action", "back")]));
    assert!(html.contains("Step 8 of 9"));
}

#[test]
fn entered_values_survive_navigation() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let html = body_string(app.form(
        "/appraisals/new",
        &token,
        &[("state", &state), ("f.suburb", "Helena Valley"), ("action", "next")],
    ));
    let state: Value = serde_json::from_str(&wizard_state(&html)).unwrap();
    assert_eq!(state["form"]["suburb"], "Helena Valley");
}

#[test]
fn saving_without_required_fields_shows_a_warning() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let resp = app.form(
        "/appraisals/new",
        &token,
        &[("state", &state), ("f.suburb", "Perth"), ("action", "save-draft")],
    );
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(MISSING_REQUIRED_MESSAGE));

    let list = body_json(app.json(Method::GET, "/appraisals", Some(&token), None));
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[test]
fn first_save_creates_and_redirects_to_edit() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let resp = app.form(
        "/appraisals/new",
        &token,
        &[
            ("state", &state),
            ("f.appraisalTitle", "Initial visit"),
            ("f.streetAddress", "11 Maple Crescent"),
            ("f.suburb", "Helena Valley"),
            ("f.postcode", "6056"),
            ("action", "save-draft"),
        ],
    );
    assert_eq!(resp.status(), 303);
    let loc = location(&resp).to_string();
    assert!(loc.ends_with("/edit?saved=draft&step=1"), "{loc}");

    let id = created_id(&loc);
    let record = body_json(app.json(Method::GET, &format!("/appraisals/{id}"), Some(&token), None));
    assert_eq!(record["status"], "DRAFT");
    assert_eq!(record["title"], "Initial visit");
    assert_eq!(record["address"], "11 Maple Crescent");
    assert_eq!(record["state"], "WA");
    assert_eq!(record["data"]["schemaVersion"], 2);
    assert_eq!(record["data"]["payload"]["suburb"], "Helena Valley");

    let html = body_string(app.page(&loc, &token));
    assert!(html.contains("Edit appraisal"));
    assert!(html.contains(SAVED_DRAFT_MESSAGE));
}

#[test]
fn saving_an_existing_record_updates_it_in_place() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let created = app.create(&token, address_body());
    let id = created["id"].as_i64().unwrap();
    let edit = format!("/appraisals/{id}/edit");

    let state = wizard_state(&body_string(app.page(&edit, &token)));
    let resp = app.form(
        &edit,
        &token,
        &[("state", &state), ("f.postcode", "6057"), ("action", "save-complete")],
    );
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(SAVED_COMPLETED_MESSAGE));

    let record = body_json(app.json(Method::GET, &format!("/appraisals/{id}"), Some(&token), None));
    assert_eq!(record["status"], "COMPLETED");
    assert_eq!(record["postcode"], "6057");

    let list = body_json(app.json(Method::GET, "/appraisals", Some(&token), None));
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[test]
fn rooms_are_added_and_removed_by_id() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let html = body_string(app.form("/appraisals/new", &token, &[("state", &state), ("action", "add-room")]));
    let html = body_string(app.form(
        "/appraisals/new",
        &token,
        &[("state", &wizard_state(&html)), ("action", "add-room")],
    ));
    let state: Value = serde_json::from_str(&wizard_state(&html)).unwrap();
    let rooms = state["form"]["rooms"].as_array().unwrap().clone();
    assert_eq!(rooms.len(), 2);

    let first = rooms[0]["id"].as_i64().unwrap();
    let html = body_string(app.form(
        "/appraisals/new",
        &token,
        &[
            ("state", &wizard_state(&html)),
            ("action", &format!("delete-room:{first}")),
        ],
    ));
    let state: Value = serde_json::from_str(&wizard_state(&html)).unwrap();
    assert_eq!(state["form"]["rooms"], Value::Array(vec![rooms[1].clone()]));
}

#[test]
fn delete_asks_for_confirmation_then_returns_to_the_list() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let created = app.create(&token, address_body());
    let id = created["id"].as_i64().unwrap();
    let edit = format!("/appraisals/{id}/edit");

    let state = wizard_state(&body_string(app.page(&edit, &token)));
    let resp = app.form(&edit, &token, &[("state", &state), ("action", "delete")]);
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains(DELETE_CONFIRM_MESSAGE));
    assert_eq!(app.json(Method::GET, &format!("/appraisals/{id}"), Some(&token), None).status(), 200);

    let resp = app.form(&edit, &token, &[("state", &wizard_state(&html)), ("action", "confirm-delete")]);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    assert_eq!(app.json(Method::GET, &format!("/appraisals/{id}"), Some(&token), None).status(), 404);
}

#[test]
fn bad_submissions_are_rejected() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let resp = app.form("/appraisals/new", &token, &[("action", "next")]);
    assert_eq!(resp.status(), 400);

    let resp = app.form("/appraisals/new", &token, &[("state", "{broken"), ("action", "next")]);
    assert_eq!(resp.status(), 400);

    let resp = app.form("/appraisals/new", &token, &[("state", &state), ("action", "launch")]);
    assert_eq!(resp.status(), 400);

    let resp = app.form("/appraisals/new", &token, &[("state", &state), ("f.nope", "x")]);
    assert_eq!(resp.status(), 400);
}

#[test]
fn editing_a_foreign_record_is_not_found() {
    let app = TestApp::new();
    let owner = app.login("agent-1");
    let other = app.login("agent-2");
    let created = app.create(&owner, address_body());

    let resp = app.page(&format!("/appraisals/{}/edit", created["id"]), &other);
    assert_eq!(resp.status(), 404);
}

#[test]
fn first_save_keeps_the_current_step() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);

    let html = body_string(app.form("/appraisals/new", &token, &[("state", &state), ("action", "goto:6")]));
    let resp = app.form(
        "/appraisals/new",
        &token,
        &[
            ("state", &wizard_state(&html)),
            ("f.streetAddress", "11 Maple Crescent"),
            ("f.suburb", "Helena Valley"),
            ("f.postcode", "6056"),
            ("action", "save-draft"),
        ],
    );
    assert_eq!(resp.status(), 303);
    let loc = location(&resp).to_string();
    assert!(loc.contains("step=6"), "{loc}");

    let html = body_string(app.page(&loc, &token));
    assert!(html.contains("Step 6 of 9"));
    assert!(html.contains(SAVED_DRAFT_MESSAGE));
}

#[test]
fn posting_the_same_new_form_twice_stores_one_record() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let state = fresh_state(&app, &token);
    let pairs = [
        ("state", state.as_str()),
        ("f.streetAddress", "11 Maple Crescent"),
        ("f.suburb", "Helena Valley"),
        ("f.postcode", "6056"),
        ("action", "save-draft"),
    ];

    let first = app.form("/appraisals/new", &token, &pairs);
    let second = app.form("/appraisals/new", &token, &pairs);
    assert_eq!(first.status(), 303);
    assert_eq!(second.status(), 303);
    assert_eq!(location(&first), location(&second));

    let list = body_json(app.json(Method::GET, "/appraisals", Some(&token), None));
    assert_eq!(list.as_array().unwrap().len(), 1);

    // A second blank form is a different capture.
    let other = fresh_state(&app, &token);
    assert_ne!(other, state);
    let mut pairs = pairs;
    pairs[0].1 = other.as_str();
    assert_eq!(app.form("/appraisals/new", &token, &pairs).status(), 303);
    let list = body_json(app.json(Method::GET, "/appraisals", Some(&token), None));
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[test]
fn numeric_postcode_survives_into_the_edit_wizard() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let created = app.create(
        &token,
        json!({ "streetAddress": "1 Main St", "suburb": "Perth", "postcode": 6000 }),
    );
    assert_eq!(created["postcode"], "6000");
    let edit = format!("/appraisals/{}/edit", created["id"]);

    let html = body_string(app.page(&edit, &token));
    let state = wizard_state(&html);
    let parsed: Value = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed["form"]["postcode"], "6000");

    let resp = app.form(&edit, &token, &[("state", &state), ("action", "save-draft")]);
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains(SAVED_DRAFT_MESSAGE));
    assert!(!html.contains(MISSING_REQUIRED_MESSAGE));
}
