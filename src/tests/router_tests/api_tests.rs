use crate::tests::utils::{address_body, body_json, TestApp};
use chrono::{DateTime, Utc};
use http::Method;
use serde_json::{json, Value};
use std::thread::sleep;
use std::time::Duration;

fn updated_at(record: &Value) -> DateTime<Utc> {
    record["updatedAt"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("updatedAt is a timestamp")
}

#[test]
fn create_applies_defaults() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let body = json!({ "streetAddress": "1 Main St", "suburb": "Perth", "postcode": "6000" });
    let created = app.create(&token, body.clone());

    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["status"], "DRAFT");
    assert_eq!(created["state"], "WA");
    assert_eq!(created["title"], "");
    assert_eq!(created["address"], "1 Main St");
    assert_eq!(created["data"], body);
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert!(created.get("userId").is_none());
}

#[test]
fn create_keeps_provided_status_and_title() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let mut body = address_body();
    body["status"] = json!("COMPLETED");
    body["appraisalTitle"] = json!("Initial visit");
    body["state"] = json!("NSW");
    let created = app.create(&token, body);

    assert_eq!(created["status"], "COMPLETED");
    assert_eq!(created["title"], "Initial visit");
    assert_eq!(created["state"], "NSW");
}

#[test]
fn create_without_postcode_is_rejected_and_writes_nothing() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let resp = app.json(
        Method::POST,
        "/appraisals",
        Some(&token),
        Some(json!({ "streetAddress": "1 Main St", "suburb": "Perth" })),
    );
    assert_eq!(resp.status(), 400);
    assert_eq!(
        body_json(resp),
        json!({ "error": "streetAddress, suburb and postcode are required" })
    );

    let list = body_json(app.json(Method::GET, "/appraisals", Some(&token), None));
    assert_eq!(list, json!([]));
}

#[test]
fn malformed_json_is_a_bad_request() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/appraisals")
        .header("Authorization", format!("Bearer {token}"))
        .body(astra::Body::from("{not json"))
        .unwrap();
    let resp = app.send(req);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "Invalid JSON body");
}

#[test]
fn data_round_trips_unchanged() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let data = json!({
        "schemaVersion": 2,
        "payload": {
            "streetAddress": "11 Maple Crescent",
            "rooms": [{ "id": 1, "label": "Main", "type": "bedroom", "extraFields": { "robe": "Walk-in" } }],
            "nonPriceGoals": { "speed": 5 },
            "weird": [null, 1.5, { "deep": true }]
        }
    });
    let mut body = address_body();
    body["data"] = data.clone();
    let created = app.create(&token, body);

    let uri = format!("/appraisals/{}", created["id"]);
    let fetched = body_json(app.json(Method::GET, &uri, Some(&token), None));
    assert_eq!(fetched["data"], data);
    assert_eq!(fetched, created);
}

#[test]
fn patch_to_completed_bumps_updated_at() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let created = app.create(&token, address_body());

    sleep(Duration::from_millis(5));

    let mut body = address_body();
    body["status"] = json!("COMPLETED");
    let uri = format!("/appraisals/{}", created["id"]);
    let resp = app.json(Method::PATCH, &uri, Some(&token), Some(body));
    assert_eq!(resp.status(), 200);
    let updated = body_json(resp);

    assert_eq!(updated["status"], "COMPLETED");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated_at(&updated) > updated_at(&created));
}

#[test]
fn patch_with_missing_fields_leaves_the_record_alone() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let created = app.create(&token, address_body());
    let uri = format!("/appraisals/{}", created["id"]);

    let resp = app.json(Method::PATCH, &uri, Some(&token), Some(json!({ "suburb": "Perth" })));
    assert_eq!(resp.status(), 400);

    let fetched = body_json(app.json(Method::GET, &uri, Some(&token), None));
    assert_eq!(fetched, created);
}

#[test]
fn foreign_records_look_missing() {
    let app = TestApp::new();
    let owner = app.login("agent-1");
    let other = app.login("agent-2");
    let created = app.create(&owner, address_body());
    let uri = format!("/appraisals/{}", created["id"]);

    let resp = app.json(Method::GET, &uri, Some(&other), None);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["error"], "Appraisal not found");

    let resp = app.json(Method::PATCH, &uri, Some(&other), Some(address_body()));
    assert_eq!(resp.status(), 404);

    let resp = app.json(Method::DELETE, &uri, Some(&other), None);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!({ "ok": true }));

    // Still there for its owner.
    let resp = app.json(Method::GET, &uri, Some(&owner), None);
    assert_eq!(resp.status(), 200);

    let list = body_json(app.json(Method::GET, "/appraisals", Some(&other), None));
    assert_eq!(list, json!([]));
}

#[test]
fn delete_removes_the_record_and_is_idempotent() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let created = app.create(&token, address_body());
    let uri = format!("/appraisals/{}", created["id"]);

    for _ in 0..2 {
        let resp = app.json(Method::DELETE, &uri, Some(&token), None);
        assert_eq!(resp.status(), 200);
    }
    assert_eq!(app.json(Method::GET, &uri, Some(&token), None).status(), 404);
}

#[test]
fn list_is_newest_first() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let first = app.create(&token, address_body());
    sleep(Duration::from_millis(5));
    let second = app.create(&token, address_body());
    sleep(Duration::from_millis(5));

    // Touching the first moves it back to the top.
    let uri = format!("/appraisals/{}", first["id"]);
    app.json(Method::PATCH, &uri, Some(&token), Some(address_body()));

    let list = body_json(app.json(Method::GET, "/appraisals", Some(&token), None));
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first["id"].as_i64().unwrap(), second["id"].as_i64().unwrap()]);
}

#[test]
fn api_prefix_is_an_alias() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let resp = app.json(Method::POST, "/api/appraisals", Some(&token), Some(address_body()));
    assert_eq!(resp.status(), 201);
    let created = body_json(resp);

    let uri = format!("/api/appraisals/{}", created["id"]);
    assert_eq!(body_json(app.json(Method::GET, &uri, Some(&token), None)), created);
}

#[test]
fn bad_ids_and_methods_are_rejected() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    assert_eq!(app.json(Method::GET, "/appraisals/abc", Some(&token), None).status(), 400);
    assert_eq!(app.json(Method::GET, "/appraisals/0", Some(&token), None).status(), 400);
    assert_eq!(app.json(Method::PUT, "/appraisals/1", Some(&token), None).status(), 405);
    assert_eq!(app.json(Method::DELETE, "/appraisals", Some(&token), None).status(), 405);
    assert_eq!(app.json(Method::GET, "/api/nothing", Some(&token), None).status(), 404);
}
