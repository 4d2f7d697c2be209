use crate::tests::utils::{address_body, body_string, TestApp};
use serde_json::json;

#[test]
fn empty_list_invites_a_first_appraisal() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let resp = app.page("/", &token);
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("No appraisals yet."));
    assert!(html.contains(r#"href="/appraisals/new""#));
}

#[test]
fn browsers_get_the_list_page_at_the_collection_path() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    app.create(&token, address_body());

    let resp = app.page("/appraisals", &token);
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(body_string(resp).contains("11 Maple Crescent, Helena Valley 6056 WA"));
}

#[test]
fn rows_fall_back_to_a_numbered_title() {
    let app = TestApp::new();
    let token = app.login("agent-1");
    let untitled = app.create(&token, address_body());

    let mut body = address_body();
    body["appraisalTitle"] = json!("Corner block");
    app.create(&token, body);

    let html = body_string(app.page("/", &token));
    assert!(html.contains(&format!("Appraisal #{}", untitled["id"])));
    assert!(html.contains("Corner block"));
}

#[test]
fn search_and_status_filters_narrow_the_rows() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    app.create(&token, address_body());
    app.create(
        &token,
        json!({
            "streetAddress": "4 Ocean Pde",
            "suburb": "Cottesloe",
            "postcode": "6011",
            "status": "COMPLETED"
        }),
    );

    let html = body_string(app.page("/?q=cottesloe", &token));
    assert!(html.contains("4 Ocean Pde"));
    assert!(!html.contains("11 Maple Crescent"));

    let html = body_string(app.page("/?status=DRAFT", &token));
    assert!(html.contains("11 Maple Crescent"));
    assert!(!html.contains("4 Ocean Pde"));

    let html = body_string(app.page("/?status=COMPLETED&q=maple", &token));
    assert!(html.contains("No appraisals match your filters."));
}

#[test]
fn other_users_records_are_not_listed() {
    let app = TestApp::new();
    let owner = app.login("agent-1");
    let other = app.login("agent-2");
    app.create(&owner, address_body());

    let html = body_string(app.page("/", &other));
    assert!(html.contains("No appraisals yet."));
}
