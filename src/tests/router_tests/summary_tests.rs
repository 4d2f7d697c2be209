use crate::tests::utils::{address_body, body_string, TestApp};
use serde_json::json;

#[test]
fn summary_renders_the_stored_document() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let mut body = address_body();
    body["data"] = json!({
        "schemaVersion": 2,
        "payload": {
            "streetAddress": "11 Maple Crescent",
            "suburb": "Helena Valley",
            "postcode": "6056",
            "ownerNames": "Sam & Alex Reid",
            "priceLow": "850000",
            "priceHigh": "900000",
            "nonPriceGoals": { "privacy": 5 }
        }
    });
    let created = app.create(&token, body);

    let resp = app.page(&format!("/appraisals/{}/summary", created["id"]), &token);
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert!(html.contains("Appraisal summary"));
    assert!(html.contains("11 Maple Crescent, Helena Valley 6056 WA"));
    assert!(html.contains("Sam &amp; Alex Reid"));
    assert!(html.contains("window.print()"));
    assert!(html.contains("APPRAISAL CAPTURE · APPRAISAL REPORT"));
}

#[test]
fn summary_falls_back_to_columns_for_flat_documents() {
    let app = TestApp::new();
    let token = app.login("agent-1");

    let mut body = address_body();
    body["appraisalTitle"] = json!("Hills acreage");
    body["data"] = json!({ "ownerNames": "Jo Park" });
    let created = app.create(&token, body);

    let html = body_string(app.page(&format!("/appraisals/{}/summary", created["id"]), &token));
    assert!(html.contains("Hills acreage"));
    assert!(html.contains("11 Maple Crescent, Helena Valley 6056 WA"));
    assert!(html.contains("Jo Park"));
}

#[test]
fn summary_of_a_foreign_record_is_not_found() {
    let app = TestApp::new();
    let owner = app.login("agent-1");
    let other = app.login("agent-2");
    let created = app.create(&owner, address_body());

    let resp = app.page(&format!("/appraisals/{}/summary", created["id"]), &other);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Appraisal not found"));
}
