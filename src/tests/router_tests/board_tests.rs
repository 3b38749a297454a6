use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, signed_in, test_app};
use serde_json::Value;

fn snapshot(app: &crate::app::App, token: &str) -> Value {
    let resp = handle(get("/arkhived/board.json", Some(token)), app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

fn marker_ids(snap: &Value) -> Vec<u64> {
    snap["markers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn wholesale_filter_keeps_two_markers() {
    let app = test_app();
    let token = signed_in(&app);

    let resp = handle(
        post_form("/arkhived/filters", "strategy=Wholesale&structure=All&q=", Some(&token)),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let snap = snapshot(&app, &token);
    assert_eq!(marker_ids(&snap), vec![1, 5]);
    assert_eq!(snap["stats"]["active"], 2);
    assert_eq!(snap["filters"]["strategy"], "Wholesale");
}

#[test]
fn search_is_case_insensitive() {
    let app = test_app();
    let token = signed_in(&app);

    handle(post_form("/arkhived/filters", "q=CLEVELAND", Some(&token)), &app).unwrap();

    let snap = snapshot(&app, &token);
    assert_eq!(marker_ids(&snap), vec![6]);
    assert_eq!(snap["selected"], 6);
}

#[test]
fn section_8_label_round_trips_through_the_form() {
    let app = test_app();
    let token = signed_in(&app);

    handle(
        post_form("/arkhived/filters", "strategy=Section+8", Some(&token)),
        &app,
    )
    .unwrap();

    let snap = snapshot(&app, &token);
    assert_eq!(snap["filters"]["strategy"], "Section 8");
    assert!(!marker_ids(&snap).is_empty());
}

#[test]
fn reset_restores_the_full_board() {
    let app = test_app();
    let token = signed_in(&app);

    handle(post_form("/arkhived/filters", "q=cleveland", Some(&token)), &app).unwrap();
    handle(post_form("/arkhived/select/6", "", Some(&token)), &app).unwrap();
    handle(post_form("/arkhived/filters/reset", "", Some(&token)), &app).unwrap();

    let snap = snapshot(&app, &token);
    assert_eq!(marker_ids(&snap).len(), 8);
    assert_eq!(snap["selected"], 6);

    let body = body_string(handle(get("/arkhived", Some(&token)), &app).unwrap());
    assert!(body.contains("$99,625"));
    assert!(body.contains("$2,325"));
}

#[test]
fn unknown_label_is_a_bad_request() {
    let app = test_app();
    let token = signed_in(&app);

    let err = handle(
        post_form("/arkhived/filters", "strategy=Timeshare", Some(&token)),
        &app,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn selecting_hidden_or_unknown_properties_fails() {
    let app = test_app();
    let token = signed_in(&app);

    handle(
        post_form("/arkhived/filters", "strategy=Wholesale", Some(&token)),
        &app,
    )
    .unwrap();

    let hidden = handle(post_form("/arkhived/select/3", "", Some(&token)), &app).unwrap_err();
    assert_eq!(hidden.status(), 400);

    let unknown = handle(post_form("/arkhived/select/99", "", Some(&token)), &app).unwrap_err();
    assert!(matches!(unknown, ServerError::NotFound));

    let junk = handle(post_form("/arkhived/select/abc", "", Some(&token)), &app).unwrap_err();
    assert_eq!(junk.status(), 404);
}

#[test]
fn empty_filter_shows_the_empty_card() {
    let app = test_app();
    let token = signed_in(&app);

    handle(post_form("/arkhived/filters", "q=atlantis", Some(&token)), &app).unwrap();

    let body = body_string(handle(get("/arkhived", Some(&token)), &app).unwrap());
    assert!(body.contains("0 markers active"));
    assert!(body.contains("No properties match this filter yet. Clear filters to see all."));

    let snap = snapshot(&app, &token);
    assert_eq!(snap["stats"]["avgSpread"], 0.0);
    assert!(snap["selected"].is_null());
}

#[test]
fn map_moves_and_zoom_steps() {
    let app = test_app();
    let token = signed_in(&app);

    // Login centers on the first property at zoom 6.
    assert_eq!(snapshot(&app, &token)["viewport"]["zoom"], 6);

    handle(post_form("/arkhived/map", "step=in", Some(&token)), &app).unwrap();
    assert_eq!(snapshot(&app, &token)["viewport"]["zoom"], 7);

    handle(
        post_form("/arkhived/map", "lat=41.5&lng=-81.7&zoom=40", Some(&token)),
        &app,
    )
    .unwrap();
    let snap = snapshot(&app, &token);
    assert_eq!(snap["viewport"]["zoom"], 18);
    assert_eq!(snap["viewport"]["center"]["lat"], 41.5);

    let err = handle(post_form("/arkhived/map", "step=sideways", Some(&token)), &app).unwrap_err();
    assert_eq!(err.status(), 400);

    let err = handle(post_form("/arkhived/map", "lat=north", Some(&token)), &app).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn board_renders_tiles_and_markers() {
    let app = test_app();
    let token = signed_in(&app);

    let body = body_string(handle(get("/arkhived", Some(&token)), &app).unwrap());
    assert!(body.contains("tile.openstreetmap.org/6/"));
    assert!(body.contains(r#"action="/arkhived/select/1""#));
    assert!(body.contains("OpenStreetMap"));
}

#[test]
fn oversized_forms_are_rejected() {
    let app = test_app();
    let token = signed_in(&app);

    let limit = crate::router::MAX_FORM_BYTES as usize;
    let form = format!("q={}", "a".repeat(limit));
    let err = handle(post_form("/arkhived/filters", &form, Some(&token)), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    // Filters are untouched.
    assert_eq!(marker_ids(&snapshot(&app, &token)).len(), 8);

    let form = format!("q={}", "a".repeat(limit - 2));
    let resp = handle(post_form("/arkhived/filters", &form, Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 303);
}
