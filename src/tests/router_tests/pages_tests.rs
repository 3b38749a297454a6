use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn home_page_shows_seed_stats() {
    let app = test_app();

    let resp = handle(get("/home", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("$99,625"));
    assert!(body.contains("Featured deal"));
    assert!(body.contains("1430 Willow St"));
}

#[test]
fn pricing_lists_three_plans() {
    let app = test_app();

    let body = body_string(handle(get("/pricing", None), &app).unwrap());
    for plan in ["Starter", "Pro", "Scale"] {
        assert!(body.contains(plan), "missing plan {plan}");
    }
    assert!(body.contains("$149/mo"));
}

#[test]
fn stylesheet_is_served_as_css() {
    let app = test_app();

    let resp = handle(get("/static/main.css", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".hook-tooltip"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app();

    let err = handle(get("/nope", None), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get("/arkhived/filters", None), &app).unwrap_err();
    assert_eq!(err.status(), 404);
}
