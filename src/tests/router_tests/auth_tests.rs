use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, session_cookie, signed_in, test_app};

#[test]
fn board_shows_login_until_signed_in() {
    let app = test_app();

    let resp = handle(get("/arkhived", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Disposition access"));
    assert!(body.contains(r#"action="/login""#));
    assert!(!body.contains("markers active"));
}

#[test]
fn blank_login_rerenders_with_message() {
    let app = test_app();
    let resp = handle(get("/", None), &app).unwrap();
    let token = session_cookie(&resp).unwrap();

    let resp = handle(
        post_form("/login", "email=+++&password=secret", Some(&token)),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Enter your email and password to continue."));

    // Still signed out.
    let body = body_string(handle(get("/arkhived", Some(&token)), &app).unwrap());
    assert!(body.contains("Disposition access"));
}

#[test]
fn login_redirects_to_the_board() {
    let app = test_app();
    let token = signed_in(&app);

    let resp = handle(get("/arkhived", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(session_cookie(&resp).is_none());

    let body = body_string(resp);
    assert!(body.contains("8 markers active"));
    assert!(body.contains("1430 Willow St"));
    assert!(body.contains("Sign out"));
}

#[test]
fn authed_query_skips_the_form() {
    let app = test_app();

    let body = body_string(handle(get("/arkhived?authed=1", None), &app).unwrap());
    assert!(body.contains("markers active"));
}

#[test]
fn logout_returns_to_login_and_keeps_filters() {
    let app = test_app();
    let token = signed_in(&app);

    handle(
        post_form("/arkhived/filters", "strategy=Wholesale&structure=All&q=", Some(&token)),
        &app,
    )
    .unwrap();

    let resp = handle(post_form("/logout", "", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/arkhived");

    let body = body_string(handle(get("/arkhived", Some(&token)), &app).unwrap());
    assert!(body.contains("Disposition access"));

    let body = body_string(handle(get("/arkhived?authed=1", Some(&token)), &app).unwrap());
    assert!(body.contains("2 markers active"));
}

#[test]
fn board_actions_need_a_login() {
    let app = test_app();
    let token = session_cookie(&handle(get("/", None), &app).unwrap()).unwrap();

    let err = handle(post_form("/arkhived/filters/reset", "", Some(&token)), &app).unwrap_err();
    assert!(matches!(err, ServerError::Unauthorized(_)));
    assert_eq!(err.status(), 401);

    let err = handle(post_form("/arkhived/select/1", "", Some(&token)), &app).unwrap_err();
    assert_eq!(err.status(), 401);
}

#[test]
fn cookie_is_only_set_for_new_sessions() {
    let app = test_app();

    let first = handle(get("/pricing", None), &app).unwrap();
    let token = session_cookie(&first).unwrap();
    let header = first.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("Path=/"));
    assert!(header.contains("SameSite=Lax"));

    let again = handle(get("/pricing", Some(&token)), &app).unwrap();
    assert!(again.headers().get("Set-Cookie").is_none());

    let stale = handle(get("/pricing", Some("not-a-token")), &app).unwrap();
    assert!(session_cookie(&stale).is_some());
    assert_eq!(app.sessions.len(), 2);
}

#[test]
fn failed_cookieless_requests_leave_no_sessions() {
    let app = test_app();

    for _ in 0..50 {
        let err = handle(get("/nope", None), &app).unwrap_err();
        assert_eq!(err.status(), 404);
    }
    let err = handle(post_form("/arkhived/filters/reset", "", None), &app).unwrap_err();
    assert_eq!(err.status(), 401);
    let err = handle(post_form("/arkhived/select/3", "", None), &app).unwrap_err();
    assert_eq!(err.status(), 401);

    assert!(app.sessions.is_empty());

    // A session the browser already holds survives its own errors.
    let token = session_cookie(&handle(get("/home", None), &app).unwrap()).unwrap();
    handle(get("/nope", Some(&token)), &app).unwrap_err();
    assert_eq!(app.sessions.len(), 1);

    let resp = handle(get("/home", Some(&token)), &app).unwrap();
    assert!(session_cookie(&resp).is_none());
}
