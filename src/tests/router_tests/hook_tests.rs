use crate::animation::hook::HOOK_TEXT;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, session_cookie, test_app};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn hook_types_out_and_stops() {
    let app = test_app();
    let token = session_cookie(&handle(get("/home", None), &app).unwrap()).unwrap();

    let started = body_string(handle(post_form("/hook/start", "", Some(&token)), &app).unwrap());
    assert!(started.contains("is-visible"));
    assert!(started.contains(r#"hx-get="/hook""#));
    assert!(!started.contains("<html"));

    // Poll like the browser does until the caret goes away.
    let deadline = Instant::now() + Duration::from_secs(10);
    let finished = loop {
        let body = body_string(handle(get("/hook", Some(&token)), &app).unwrap());
        if !body.contains("caret") || Instant::now() > deadline {
            break body;
        }
        thread::sleep(Duration::from_millis(20));
    };
    assert!(finished.contains("Arkhived for you."));
    assert!(!finished.contains("hx-get"));

    let stopped = body_string(handle(post_form("/hook/stop", "", Some(&token)), &app).unwrap());
    assert!(!stopped.contains("is-visible"));
    assert!(!stopped.contains("Most investors"));
}

#[test]
fn restart_keeps_a_single_animation() {
    let app = test_app();
    let token = session_cookie(&handle(get("/home", None), &app).unwrap()).unwrap();

    handle(post_form("/hook/start", "", Some(&token)), &app).unwrap();
    thread::sleep(Duration::from_millis(30));
    let restarted = body_string(handle(post_form("/hook/start", "", Some(&token)), &app).unwrap());

    // The partial is rendered right after the restart, before the next tick.
    assert!(restarted.contains("is-visible"));
    assert!(!restarted.contains(HOOK_TEXT));

    let running = app
        .sessions
        .with_session(&token, |s| Ok(s.hook.is_running()))
        .unwrap();
    assert!(running);

    handle(post_form("/hook/stop", "", Some(&token)), &app).unwrap();
    let running = app
        .sessions
        .with_session(&token, |s| Ok(s.hook.is_running()))
        .unwrap();
    assert!(!running);
}
