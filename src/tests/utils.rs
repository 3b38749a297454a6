use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::Duration;

/// App with a fast hook ticker so animation tests finish quickly.
pub fn test_app() -> App {
    App::new(Config {
        hook_tick: Duration::from_millis(1),
        ..Config::default()
    })
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    request(Method::GET, uri, Body::empty(), cookie)
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request {
    let mut req = request(Method::POST, uri, Body::from(form.as_bytes().to_vec()), cookie);
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

fn request(method: Method, uri: &str, body: Body, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = cookie {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(body).unwrap()
}

/// Token from a `Set-Cookie: session=...` header, if the response set one.
pub fn session_cookie(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    let pair = header.split(';').next()?;
    pair.strip_prefix("session=").map(str::to_string)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Opens a session and signs it in. Returns the session token.
pub fn signed_in(app: &App) -> String {
    let resp = handle(get("/arkhived", None), app).unwrap();
    let token = session_cookie(&resp).expect("new session sets a cookie");

    let resp = handle(
        post_form("/login", "email=dee%40dispo.co&password=hunter2", Some(&token)),
        app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    token
}
