use crate::app::App;
use crate::domain::filters::{FilterCriteria, Selector};
use crate::domain::property::{Coordinate, PropertyId};
use crate::errors::ServerError;
use crate::map::Viewport;
use crate::responses::{css_response, html_response, json_response, see_other, ResultResp};
use crate::session::{Action, ActionError, LoginForm, SessionHandle, SessionState};
use crate::templates;
use crate::templates::pages::BoardVm;
use astra::Request;
use http::HeaderValue;
use std::collections::HashMap;
use std::io::Read;

pub const SESSION_COOKIE: &str = "session";

/// Every form here is a handful of short fields.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

const STYLESHEET: &str = include_str!("../static/main.css");

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!("request", %method, %path);
    let _guard = span.enter();

    let cookie = session_cookie(&req);
    let session = app.sessions.resolve(cookie.as_deref())?;

    let routed = route(&mut req, (method.as_str(), path.as_str()), app, &session);
    let mut resp = match routed {
        Ok(resp) => resp,
        Err(err) => {
            // An error response carries no cookie, so nobody could come back for it.
            if session.is_new {
                app.sessions.discard(&session.token)?;
            }
            return Err(err);
        }
    };

    if session.is_new {
        let cookie = format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            session.token
        );
        let value = HeaderValue::from_str(&cookie).map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().append("Set-Cookie", value);
    }

    tracing::debug!(status = resp.status().as_u16(), "response");
    Ok(resp)
}

fn route(req: &mut Request, target: (&str, &str), app: &App, session: &SessionHandle) -> ResultResp {
    let token = session.token.as_str();

    match target {
        ("GET", "/") | ("GET", "/arkhived") => {
            let force = parse_query(req).get("authed").map(String::as_str) == Some("1");
            app.sessions.with_session(token, |s| {
                if force {
                    dispatch(s, Action::ForceAuthenticate)?;
                }
                render_board_or_login(s, app)
            })
        }

        ("POST", "/login") => {
            let form = parse_form(req)?;
            let login = LoginForm {
                email: field(&form, "email"),
                password: field(&form, "password"),
            };
            let email = login.email.clone();

            app.sessions.with_session(token, |s| match s.dispatch(Action::Login(login)) {
                Ok(()) => see_other("/arkhived"),
                Err(ActionError::Login(err)) => {
                    let message = err.to_string();
                    html_response(templates::pages::login_page(&email, Some(message.as_str())))
                }
                Err(ActionError::Board(err)) => Err(err.into()),
            })
        }

        ("POST", "/logout") => {
            app.sessions
                .with_session(token, |s| dispatch(s, Action::SignOut))?;
            see_other("/arkhived")
        }

        ("POST", "/arkhived/filters") => {
            let form = parse_form(req)?;
            let filters = FilterCriteria {
                strategy: parse_selector(&form, "strategy")?,
                structure: parse_selector(&form, "structure")?,
                search: field(&form, "q"),
            };
            board_action(app, token, Action::ApplyFilters(filters))
        }

        ("POST", "/arkhived/filters/reset") => board_action(app, token, Action::ResetFilters),

        ("POST", "/arkhived/map") => {
            let form = parse_form(req)?;
            let action = match form.get("step").map(String::as_str) {
                Some("in") => Action::ZoomIn,
                Some("out") => Action::ZoomOut,
                Some(other) => {
                    return Err(ServerError::BadRequest(format!("unknown zoom step {other:?}")))
                }
                None => Action::MoveMap(parse_viewport(&form)?),
            };
            board_action(app, token, action)
        }

        ("POST", path) if path.starts_with("/arkhived/select/") => {
            let id: PropertyId = path
                .trim_start_matches("/arkhived/select/")
                .parse()
                .map_err(|_| ServerError::NotFound)?;
            board_action(app, token, Action::Select(id))
        }

        ("GET", "/arkhived/board.json") => {
            app.sessions
                .with_session(token, |s| json_response(&s.board.snapshot()))
        }

        ("GET", "/home") => app.sessions.with_session(token, |s| {
            html_response(templates::pages::home_page(
                s.is_authenticated(),
                &s.hook.frame(),
            ))
        }),

        ("GET", "/pricing") => html_response(templates::pages::pricing_page()),

        ("GET", "/hook") => hook_partial(app, token, None),
        ("POST", "/hook/start") => hook_partial(app, token, Some(Action::ShowHook)),
        ("POST", "/hook/stop") => hook_partial(app, token, Some(Action::HideHook)),

        ("GET", "/static/main.css") => css_response(STYLESHEET),

        _ => Err(ServerError::NotFound),
    }
}

fn render_board_or_login(s: &SessionState, app: &App) -> ResultResp {
    if !s.is_authenticated() {
        return html_response(templates::pages::login_page("", None));
    }

    let hook = s.hook.frame();
    html_response(templates::pages::board_page(&BoardVm {
        board: &s.board,
        hook: &hook,
        tiles: &app.tiles,
    }))
}

/// Applies a board change for a signed-in session and sends the browser
/// back to the board.
fn board_action(app: &App, token: &str, action: Action) -> ResultResp {
    app.sessions.with_session(token, |s| {
        if !s.is_authenticated() {
            return Err(ServerError::Unauthorized("sign in to use the deal board".into()));
        }
        dispatch(s, action)
    })?;
    see_other("/arkhived")
}

fn hook_partial(app: &App, token: &str, action: Option<Action>) -> ResultResp {
    app.sessions.with_session(token, |s| {
        if let Some(action) = action {
            dispatch(s, action)?;
        }
        html_response(templates::hook_tooltip(&s.hook.frame()))
    })
}

fn dispatch(s: &mut SessionState, action: Action) -> Result<(), ServerError> {
    s.dispatch(action).map_err(|err| match err {
        ActionError::Board(err) => err.into(),
        ActionError::Login(err) => ServerError::BadRequest(err.to_string()),
    })
}

fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body larger than {MAX_FORM_BYTES} bytes"
        )));
    }

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn field(form: &HashMap<String, String>, name: &str) -> String {
    form.get(name).cloned().unwrap_or_default()
}

/// A missing selector means "All"; an unknown label is rejected.
fn parse_selector<T>(form: &HashMap<String, String>, name: &str) -> Result<Selector<T>, ServerError>
where
    T: std::str::FromStr<Err = String>,
{
    match form.get(name) {
        None => Ok(Selector::All),
        Some(raw) => raw.parse().map_err(ServerError::BadRequest),
    }
}

fn parse_viewport(form: &HashMap<String, String>) -> Result<Viewport, ServerError> {
    fn number<T: std::str::FromStr>(
        form: &HashMap<String, String>,
        name: &str,
    ) -> Result<T, ServerError> {
        form.get(name)
            .and_then(|raw| raw.trim().parse().ok())
            .ok_or_else(|| ServerError::BadRequest(format!("missing or invalid {name}")))
    }

    let lat: f64 = number(form, "lat")?;
    let lng: f64 = number(form, "lng")?;
    let zoom: i64 = number(form, "zoom")?;

    Ok(Viewport::clamped(Coordinate::new(lat, lng), zoom))
}
