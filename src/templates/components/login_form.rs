use maud::{html, Markup};

pub fn login_form(email: &str, error: Option<&str>) -> Markup {
    html! {
        div class="panel login-card" {
            div class="login-head" {
                div {
                    p class="eyebrow" { "Login" }
                    p class="panel-title" { "Disposition access" }
                }
                span class="pill" { "Mock only" }
            }

            form method="post" action="/login" class="stack" {
                label for="email" { "Email" }
                input
                    type="email"
                    id="email"
                    name="email"
                    value=(email)
                    placeholder="you@dispo.co"
                    autocomplete="email";

                label for="password" { "Password" }
                input
                    type="password"
                    id="password"
                    name="password"
                    placeholder="••••••••"
                    autocomplete="current-password";

                @if let Some(msg) = error {
                    p class="form-error" role="alert" { (msg) }
                }

                button type="submit" class="primary wide" { "Enter dashboard" }
            }

            p class="hint" {
                "Auth is mocked for now. When ready, this can hook into your dispositioning system’s login route."
            }
        }
    }
}
