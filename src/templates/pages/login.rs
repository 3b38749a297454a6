use crate::templates::components::{bullet_list, login_form};
use crate::templates::site_layout;
use maud::{html, Markup};

const PITCH: [&str; 3] = [
    "Track wholesale, Section 8, flip, and rental opportunities.",
    "Surface spreads, cashflow, and deal-ready status at a glance.",
    "Snappy transitions with glass panels and subtle motion.",
];

/// Shown to visitors who have not (mock) signed in yet.
pub fn login_page(email: &str, error: Option<&str>) -> Markup {
    site_layout(
        "Sign in",
        None,
        html! {
            main class="page centered" {
                section class="panel login grid-2" {
                    div class="stack" {
                        span class="pill" { "Pipeline-first design" }
                        h2 { "Minimal, focused dashboard for off-market deals." }
                        p class="lead" {
                            "Log in to see live disposition boards with spreads, rental yield, and a clean glide from login to deal cards."
                        }
                        (bullet_list(&PITCH))
                    }

                    (login_form(email, error))
                }
            }
        },
    )
}
