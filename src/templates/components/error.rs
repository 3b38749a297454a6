use crate::templates::site_layout;
use maud::{html, Markup};

/// Full error page; status and message come from `ServerError`.
pub fn error_page(status: u16, message: &str) -> Markup {
    site_layout(
        &format!("Error {status}"),
        None,
        html! {
            main class="page narrow" {
                p class="eyebrow" { "Error " (status) }
                h1 { (message) }
                p { a href="/arkhived" class="link" { "← Back to the deal board" } }
            }
        },
    )
}
