use crate::animation::HookFrame;
use crate::templates::components::sidebar;
use maud::{html, Markup, DOCTYPE};

/// What the header and slide-out menu need to know.
pub struct Chrome<'a> {
    pub signed_in: bool,
    pub hook: &'a HookFrame,
    pub logo: Logo,
}

#[derive(Clone, Copy)]
pub enum Logo {
    Arkhived,
    Dispo,
}

pub fn site_layout(title: &str, chrome: Option<Chrome<'_>>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Arkhived" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="surface" {
                div class="backdrop" {}
                @if let Some(chrome) = &chrome {
                    header class="topbar" {
                        a href="/home" class="brand" {
                            @match chrome.logo {
                                Logo::Arkhived => "Arkhived",
                                Logo::Dispo => "Dispositioning",
                            }
                        }
                        label for="nav-toggle" class="menu-button" aria-label="Toggle menu" {
                            span {} span {} span {}
                        }
                    }
                    (sidebar(chrome.signed_in, chrome.hook))
                }
                (content)
            }
        }
    }
}
