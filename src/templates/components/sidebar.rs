use crate::animation::HookFrame;
use maud::{html, Markup};

/// Slide-out menu. The checkbox drives it from CSS alone.
pub fn sidebar(signed_in: bool, hook: &HookFrame) -> Markup {
    html! {
        input type="checkbox" id="nav-toggle" class="nav-toggle" hidden;
        label for="nav-toggle" class="nav-scrim" {}
        aside class="sidebar" {
            div class="sidebar-head" {
                label for="nav-toggle" class="menu-button" aria-label="Close menu" {
                    span {} span {} span {}
                }
            }
            nav class="sidebar-nav" {
                a href="/home" class="nav-link" { "Home" }
                div
                    class="nav-hook"
                    hx-post="/hook/stop"
                    hx-trigger="mouseleave"
                    hx-target="#hook-tooltip"
                    hx-swap="outerHTML"
                {
                    a
                        href="/arkhived"
                        class="nav-link"
                        hx-post="/hook/start"
                        hx-trigger="mouseenter"
                        hx-target="#hook-tooltip"
                        hx-swap="outerHTML"
                    { "Arkhived" }
                    (hook_tooltip(hook))
                }
                a href="/pricing" class="nav-link" { "Pricing" }
            }
            @if signed_in {
                div class="sidebar-foot" {
                    form method="post" action="/logout" {
                        button type="submit" class="ghost wide" { "Sign out" }
                    }
                    p class="hint" {
                        "Routes include Off-Market and Pricing; extend as you add more pages."
                    }
                }
            }
        }
    }
}

/// Typed pitch next to the Arkhived link. While the caret shows it
/// re-fetches itself to pick up the next frame.
pub fn hook_tooltip(frame: &HookFrame) -> Markup {
    html! {
        div #hook-tooltip .hook-tooltip .is-visible[frame.visible]
            hx-get=[frame.caret.then_some("/hook")]
            hx-trigger=[frame.caret.then_some("load delay:100ms")]
            hx-swap="outerHTML"
        {
            p class="eyebrow" { "Control Center" }
            div class="hook-text" {
                (frame.typed)
                @if frame.caret {
                    span class="caret" {}
                }
            }
        }
    }
}
