use maud::{html, Markup};

pub fn stat_card(label: &str, value: &str, sub: &str, accent: bool) -> Markup {
    html! {
        div .stat-card .accent[accent] {
            p class="eyebrow" { (label) }
            p class="stat-value" { (value) }
            p class="stat-sub" { (sub) }
        }
    }
}

/// Small labelled figure inside a deal card.
pub fn figure(label: &str, value: Markup) -> Markup {
    html! {
        div class="figure" {
            p class="eyebrow" { (label) }
            p class="figure-value" { (value) }
        }
    }
}

pub fn bullet_list(items: &[&str]) -> Markup {
    html! {
        ul class="bullets" {
            @for item in items {
                li { span class="dot" {} span { (item) } }
            }
        }
    }
}
