// templates/pages/home.rs

use crate::animation::HookFrame;
use crate::domain::format::{format_currency, format_dollars};
use crate::domain::{DealStats, Property, SEED_PROPERTIES};
use crate::templates::components::{bullet_list, figure, stat_card};
use crate::templates::layouts::site::{Chrome, Logo};
use crate::templates::site_layout;
use maud::{html, Markup};

const ACTIVITY: [&str; 4] = [
    "Offer submitted on Phoenix, AZ",
    "Comps viewed for Indianapolis, IN",
    "New off-market added: Charlotte, NC",
    "Section 8 rental updated: Cleveland, OH",
];

pub fn home_page(signed_in: bool, hook: &HookFrame) -> Markup {
    let all: Vec<&Property> = SEED_PROPERTIES.iter().collect();
    let stats = DealStats::from_visible(&all);
    let featured = &SEED_PROPERTIES[0];

    site_layout(
        "Overview",
        Some(Chrome {
            signed_in,
            hook,
            logo: Logo::Arkhived,
        }),
        html! {
            main class="page" {
                header class="stack" {
                    span class="pill" { "Arkhived Overview" }
                    h1 { "Your off-market command intro" }
                    p class="lead" {
                        "Start here, then jump into the Control Center to work deals or view pricing for your team. No extra workflows, just a clear entry point."
                    }
                    div class="row" {
                        a href="/arkhived" class="button primary" { "Enter Arkhived" }
                        a href="/pricing" class="button ghost" { "View Pricing" }
                    }
                }

                section class="panel grid-3" {
                    (stat_card("Active deals", &stats.active.to_string(), "Filtered and ready to push", true))
                    (stat_card("Hot deals", &stats.hot.to_string(), "Move first on these", true))
                    (stat_card("Avg spread", &format_currency(stats.avg_spread), "ARV minus purchase", true))
                }

                section class="grid-2" {
                    div class="panel" {
                        p class="eyebrow" { "Featured deal" }
                        h3 { (featured.address) }
                        p class="muted" {
                            (featured.city) ", " (featured.state) " · " (featured.structure)
                        }
                        div class="figures" {
                            (figure("Purchase", html! { (format_dollars(featured.price)) }))
                            (figure("ARV", html! { (format_dollars(featured.arv)) }))
                            (figure("Spread", html! { (format_dollars(featured.spread())) }))
                            (figure("Action", html! {
                                a href="/arkhived" class="link" { "Open in Arkhived" }
                            }))
                        }
                    }

                    div class="panel" {
                        p class="eyebrow" { "Recent activity" }
                        (bullet_list(&ACTIVITY))
                    }
                }
            }
        },
    )
}
