use crate::templates::components::bullet_list;
use crate::templates::site_layout;
use maud::{html, Markup};

struct Plan {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    highlight: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$79/mo",
        blurb: "For lean dispo teams running a few deals a month.",
        features: &[
            "Up to 50 active properties",
            "Basic comps and notes",
            "Email support",
            "1 workspace",
        ],
        highlight: false,
    },
    Plan {
        name: "Pro",
        price: "$149/mo",
        blurb: "For teams pushing steady deal volume with collaboration.",
        features: &[
            "Up to 200 active properties",
            "Advanced comps & tags",
            "Team comments",
            "Role-based access",
            "Priority support",
        ],
        highlight: true,
    },
    Plan {
        name: "Scale",
        price: "Let’s talk",
        blurb: "High-volume dispo with custom workflows and SLAs.",
        features: &[
            "Unlimited properties",
            "Custom reporting",
            "SSO & audit logs",
            "API access",
            "Dedicated CSM",
        ],
        highlight: false,
    },
];

pub fn pricing_page() -> Markup {
    site_layout(
        "Pricing",
        None,
        html! {
            main class="page" {
                div class="stack" {
                    p class="eyebrow" { "Pricing" }
                    h1 { "Choose your disposition tier" }
                    p class="lead" {
                        "Keep the same minimal, glassy aesthetic whether you’re ramping up off-market deals or scaling a full team."
                    }
                }

                div class="grid-3" {
                    @for plan in &PLANS {
                        div .panel .plan .highlight[plan.highlight] {
                            div class="plan-head" {
                                h2 { (plan.name) }
                                @if plan.highlight {
                                    span class="pill" { "Recommended" }
                                }
                            }
                            p class="plan-price" { (plan.price) }
                            p class="muted" { (plan.blurb) }
                            (bullet_list(plan.features))
                            a href="/arkhived" class="button primary wide" { "Get started" }
                        }
                    }
                }

                div class="panel" {
                    p class="eyebrow" { "Need something else?" }
                    p class="panel-title" { "Custom enterprise" }
                    p class="muted" {
                        "Connect your existing disposition workflows, CRMs, and comps engines. We can price by volume, seats, or performance."
                    }
                    a href="/arkhived" class="button ghost" { "Talk to us" }
                }
            }
        },
    )
}
