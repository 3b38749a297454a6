// templates/pages/board.rs

use crate::animation::HookFrame;
use crate::domain::format::{format_currency, format_dollars};
use crate::domain::property::{Property, Strategy, Structure};
use crate::domain::{BoardState, DealStats, Selector};
use crate::map::{MapFrame, TileProvider, TILE_SIZE};
use crate::templates::components::{figure, stat_card};
use crate::templates::layouts::site::{Chrome, Logo};
use crate::templates::site_layout;
use maud::{html, Markup};

/// Tiles are laid out for a frame this wide; narrower screens crop it.
pub const MAP_WIDTH: u32 = 1600;
pub const MAP_HEIGHT: u32 = 720;

pub struct BoardVm<'a> {
    pub board: &'a BoardState,
    pub hook: &'a HookFrame,
    pub tiles: &'a TileProvider,
}

pub fn board_page(vm: &BoardVm) -> Markup {
    let visible = vm.board.visible();
    let stats = vm.board.stats();
    let active = vm.board.active();

    site_layout(
        "Deal board",
        Some(Chrome {
            signed_in: true,
            hook: vm.hook,
            logo: Logo::Dispo,
        }),
        html! {
            main class="page wide" {
                section class="stack" {
                    div class="board-head" {
                        div {
                            p class="eyebrow" { "Map Room" }
                            h2 { "Pan the U.S. map and open properties from markers" }
                        }
                        div class="row" {
                            span class="pill" { span class="dot" {} "Live mock data" }
                            span class="pill" { span class="dot amber" {} "Styled map + pop cards" }
                        }
                    }

                    (stats_strip(&stats))

                    div class="map-shell" {
                        (map_canvas(vm, &visible, active))
                        (filter_panel(vm.board))
                        div class="marker-count" { (visible.len()) " markers active" }
                        @match active {
                            Some(property) => (deal_card(property)),
                            None => div class="deal-card empty" {
                                "No properties match this filter yet. Clear filters to see all."
                            },
                        }
                    }

                    (deal_list(&visible, active))
                }
            }
        },
    )
}

fn stats_strip(stats: &DealStats) -> Markup {
    let rent = if stats.avg_rent > 0.0 {
        format_currency(stats.avg_rent)
    } else {
        "—".to_string()
    };

    html! {
        section class="panel grid-4" {
            (stat_card("Active deals", &stats.active.to_string(), "Filtered and ready to push", true))
            (stat_card("Avg spread", &format_currency(stats.avg_spread), "ARV minus purchase", false))
            (stat_card("Hot deals", &stats.hot.to_string(), "Move first on these", false))
            (stat_card("Avg rent (rentals)", &rent, "Section 8 + rentals", false))
        }
    }
}

fn map_canvas(vm: &BoardVm, visible: &[&Property], active: Option<&Property>) -> Markup {
    let frame = MapFrame::new(vm.board.viewport, MAP_WIDTH, MAP_HEIGHT);
    let retina = vm.tiles.supports_retina();
    let active_id = active.map(|p| p.id);

    html! {
        div class="map" style=(format!("height:{MAP_HEIGHT}px")) {
            @for tile in frame.tiles() {
                img
                    class="tile"
                    alt=""
                    src=(vm.tiles.tile_url(tile.x, tile.y, tile.z, None))
                    srcset=[retina.then(|| format!("{} 2x", vm.tiles.tile_url(tile.x, tile.y, tile.z, Some(2.0))))]
                    width=(TILE_SIZE)
                    height=(TILE_SIZE)
                    style=(offset_style(tile.dx, tile.dy));
            }

            @for property in visible.iter().filter(|p| frame.contains(p.coordinate)) {
                @let (dx, dy) = frame.offset(property.coordinate);
                form .marker .selected[active_id == Some(property.id)]
                    method="post"
                    action=(format!("/arkhived/select/{}", property.id))
                    style=(offset_style(dx, dy))
                {
                    button type="submit" title=(property.address) {
                        span class="pin" { span class="pin-core" {} }
                        span class="pin-label" { (property.city) ", " (property.state) }
                    }
                }
            }

            div class="zoom" {
                form method="post" action="/arkhived/map" {
                    input type="hidden" name="step" value="in";
                    button type="submit" aria-label="Zoom in" { "+" }
                }
                form method="post" action="/arkhived/map" {
                    input type="hidden" name="step" value="out";
                    button type="submit" aria-label="Zoom out" { "−" }
                }
            }

            p class="attribution" { (vm.tiles.attribution()) }
        }
    }
}

fn offset_style(dx: f64, dy: f64) -> String {
    format!("left:calc(50% + {dx:.1}px);top:calc(50% + {dy:.1}px)")
}

fn filter_panel(board: &BoardState) -> Markup {
    let filters = &board.filters;

    html! {
        div class="filters" {
            p class="eyebrow" { span class="dot" {} "Filters" }
            form method="post" action="/arkhived/filters" class="stack" {
                div class="row" {
                    label class="pill" {
                        "Strategy "
                        select name="strategy" onchange="this.form.requestSubmit()" {
                            (selector_options(filters.strategy, &Strategy::ALL))
                        }
                    }
                    label class="pill" {
                        "Structure "
                        select name="structure" onchange="this.form.requestSubmit()" {
                            (selector_options(filters.structure, &Structure::ALL))
                        }
                    }
                }
                div class="row" {
                    input
                        type="search"
                        name="q"
                        value=(filters.search)
                        placeholder="Search city, state, or address";
                    button type="submit" class="ghost" { "Apply" }
                }
            }
            form method="post" action="/arkhived/filters/reset" {
                button type="submit" class="ghost" disabled[filters.is_default()] { "Reset" }
            }
        }
    }
}

fn selector_options<T>(current: Selector<T>, options: &[T]) -> Markup
where
    T: Copy + PartialEq + std::fmt::Display,
{
    html! {
        option value="All" selected[current == Selector::All] { "All" }
        @for option in options {
            @let label = option.to_string();
            option value=(label) selected[current == Selector::Only(*option)] { (label) }
        }
    }
}

fn deal_card(property: &Property) -> Markup {
    html! {
        div class="deal-card" {
            div class="deal-head" {
                div {
                    p class="eyebrow" { (property.strategy) }
                    p class="panel-title" { (property.address) }
                    p class="muted" {
                        (property.city) ", " (property.state) " · " (property.structure)
                    }
                }
                span class="pill" { (property.status) }
            }
            div class="figures" {
                (figure("Purchase", html! { (format_dollars(property.price)) }))
                (figure("ARV", html! { (format_dollars(property.arv)) }))
                (figure("Spread", html! { (format_dollars(property.spread())) }))
                (figure("Beds / Baths", html! { (property.beds) " bd · " (property.baths) " ba" }))
            }
            div class="deal-foot" {
                span class="muted" { span class="dot" {} "Ready for offers" }
                div class="row" {
                    button type="button" class="ghost" { "View comps" }
                    button type="button" class="primary" { "Start offer" }
                }
            }
        }
    }
}

fn deal_list(visible: &[&Property], active: Option<&Property>) -> Markup {
    let active_id = active.map(|p| p.id);

    html! {
        section class="panel" {
            p class="eyebrow" { "Deals in view" }
            @if visible.is_empty() {
                p class="muted" { "Nothing matches. Reset the filters to see every deal." }
            } @else {
                ul class="deal-list" {
                    @for property in visible {
                        li .selected[active_id == Some(property.id)] {
                            form method="post" action=(format!("/arkhived/select/{}", property.id)) {
                                button type="submit" class="deal-row" {
                                    span { (property.address) }
                                    span class="muted" { (property.city) ", " (property.state) }
                                    span { (property.strategy) }
                                    span { (format_dollars(property.spread())) " spread" }
                                    span class="pill" { (property.status) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
