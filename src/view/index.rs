use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::{ClubCatalog, ConditionsReport, MAX_CARRY_YARDS};
use crate::view::weather::render_weather;

/// Hides the previous card as soon as the target changes.
const CLEAR_RECOMMENDATION_JS: &str =
    "document.getElementById('recommendation').classList.add('hidden')";

pub const DEFAULT_INDEX_TITLE: &str = "Golf Club Distance Calculator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Clubs,
    Calculator,
}

impl Tab {
    /// Unknown or missing values open the clubs tab.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("calculator" | "calculatorTab") => Tab::Calculator,
            _ => Tab::Clubs,
        }
    }

    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Tab::Clubs => "clubsTab",
            Tab::Calculator => "calculatorTab",
        }
    }

    fn query_value(self) -> &'static str {
        match self {
            Tab::Clubs => "clubs",
            Tab::Calculator => "calculator",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::Clubs => "My Clubs",
            Tab::Calculator => "Club Calculator",
        }
    }
}

pub struct IndexPage<'a> {
    pub title: &'a str,
    pub tab: Tab,
    pub catalog: &'a ClubCatalog,
    pub saved: bool,
    pub conditions: &'a ConditionsReport,
}

/// Calculate stays disabled until distances have been saved once.
#[must_use]
pub fn render_calculate_button(enabled: bool, out_of_band: bool) -> Markup {
    html! {
        button id="calculateClub" type="submit" disabled[!enabled]
            hx-swap-oob=[out_of_band.then_some("true")] {
            "Get Recommendation"
        }
    }
}

fn tab_button(tab: Tab, active: Tab) -> Markup {
    let class = if tab == active { "tab-btn active" } else { "tab-btn" };
    html! {
        a class=(class) data-tab=(tab.element_id()) href=(format!("?tab={}", tab.query_value())) {
            (tab.label())
        }
    }
}

fn tab_class(tab: Tab, active: Tab) -> &'static str {
    if tab == active { "tab-content" } else { "tab-content hidden" }
}

fn render_club_inputs(catalog: &ClubCatalog) -> Markup {
    html! {
        div id="clubInputs" {
            @for club in catalog.clubs() {
                div class="club-input" {
                    div class="club-name" {
                        span class="club-emoji" { (club.emoji()) }
                        " "
                        (club.name())
                    }
                    div class="distance-field" {
                        input type="number" id=(club.id()) name=(club.id())
                            value=(club.distance()) min="1" max=(MAX_CARRY_YARDS);
                        span { "yds" }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_index_template(page: &IndexPage<'_>) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/caddie.css";
            title { (page.title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (page.title) }
            nav class="tabs" {
                (tab_button(Tab::Clubs, page.tab))
                (tab_button(Tab::Calculator, page.tab))
            }
            div id=(Tab::Clubs.element_id()) class=(tab_class(Tab::Clubs, page.tab)) {
                form hx-post="clubs" hx-target="#saveMessage" hx-swap="innerHTML" {
                    (render_club_inputs(page.catalog))
                    button id="saveClubs" type="submit" { "Save Distances" }
                }
                div id="saveMessage" {}
            }
            div id=(Tab::Calculator.element_id()) class=(tab_class(Tab::Calculator, page.tab)) {
                div id="weather" hx-get="conditions" hx-trigger="load" hx-swap="innerHTML" {
                    (render_weather(page.conditions))
                }
                form hx-get="recommend" hx-target="#recommendation" hx-swap="outerHTML" {
                    label for="targetDistance" { "Target distance (yds)" }
                    input type="number" id="targetDistance" name="target" min="1"
                        hx-on-input=(CLEAR_RECOMMENDATION_JS);
                    (render_calculate_button(page.saved, false))
                }
                div id="recommendation" class="recommendation-card hidden" {}
            }
        }
    }
}
