use chrono::Utc;
use maud::{Markup, html};

use crate::model::{ConditionsReport, ConditionsSource, format_reading, format_time_ago};

#[must_use]
pub fn wind_text(report: &ConditionsReport) -> String {
    format!("{} mph", format_reading(report.conditions.wind_speed()))
}

#[must_use]
pub fn temperature_text(report: &ConditionsReport) -> String {
    format!("{}°F", format_reading(report.conditions.temperature()))
}

#[must_use]
pub fn render_weather(report: &ConditionsReport) -> Markup {
    let source = match report.source {
        ConditionsSource::Provider => "Live",
        ConditionsSource::Fallback => "Default",
    };
    let age = format_time_ago(Utc::now() - report.observed_at);
    html! {
        div class="weather-info" {
            div class="weather-item" {
                span class="weather-label" { "Wind" }
                div id="windInfo" class="wind-display" {
                    span class="wind-speed" { (wind_text(report)) }
                    " "
                    span class="wind-direction" { (report.conditions.wind_direction().as_str()) }
                }
            }
            div class="weather-item" {
                span class="weather-label" { "Temp" }
                div id="tempInfo" { (temperature_text(report)) }
            }
            div class="weather-source" { (source) " conditions, " (age) " ago" }
        }
    }
}
