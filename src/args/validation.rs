use regex::Regex;
use std::sync::LazyLock;

use super::types::{Args, ClubEdit, Command};
use crate::model::{ClubCatalog, CompassPoint, Conditions, TargetDistance, parse_yards};

static CLUB_EDIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_-]+)\s*=\s*(\S+)\s*$").expect("club edit pattern is valid")
});

/// # Errors
///
/// Will return `Err` if the value is not `ID=YARDS` for a known club and a yardage in 1..=400
pub fn check_club_edit(value: &str) -> Result<ClubEdit, String> {
    let caps = CLUB_EDIT
        .captures(value)
        .ok_or_else(|| format!("'{value}' is not in the form ID=YARDS."))?;
    let id = caps[1].to_ascii_lowercase();
    if ClubCatalog::default().get(&id).is_none() {
        let known: Vec<String> = ClubCatalog::default()
            .clubs()
            .iter()
            .map(|club| club.id().to_string())
            .collect();
        return Err(format!(
            "Unknown club id '{id}'. Expected one of: {}",
            known.join(", ")
        ));
    }
    let yards = parse_yards(&caps[2])
        .ok_or_else(|| format!("Distance for '{id}' must be a whole number from 1 to 400."))?;
    Ok(ClubEdit { id, yards })
}

/// # Errors
///
/// Will return `Err` if the value is not a whole number of at least 1
pub fn check_target_distance(value: &str) -> Result<TargetDistance, String> {
    value.parse::<TargetDistance>().map_err(|e| e.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not one of the eight compass points
pub fn check_compass_point(value: &str) -> Result<CompassPoint, String> {
    value.parse::<CompassPoint>().map_err(|e| e.to_string())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the timeout is zero or the explicit conditions are invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.weather_timeout_ms == 0 {
            return Err("weather timeout must be greater than zero".to_string());
        }
        if let Command::Recommend {
            wind_speed,
            wind_direction,
            temperature,
            ..
        } = &self.command
        {
            explicit_conditions(*wind_speed, *wind_direction, *temperature)?;
        }
        Ok(())
    }
}

/// Readings given on the command line, with any missing ones taken from the default
/// conditions. `None` when no reading was given at all.
///
/// # Errors
///
/// Will return `Err` if a reading is out of range
pub fn explicit_conditions(
    wind_speed: Option<f64>,
    wind_direction: Option<CompassPoint>,
    temperature: Option<f64>,
) -> Result<Option<Conditions>, String> {
    if wind_speed.is_none() && wind_direction.is_none() && temperature.is_none() {
        return Ok(None);
    }
    let fallback = Conditions::FALLBACK;
    Conditions::new(
        wind_speed.unwrap_or(fallback.wind_speed()),
        wind_direction.unwrap_or(fallback.wind_direction()),
        temperature.unwrap_or(fallback.temperature()),
    )
    .map(Some)
    .map_err(|e| e.to_string())
}
