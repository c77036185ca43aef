use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaddieError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompassPoint {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        CompassPoint::ALL
            .into_iter()
            .find(|point| point.as_str() == upper)
            .ok_or_else(|| CaddieError::InvalidConditions(format!("unknown wind direction '{s}'")))
    }
}

/// Weather snapshot a recommendation is computed against.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Conditions {
    wind_speed: f64,
    wind_direction: CompassPoint,
    temperature: f64,
}

impl Conditions {
    /// Used whenever no provider data is available.
    pub const FALLBACK: Conditions = Conditions {
        wind_speed: 7.0,
        wind_direction: CompassPoint::W,
        temperature: 68.0,
    };

    /// # Errors
    ///
    /// Will return `Err` if wind speed is negative or either number is not finite
    pub fn new(
        wind_speed: f64,
        wind_direction: CompassPoint,
        temperature: f64,
    ) -> Result<Self, CaddieError> {
        if !wind_speed.is_finite() || wind_speed < 0.0 {
            return Err(CaddieError::InvalidConditions(format!(
                "wind speed must be a non-negative number, got {wind_speed}"
            )));
        }
        if !temperature.is_finite() {
            return Err(CaddieError::InvalidConditions(format!(
                "temperature must be a finite number, got {temperature}"
            )));
        }
        Ok(Self {
            wind_speed,
            wind_direction,
            temperature,
        })
    }

    #[must_use]
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    #[must_use]
    pub fn wind_direction(&self) -> CompassPoint {
        self.wind_direction
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionsSource {
    Provider,
    Fallback,
}

/// A snapshot plus where and when it came from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConditionsReport {
    pub conditions: Conditions,
    pub source: ConditionsSource,
    pub observed_at: DateTime<Utc>,
}

impl ConditionsReport {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            conditions: Conditions::FALLBACK,
            source: ConditionsSource::Fallback,
            observed_at: Utc::now(),
        }
    }
}
