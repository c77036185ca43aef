use serde::Serialize;
use std::str::FromStr;

use crate::error::CaddieError;
use crate::model::club::Club;

/// Within this many yards of the club's carry, a normal swing is advised.
pub const NORMAL_SWING_TOLERANCE: i64 = 5;

/// A validated, positive shot distance in yards.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetDistance(u32);

impl TargetDistance {
    /// # Errors
    ///
    /// Will return `Err` if yards is zero
    pub fn new(yards: u32) -> Result<Self, CaddieError> {
        if yards < 1 {
            return Err(CaddieError::InvalidTargetDistance(
                "target distance must be at least 1 yard".into(),
            ));
        }
        Ok(Self(yards))
    }

    #[must_use]
    pub fn yards(self) -> u32 {
        self.0
    }
}

impl FromStr for TargetDistance {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CaddieError::InvalidTargetDistance(
                "target distance is required".into(),
            ));
        }
        let yards = trimmed.parse::<u32>().map_err(|_| {
            CaddieError::InvalidTargetDistance(format!("'{trimmed}' is not a whole number of yards"))
        })?;
        Self::new(yards)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub club: Club,
    pub adjusted_target: i64,
    pub original_target: u32,
    pub absolute_difference: u64,
    pub adjustment_delta: i64,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwingAdvice {
    Harder(u64),
    Softer(u64),
    Normal,
}

impl Recommendation {
    /// Compares the unadjusted target with the club's carry.
    #[must_use]
    pub fn swing_advice(&self) -> SwingAdvice {
        let diff = i64::from(self.original_target) - i64::from(self.club.distance());
        if diff.abs() <= NORMAL_SWING_TOLERANCE {
            SwingAdvice::Normal
        } else if diff > 0 {
            SwingAdvice::Harder(diff.unsigned_abs())
        } else {
            SwingAdvice::Softer(diff.unsigned_abs())
        }
    }
}
