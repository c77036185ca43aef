use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::error::CaddieError;

/// Upper bound accepted from the distance editor.
pub const MAX_CARRY_YARDS: u32 = 400;

/// A club and the carry distance the player expects from it under neutral conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Club {
    id: String,
    name: String,
    emoji: String,
    distance: u32,
}

impl Club {
    /// # Errors
    ///
    /// Will return `Err` if the id or name is blank or the distance is zero
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
        distance: u32,
    ) -> Result<Self, CaddieError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(CaddieError::InvalidClub("club id must not be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(CaddieError::InvalidClub(format!(
                "club '{id}' must have a display name"
            )));
        }
        if distance == 0 {
            return Err(CaddieError::InvalidClub(format!(
                "club '{id}' must have a positive carry distance"
            )));
        }
        Ok(Self {
            id,
            name,
            emoji: emoji.into(),
            distance,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Same club, new carry distance.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the distance is zero
    pub fn with_distance(&self, distance: u32) -> Result<Self, CaddieError> {
        Self::new(
            self.id.clone(),
            self.name.clone(),
            self.emoji.clone(),
            distance,
        )
    }
}

/// Shape of one persisted catalog entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoredClub {
    pub id: String,
    pub name: String,
    pub distance: i64,
}

impl From<&Club> for StoredClub {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id.clone(),
            name: club.name.clone(),
            distance: i64::from(club.distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubCatalog {
    clubs: Vec<Club>,
}

const DEFAULT_CLUBS: [(&str, &str, &str, u32); 13] = [
    ("driver", "Driver", "🏌️", 250),
    ("3wood", "3 Wood", "🪵", 220),
    ("5wood", "5 Wood", "🪵", 200),
    ("3hybrid", "3 Hybrid", "⚡", 190),
    ("4iron", "4 Iron", "⚔️", 180),
    ("5iron", "5 Iron", "⚔️", 170),
    ("6iron", "6 Iron", "⚔️", 160),
    ("7iron", "7 Iron", "⚔️", 150),
    ("8iron", "8 Iron", "⚔️", 140),
    ("9iron", "9 Iron", "⚔️", 130),
    ("pw", "Pitching Wedge", "📐", 120),
    ("sw", "Sand Wedge", "🏖️", 100),
    ("lw", "Lob Wedge", "🎯", 80),
];

impl Default for ClubCatalog {
    fn default() -> Self {
        let clubs = DEFAULT_CLUBS
            .iter()
            .map(|&(id, name, emoji, distance)| Club {
                id: id.to_string(),
                name: name.to_string(),
                emoji: emoji.to_string(),
                distance,
            })
            .collect();
        Self { clubs }
    }
}

impl ClubCatalog {
    /// # Errors
    ///
    /// Will return `Err` if two clubs share an id
    pub fn new(clubs: Vec<Club>) -> Result<Self, CaddieError> {
        let mut seen = HashSet::with_capacity(clubs.len());
        for club in &clubs {
            if !seen.insert(club.id.as_str()) {
                return Err(CaddieError::DuplicateClubId(club.id.clone()));
            }
        }
        Ok(Self { clubs })
    }

    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.id == id)
    }

    /// Overwrite distances from a persisted record, matching by id.
    /// Unknown ids are ignored; clubs absent from the record keep their distance.
    pub fn merge_stored(&mut self, stored: &[StoredClub]) {
        let index: HashMap<&str, usize, RandomState> = self
            .clubs
            .iter()
            .enumerate()
            .map(|(i, club)| (club.id.as_str(), i))
            .collect();
        let mut updates = Vec::new();
        for record in stored {
            let Some(&i) = index.get(record.id.as_str()) else {
                continue;
            };
            match u32::try_from(record.distance) {
                Ok(distance) if distance > 0 => updates.push((i, distance)),
                _ => warn!(
                    club = %record.id,
                    distance = record.distance,
                    "ignoring stored club with non-positive distance"
                ),
            }
        }
        for (i, distance) in updates {
            self.clubs[i].distance = distance;
        }
    }

    /// Apply raw editor values keyed by club id. A value that is missing,
    /// not an integer, below 1 or above [`MAX_CARRY_YARDS`] keeps the current distance.
    #[must_use]
    pub fn apply_distance_edits<S: std::hash::BuildHasher>(
        &self,
        edits: &HashMap<String, String, S>,
    ) -> Self {
        let clubs = self
            .clubs
            .iter()
            .map(|club| {
                edits
                    .get(&club.id)
                    .and_then(|raw| parse_yards(raw))
                    .and_then(|distance| club.with_distance(distance).ok())
                    .unwrap_or_else(|| club.clone())
            })
            .collect();
        Self { clubs }
    }

    #[must_use]
    pub fn to_stored(&self) -> Vec<StoredClub> {
        self.clubs.iter().map(StoredClub::from).collect()
    }
}

/// Parse a yardage typed by the user, `None` when out of the editable range.
#[must_use]
pub fn parse_yards(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|yards| (1..=MAX_CARRY_YARDS).contains(yards))
}
