//! Club selection against a weather-adjusted target.
//!
//! Everything here is a pure function of its arguments: the catalog and the
//! conditions snapshot are passed in, nothing is read from shared state.

use crate::error::CaddieError;
use crate::model::{Club, Conditions, Recommendation, TargetDistance};

/// Temperature at which no correction is applied, in °F.
pub const BASELINE_TEMPERATURE_F: f64 = 70.0;
/// Yards added per 10 °F above baseline.
pub const YARDS_PER_TEN_DEGREES: f64 = 2.0;
/// Yards added per mph of wind.
pub const YARDS_PER_MPH_WIND: f64 = 0.5;

/// Effective distance to play for the given conditions.
///
/// Wind is always treated as a headwind; `wind_direction` is not consulted
/// because there is no shot direction to compare it with.
#[must_use]
pub fn adjust_for_conditions(target_distance: TargetDistance, conditions: &Conditions) -> i64 {
    let temp_adjustment = (conditions.temperature() - BASELINE_TEMPERATURE_F) / 10.0
        * YARDS_PER_TEN_DEGREES;
    let wind_adjustment = conditions.wind_speed() * YARDS_PER_MPH_WIND;
    let adjusted = f64::from(target_distance.yards()) + temp_adjustment + wind_adjustment;
    round_half_up(adjusted)
}

/// Largest magnitude an adjusted target is reported with; every integer up to
/// it is exact in an `f64`.
pub const MAX_ADJUSTED_YARDS: i64 = 1 << 53;

// .5 goes toward +inf, so -2.5 -> -2
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn round_half_up(value: f64) -> i64 {
    let limit = MAX_ADJUSTED_YARDS as f64;
    (value + 0.5).floor().clamp(-limit, limit) as i64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubMatch<'a> {
    pub club: &'a Club,
    pub absolute_difference: u64,
}

/// Closest club by carry distance; ties go to the earlier club.
///
/// # Errors
///
/// Will return `Err` if the catalog is empty
pub fn select_club(catalog: &[Club], adjusted_target: i64) -> Result<ClubMatch<'_>, CaddieError> {
    let (first, rest) = catalog.split_first().ok_or(CaddieError::EmptyCatalog)?;
    let mut best = ClubMatch {
        club: first,
        absolute_difference: distance_gap(first, adjusted_target),
    };
    for club in rest {
        let diff = distance_gap(club, adjusted_target);
        if diff < best.absolute_difference {
            best = ClubMatch {
                club,
                absolute_difference: diff,
            };
        }
    }
    Ok(best)
}

fn distance_gap(club: &Club, adjusted_target: i64) -> u64 {
    i64::from(club.distance())
        .saturating_sub(adjusted_target)
        .unsigned_abs()
}

/// # Errors
///
/// Will return `Err` if the catalog is empty
pub fn compute_recommendation(
    target_distance: TargetDistance,
    conditions: &Conditions,
    catalog: &[Club],
) -> Result<Recommendation, CaddieError> {
    let adjusted_target = adjust_for_conditions(target_distance, conditions);
    let best = select_club(catalog, adjusted_target)?;
    Ok(Recommendation {
        club: best.club.clone(),
        adjusted_target,
        original_target: target_distance.yards(),
        absolute_difference: best.absolute_difference,
        adjustment_delta: adjusted_target.saturating_sub(i64::from(target_distance.yards())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClubCatalog, CompassPoint};

    fn target(yards: u32) -> TargetDistance {
        TargetDistance::new(yards).unwrap()
    }

    fn calm(temperature: f64, wind_speed: f64) -> Conditions {
        Conditions::new(wind_speed, CompassPoint::W, temperature).unwrap()
    }

    fn club(id: &str, distance: u32) -> Club {
        Club::new(id, id.to_uppercase(), "", distance).unwrap()
    }

    #[test]
    fn baseline_conditions_leave_target_alone() {
        assert_eq!(adjust_for_conditions(target(100), &calm(70.0, 0.0)), 100);
    }

    #[test]
    fn ten_degrees_warmer_adds_two_yards() {
        assert_eq!(adjust_for_conditions(target(100), &calm(80.0, 0.0)), 102);
    }

    #[test]
    fn ten_mph_wind_adds_five_yards() {
        assert_eq!(adjust_for_conditions(target(100), &calm(70.0, 10.0)), 105);
    }

    #[test]
    fn cold_air_shortens_and_halves_round_up() {
        // 100 - 0.4 + 0.5 = 100.1
        assert_eq!(adjust_for_conditions(target(100), &calm(68.0, 1.0)), 100);
        // 100 - 2 + 0.5 = 98.5
        assert_eq!(adjust_for_conditions(target(100), &calm(60.0, 1.0)), 99);
        // 1 - 3.5 = -2.5
        assert_eq!(adjust_for_conditions(target(1), &calm(52.5, 0.0)), -2);
    }

    #[test]
    fn extreme_readings_stay_in_range() {
        assert_eq!(
            adjust_for_conditions(target(150), &calm(-1e20, 0.0)),
            -MAX_ADJUSTED_YARDS
        );
        assert_eq!(
            adjust_for_conditions(target(150), &calm(f64::MAX, f64::MAX)),
            MAX_ADJUSTED_YARDS
        );
    }

    #[test]
    fn frozen_air_takes_the_shortest_club() {
        let catalog = ClubCatalog::default();
        let rec = compute_recommendation(target(150), &calm(-1e20, 0.0), catalog.clubs()).unwrap();
        assert_eq!(rec.club.id(), "lw");
        assert_eq!(rec.adjusted_target, -MAX_ADJUSTED_YARDS);
        assert_eq!(rec.adjustment_delta, -MAX_ADJUSTED_YARDS - 150);
        assert_eq!(rec.absolute_difference, (MAX_ADJUSTED_YARDS + 80).unsigned_abs());
    }

    #[test]
    fn gale_takes_the_driver() {
        let catalog = ClubCatalog::default();
        let rec = compute_recommendation(target(150), &calm(70.0, 1e300), catalog.clubs()).unwrap();
        assert_eq!(rec.club.id(), "driver");
        assert_eq!(rec.adjusted_target, MAX_ADJUSTED_YARDS);
    }

    #[test]
    fn gaps_saturate_instead_of_overflowing() {
        let catalog = [club("a", 100), club("b", 150)];
        let best = select_club(&catalog, i64::MIN).unwrap();
        assert_eq!(best.club.id(), "a");
        assert_eq!(best.absolute_difference, i64::MAX.unsigned_abs());
    }

    #[test]
    fn wind_direction_does_not_change_the_adjustment() {
        let readings: Vec<i64> = CompassPoint::ALL
            .into_iter()
            .map(|dir| {
                let c = Conditions::new(12.0, dir, 75.0).unwrap();
                adjust_for_conditions(target(150), &c)
            })
            .collect();
        assert!(readings.iter().all(|&r| r == readings[0]));
    }

    #[test]
    fn adjustment_is_deterministic() {
        let c = calm(83.0, 9.0);
        assert_eq!(
            adjust_for_conditions(target(173), &c),
            adjust_for_conditions(target(173), &c)
        );
    }

    #[test]
    fn picks_nearest_club() {
        let catalog = [club("a", 100), club("b", 150)];
        let best = select_club(&catalog, 120).unwrap();
        assert_eq!(best.club.id(), "a");
        assert_eq!(best.absolute_difference, 20);
    }

    #[test]
    fn ties_go_to_first_club() {
        let catalog = [club("a", 100), club("b", 100)];
        assert_eq!(select_club(&catalog, 90).unwrap().club.id(), "a");

        let catalog = [club("a", 100), club("b", 120)];
        assert_eq!(select_club(&catalog, 110).unwrap().club.id(), "a");
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert_eq!(select_club(&[], 100), Err(CaddieError::EmptyCatalog));
        assert_eq!(
            compute_recommendation(target(100), &calm(70.0, 0.0), &[]),
            Err(CaddieError::EmptyCatalog)
        );
    }

    #[test]
    fn seven_iron_for_one_fifty_on_a_calm_day() {
        let catalog = ClubCatalog::default();
        let rec = compute_recommendation(target(150), &calm(70.0, 0.0), catalog.clubs()).unwrap();
        assert_eq!(rec.club.name(), "7 Iron");
        assert_eq!(rec.absolute_difference, 0);
        assert_eq!(rec.adjustment_delta, 0);
        assert_eq!(rec.adjusted_target, 150);
        assert_eq!(rec.original_target, 150);
    }

    #[test]
    fn fallback_weather_pushes_one_fifty_up_a_club() {
        // 150 - 0.4 + 3.5 = 153.1
        let catalog = ClubCatalog::default();
        let rec =
            compute_recommendation(target(150), &Conditions::FALLBACK, catalog.clubs()).unwrap();
        assert_eq!(rec.adjusted_target, 153);
        assert_eq!(rec.adjustment_delta, 3);
        assert_eq!(rec.club.id(), "7iron");
        assert_eq!(rec.absolute_difference, 3);
    }
}
