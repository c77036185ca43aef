mod common;

use rusty_caddie::args::ClubEdit;
use rusty_caddie::cli::{run_clubs, run_recommend, run_set};
use rusty_caddie::controller::conditions::{FixedConditions, SimulatedWeather};
use rusty_caddie::model::{CompassPoint, Conditions, TargetDistance};
use std::error::Error;
use std::time::Duration;

#[tokio::test]
async fn test4_clubs_lists_defaults() -> Result<(), Box<dyn Error>> {
    let ctx = common::memory_context();
    let mut out = Vec::new();
    run_clubs(ctx.storage.as_ref(), &mut out).await?;
    let text = String::from_utf8(out)?;
    assert_eq!(text.lines().count(), 14);
    assert!(text.lines().next().unwrap().starts_with("driver"));
    assert!(text.contains("nothing saved yet"));
    Ok(())
}

#[tokio::test]
async fn test4_set_then_clubs_shows_saved_distance() -> Result<(), Box<dyn Error>> {
    let ctx = common::sqlite_context()?;
    let mut out = Vec::new();
    let edits = vec![
        ClubEdit {
            id: "pw".into(),
            yards: 118,
        },
        ClubEdit {
            id: "driver".into(),
            yards: 262,
        },
    ];
    let catalog = run_set(ctx.storage.as_ref(), &edits, &mut out).await?;
    assert_eq!(catalog.get("pw").unwrap().distance(), 118);

    let mut out = Vec::new();
    run_clubs(ctx.storage.as_ref(), &mut out).await?;
    let text = String::from_utf8(out)?;
    assert!(!text.contains("nothing saved yet"));
    let pw_line = text.lines().find(|l| l.starts_with("pw ")).unwrap();
    assert!(pw_line.contains("118 yds"));
    Ok(())
}

#[tokio::test]
async fn test4_recommend_with_given_conditions() -> Result<(), Box<dyn Error>> {
    let ctx = common::memory_context();
    let provider = FixedConditions(Conditions::FALLBACK);
    let mut out = Vec::new();
    run_recommend(
        ctx.storage.as_ref(),
        &provider,
        Duration::from_secs(1),
        TargetDistance::new(150)?,
        Some(Conditions::new(0.0, CompassPoint::N, 70.0)?),
        &mut out,
    )
    .await?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("Conditions (given)"));
    assert!(text.contains("Recommended club: ⚔️ 7 Iron (150 yds, 0 off)"));
    assert!(text.contains("Normal swing should be perfect"));
    assert!(!text.contains("Adjusted for conditions"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test4_recommend_falls_back_when_weather_is_slow() -> Result<(), Box<dyn Error>> {
    let ctx = common::memory_context();
    let slow = SimulatedWeather::seeded(Duration::from_secs(30), 1);
    let mut out = Vec::new();
    run_recommend(
        ctx.storage.as_ref(),
        &slow,
        Duration::from_millis(250),
        TargetDistance::new(150)?,
        None,
        &mut out,
    )
    .await?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("Conditions (default): Wind: 7mph W • Temp: 68°F"));
    assert!(text.contains("play it as 153 yds"));
    assert!(text.contains("Adjusted for conditions: 3 yards longer"));
    Ok(())
}
