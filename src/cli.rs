use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

use crate::args::ClubEdit;
use crate::controller::catalog::{load_catalog, save_catalog};
use crate::controller::conditions::{ConditionsProvider, resolve_conditions};
use crate::model::{ClubCatalog, Conditions, ConditionsSource, TargetDistance};
use crate::recommend::compute_recommendation;
use crate::storage::Storage;
use crate::view::recommendation::{adjustment_text, conditions_text, swing_advice_text};

/// Print every club with its carry distance.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or the output cannot be written.
pub async fn run_clubs(storage: &dyn Storage, out: &mut impl Write) -> Result<()> {
    let loaded = load_catalog(storage).await.context("load club catalog")?;
    write_catalog(&loaded.catalog, out)?;
    if !loaded.saved {
        writeln!(out, "(default distances, nothing saved yet)")?;
    }
    Ok(())
}

/// Apply `ID=YARDS` edits on top of the saved catalog and save it.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, updated or saved.
pub async fn run_set(
    storage: &dyn Storage,
    edits: &[ClubEdit],
    out: &mut impl Write,
) -> Result<ClubCatalog> {
    let mut catalog = load_catalog(storage)
        .await
        .context("load club catalog")?
        .catalog;
    for edit in edits {
        let club = catalog
            .get(&edit.id)
            .with_context(|| format!("unknown club id {}", edit.id))?
            .with_distance(edit.yards)?;
        let clubs = catalog
            .clubs()
            .iter()
            .map(|c| if c.id() == club.id() { club.clone() } else { c.clone() })
            .collect();
        catalog = ClubCatalog::new(clubs)?;
    }
    save_catalog(storage, &catalog)
        .await
        .context("save club catalog")?;
    writeln!(out, "Club distances saved successfully!")?;
    write_catalog(&catalog, out)?;
    Ok(catalog)
}

/// Recommend a club, using `conditions` when given or else asking the provider.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or is empty.
pub async fn run_recommend(
    storage: &dyn Storage,
    provider: &dyn ConditionsProvider,
    weather_timeout: Duration,
    target: TargetDistance,
    conditions: Option<Conditions>,
    out: &mut impl Write,
) -> Result<()> {
    let loaded = load_catalog(storage).await.context("load club catalog")?;
    let (conditions, source) = match conditions {
        Some(c) => (c, "given"),
        None => {
            let report = resolve_conditions(provider, weather_timeout).await;
            let source = match report.source {
                ConditionsSource::Provider => "simulated",
                ConditionsSource::Fallback => "default",
            };
            (report.conditions, source)
        }
    };
    let rec = compute_recommendation(target, &conditions, loaded.catalog.clubs())?;

    writeln!(out, "Conditions ({source}): {}", conditions_text(&conditions))?;
    writeln!(
        out,
        "Target {} yds, play it as {} yds",
        rec.original_target, rec.adjusted_target
    )?;
    writeln!(
        out,
        "Recommended club: {} {} ({} yds, {} off)",
        rec.club.emoji(),
        rec.club.name(),
        rec.club.distance(),
        rec.absolute_difference
    )?;
    writeln!(out, "{}", swing_advice_text(rec.swing_advice()))?;
    if let Some(note) = adjustment_text(&rec) {
        writeln!(out, "{note}")?;
    }
    Ok(())
}

fn write_catalog(catalog: &ClubCatalog, out: &mut impl Write) -> Result<()> {
    for club in catalog.clubs() {
        writeln!(
            out,
            "{:<8} {:<16} {:>3} yds",
            club.id(),
            club.name(),
            club.distance()
        )?;
    }
    Ok(())
}
