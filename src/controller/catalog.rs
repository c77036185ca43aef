use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::{debug, info};

use crate::error::CaddieError;
use crate::model::{ClubCatalog, StoredClub};
use crate::storage::{CLUB_DISTANCES_KEY, Storage, get_json, put_json};

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: ClubCatalog,
    /// Whether distances have ever been saved.
    pub saved: bool,
}

/// Default bag with any saved distances merged in.
///
/// # Errors
///
/// Will return `Err` if the slot cannot be read or holds malformed json
pub async fn load_catalog(storage: &dyn Storage) -> Result<LoadedCatalog, CaddieError> {
    let mut catalog = ClubCatalog::default();
    let stored: Option<Vec<StoredClub>> = get_json(storage, CLUB_DISTANCES_KEY).await?;
    let saved = match stored {
        Some(records) => {
            debug!(records = records.len(), "merging saved club distances");
            catalog.merge_stored(&records);
            true
        }
        None => false,
    };
    Ok(LoadedCatalog { catalog, saved })
}

/// Replace the saved record with the catalog's current distances.
///
/// # Errors
///
/// Will return `Err` if the slot cannot be written
pub async fn save_catalog(storage: &dyn Storage, catalog: &ClubCatalog) -> Result<(), CaddieError> {
    put_json(storage, CLUB_DISTANCES_KEY, &catalog.to_stored()).await?;
    info!(clubs = catalog.len(), "club distances saved");
    Ok(())
}

/// Load, apply the editor values and save. Returns the catalog as saved.
///
/// # Errors
///
/// Will return `Err` if the catalog cannot be loaded or saved
pub async fn save_distance_edits<S: BuildHasher>(
    storage: &dyn Storage,
    edits: &HashMap<String, String, S>,
) -> Result<ClubCatalog, CaddieError> {
    let loaded = load_catalog(storage).await?;
    let updated = loaded.catalog.apply_distance_edits(edits);
    save_catalog(storage, &updated).await?;
    Ok(updated)
}
