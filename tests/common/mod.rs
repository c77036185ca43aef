#![allow(dead_code)]

use rusty_caddie::controller::conditions::FixedConditions;
use rusty_caddie::controller::http_handlers::AppState;
use rusty_caddie::model::{CompassPoint, Conditions};
use rusty_caddie::storage::{MemoryStorage, SqliteStorage, Storage};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    // keeps the sqlite file alive for the test
    pub dir: Option<TempDir>,
}

pub fn memory_context() -> TestContext {
    TestContext {
        storage: Arc::new(MemoryStorage::new()),
        dir: None,
    }
}

pub fn sqlite_context() -> Result<TestContext, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage = SqliteStorage::open(dir.path().join("caddie.db"))?;
    Ok(TestContext {
        storage: Arc::new(storage),
        dir: Some(dir),
    })
}

pub fn baseline_conditions() -> Conditions {
    Conditions::new(0.0, CompassPoint::W, 70.0).expect("baseline conditions are valid")
}

pub fn app_state(storage: Arc<dyn Storage>, conditions: Conditions) -> AppState {
    AppState::new(
        storage,
        Arc::new(FixedConditions(conditions)),
        Duration::from_secs(1),
    )
}
