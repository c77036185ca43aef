use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::CaddieError;
use crate::model::{CompassPoint, Conditions, ConditionsReport, ConditionsSource};

pub const DEFAULT_WEATHER_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_WEATHER_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can produce a weather snapshot, eventually.
#[async_trait]
pub trait ConditionsProvider: Send + Sync {
    async fn current_conditions(&self) -> Result<Conditions, CaddieError>;
}

/// Always the same snapshot.
pub struct FixedConditions(pub Conditions);

#[async_trait]
impl ConditionsProvider for FixedConditions {
    async fn current_conditions(&self) -> Result<Conditions, CaddieError> {
        Ok(self.0)
    }
}

/// Random but plausible weather after a short delay.
pub struct SimulatedWeather {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedWeather {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[must_use]
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl ConditionsProvider for SimulatedWeather {
    async fn current_conditions(&self) -> Result<Conditions, CaddieError> {
        tokio::time::sleep(self.delay).await;
        let (wind_speed, direction, temperature) = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| CaddieError::ConditionsUnavailable(e.to_string()))?;
            let wind_speed: u32 = rng.gen_range(2..=16);
            let direction = CompassPoint::ALL[rng.gen_range(0..CompassPoint::ALL.len())];
            let temperature: u32 = rng.gen_range(50..=89);
            (wind_speed, direction, temperature)
        };
        Conditions::new(f64::from(wind_speed), direction, f64::from(temperature))
    }
}

/// Ask the provider, falling back to [`Conditions::FALLBACK`] on failure or timeout.
pub async fn resolve_conditions(
    provider: &dyn ConditionsProvider,
    timeout: Duration,
) -> ConditionsReport {
    let outcome = match tokio::time::timeout(timeout, provider.current_conditions()).await {
        Ok(result) => result,
        Err(_) => Err(CaddieError::ConditionsUnavailable(format!(
            "no conditions after {} ms",
            timeout.as_millis()
        ))),
    };
    match outcome {
        Ok(conditions) => {
            debug!(?conditions, "conditions from provider");
            ConditionsReport {
                conditions,
                source: ConditionsSource::Provider,
                observed_at: Utc::now(),
            }
        }
        Err(e) => {
            warn!(error = %e, "using fallback conditions");
            ConditionsReport::fallback()
        }
    }
}
