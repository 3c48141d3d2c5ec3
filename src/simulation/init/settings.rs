use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::random::{RandomSource, DEFAULT_SEED};
use crate::temperature::{AMBIENT_TEMP, TEMP_MAX, TEMP_MIN};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// World configuration, loadable from JSON (camelCase keys, all optional)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Temperature new and vacated cells start at, and what cooling tends toward
    pub ambient_temperature: f32,
    pub seed: u32,
    pub perf_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ambient_temperature: AMBIENT_TEMP,
            seed: DEFAULT_SEED,
            perf_enabled: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ambient temperature {0} outside [{min}, {max}]", min = TEMP_MIN, max = TEMP_MAX)]
    AmbientOutOfRange(f32),
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!(
            "settings loaded: ambient={} seed={} perf={}",
            settings.ambient_temperature,
            settings.seed,
            settings.perf_enabled
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let t = self.ambient_temperature;
        if !t.is_finite() || !(TEMP_MIN..=TEMP_MAX).contains(&t) {
            return Err(SettingsError::AmbientOutOfRange(t));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Ambient temperature a world is built with: out-of-range values are
    /// clamped, non-finite ones fall back to the default
    pub(super) fn effective_ambient(&self) -> f32 {
        let t = self.ambient_temperature;
        if let Err(err) = self.validate() {
            log::warn!("{}; adjusting", err);
            if !t.is_finite() {
                return AMBIENT_TEMP;
            }
        }
        t.clamp(TEMP_MIN, TEMP_MAX)
    }
}

pub(super) fn enable_perf_metrics<R: RandomSource>(world: &mut WorldCore<R>, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R: RandomSource>(world: &WorldCore<R>) -> PerfStats {
    world.perf_stats.clone()
}

/// Non-finite values are ignored; the rest are clamped to the frame range
pub(super) fn set_ambient_temperature<R: RandomSource>(world: &mut WorldCore<R>, temp: f32) {
    if !temp.is_finite() {
        log::warn!("ignoring non-finite ambient temperature {}", temp);
        return;
    }
    world.ambient_temperature = temp.clamp(TEMP_MIN, TEMP_MAX);
}

pub(super) fn get_ambient_temperature<R: RandomSource>(world: &WorldCore<R>) -> f32 {
    world.ambient_temperature
}
