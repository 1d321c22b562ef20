//! Gesture configuration
//!
//! Everything tunable about recognition and dispatch, loadable from a JSON
//! file. Missing fields fall back to their defaults.

use crate::action::dispatcher::ActionTable;
use crate::capture::input::types::TriggerButton;
use crate::processing::classifier::ToleranceWindow;
use crate::session::error::{GestureError, GestureResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest accepted `minSamples`; a hook sees a few hundred moves per second
pub const MAX_MIN_SAMPLES: usize = 10_000;

/// Gesture recognition and dispatch settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Half-width of each compass window in degrees
    pub tolerance_degrees: f64,
    /// Fewest recorded points a gesture needs before it is classified
    pub min_samples: usize,
    /// Button held while drawing
    pub trigger: TriggerButton,
    /// Pause between the up and down halves of a synthetic key tap
    pub key_tap_delay_ms: u64,
    /// How long `start()` waits for the hook to be installed
    pub start_timeout_ms: u64,
    /// How long `stop()` waits for the hook thread to exit
    pub stop_timeout_ms: u64,
    /// Direction -> key bindings
    pub actions: ActionTable,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tolerance_degrees: ToleranceWindow::DEFAULT_DEGREES,
            min_samples: 15,
            trigger: TriggerButton::Right,
            key_tap_delay_ms: 10,
            start_timeout_ms: 1000,
            stop_timeout_ms: 1000,
            actions: ActionTable::default(),
        }
    }
}

impl GestureConfig {
    /// Read and validate a JSON config file
    pub fn load(path: &Path) -> GestureResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GestureConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::info!("Loaded gesture config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> GestureResult<()> {
        if !(self.tolerance_degrees > 0.0 && self.tolerance_degrees < 180.0) {
            return Err(GestureError::Configuration(format!(
                "toleranceDegrees must be in (0, 180), got {}",
                self.tolerance_degrees
            )));
        }
        // A single point has no direction
        if !(2..=MAX_MIN_SAMPLES).contains(&self.min_samples) {
            return Err(GestureError::Configuration(format!(
                "minSamples must be in 2..={}, got {}",
                MAX_MIN_SAMPLES, self.min_samples
            )));
        }
        if self.tolerance_degrees > 22.5 {
            tracing::warn!(
                "toleranceDegrees {} overlaps neighbouring directions; earlier compass directions win",
                self.tolerance_degrees
            );
        }
        Ok(())
    }

    pub fn tolerance(&self) -> ToleranceWindow {
        ToleranceWindow::new(self.tolerance_degrees)
    }

    pub fn key_tap_delay(&self) -> Duration {
        Duration::from_millis(self.key_tap_delay_ms)
    }

    pub fn start_timeout(&self) -> Duration {
        Duration::from_millis(self.start_timeout_ms)
    }

    pub fn stop_timeout(&self) -> Duration {
        Duration::from_millis(self.stop_timeout_ms)
    }
}
