//! Engine configuration.
//!
//! All fields have defaults, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "average_speed_kmh": 35.0, "ledger_path": "ledger.txt" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::fleet::DriverPolicy;

/// Average road speed assumed for travel-time estimates.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;

/// File the ledger is flushed to and dumped from.
pub const DEFAULT_LEDGER_PATH: &str = "dateDATA.txt";

/// Tunables for the allotment engine and the operator console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Average speed in km/h used to turn distance into travel time.
    pub average_speed_kmh: f64,
    /// Area index every route starts from.
    pub origin: usize,
    /// Ledger text file.
    pub ledger_path: PathBuf,
    /// Driver selection on allotment.
    pub driver_policy: DriverPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            origin: 0,
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            driver_policy: DriverPolicy::FirstOnRoster,
        }
    }
}

impl EngineConfig {
    /// Reads overrides from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FleetError::file(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parses overrides from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| FleetError::Config(format!("cannot parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a non-positive or non-finite average speed.
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(FleetError::Config(format!(
                "average speed must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        Ok(())
    }
}
