//! Driver selection policy.

use serde::{Deserialize, Serialize};

use super::Fleet;

/// Chooses the driver that accompanies an allotted vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverPolicy {
    /// Always the driver at roster position 0, whether or not already
    /// committed.
    #[default]
    FirstOnRoster,
    /// First driver not yet committed.
    FirstAvailable,
}

impl DriverPolicy {
    /// Roster position of the chosen driver, or `None` if the policy finds
    /// no driver.
    pub fn pick(self, fleet: &Fleet) -> Option<usize> {
        match self {
            DriverPolicy::FirstOnRoster => (!fleet.drivers().is_empty()).then_some(0),
            DriverPolicy::FirstAvailable => fleet.drivers().iter().position(|d| d.is_available()),
        }
    }
}
