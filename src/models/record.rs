//! Allocation record filed in the ledger.

use serde::{Deserialize, Serialize};

use super::AllotmentDate;

/// One successful allotment: which vehicle and driver serve which area,
/// the fuel needed and the route taken from the origin.
///
/// Records are created once per allotment and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Model of the allotted vehicle.
    pub vehicle_model: String,
    /// Name of the allotted driver.
    pub driver_name: String,
    /// Area the waste is collected from.
    pub area: String,
    /// Fuel required in liters.
    pub fuel_required: f64,
    /// Area names from origin to destination.
    pub route: Vec<String>,
    /// Date the record is filed under.
    pub date: AllotmentDate,
}

impl AllocationRecord {
    /// Route joined with arrows, e.g. `Kanabargi -> Belgaum`.
    pub fn route_line(&self) -> String {
        self.route.join(" -> ")
    }
}
