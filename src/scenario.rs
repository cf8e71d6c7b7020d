//! Startup data: road network, fleet rosters and pending requests.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::fleet::{Fleet, RequestQueue};
use crate::models::{Driver, Vehicle, WasteRequest};
use crate::network::{Road, RoadNetwork, BELGAUM_AREAS, BELGAUM_ROADS};

/// Everything the engine needs at startup, in serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Area names; position is the network index.
    pub areas: Vec<String>,
    /// One adjacency list per area.
    pub roads: Vec<Vec<Road>>,
    /// Vehicle roster.
    pub vehicles: Vec<Vehicle>,
    /// Driver roster.
    pub drivers: Vec<Driver>,
    /// Pending requests.
    pub requests: Vec<WasteRequest>,
}

impl Scenario {
    /// The built-in Belgaum data set: 25 areas, 10 vehicles, 5 drivers and
    /// one request per published ordinal.
    pub fn belgaum() -> Self {
        let areas = BELGAUM_AREAS.iter().map(|s| s.to_string()).collect();
        let roads = BELGAUM_ROADS
            .iter()
            .map(|list| list.iter().map(|&(to, km)| Road::new(to, km)).collect())
            .collect();

        let vehicles = vec![
            Vehicle::new("Tata Ace", 1000, 13.0),
            Vehicle::new("Mahindra Pickup", 2000, 12.0),
            Vehicle::new("Ashok Leyland Dost", 3000, 14.0),
            Vehicle::new("BharatBenz 1160", 4000, 11.0),
            Vehicle::new("Eicher 950", 6000, 12.0),
            Vehicle::new("Tata Ace Hybrid", 9000, 11.0),
            Vehicle::new("Tata Force", 10000, 10.0),
            Vehicle::new("Leyland Bada Dost", 11000, 9.0),
            Vehicle::new("MAN 1600", 12000, 8.0),
            Vehicle::new("Tata 1630", 14000, 7.0),
        ];

        let drivers = vec![
            Driver::new("Abhi", 30, "Gokak"),
            Driver::new("Arun", 32, "Hubli"),
            Driver::new("Akash", 25, "Kanabargi"),
            Driver::new("Gagan", 28, "Sambre"),
            Driver::new("Venki", 26, "Suldal"),
        ];

        // The second request names the bus stand, which has no node in the
        // road network.
        let requests = BELGAUM_AREAS
            .iter()
            .enumerate()
            .map(|(i, &area)| {
                let area = if i == 1 { "BelgaumCBT" } else { area };
                WasteRequest::new(area, 500 * (i as i32 + 1))
            })
            .collect();

        Self {
            areas,
            roads,
            vehicles,
            drivers,
            requests,
        }
    }

    /// Loads a scenario from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FleetError::file(path, e))?;
        serde_json::from_str(&text)
            .map_err(|e| FleetError::Config(format!("cannot parse scenario: {e}")))
    }

    /// Splits the scenario into the network, fleet and request queue.
    ///
    /// Fails if the road table is inconsistent with the area list or a
    /// vehicle has non-positive mileage.
    pub fn build(self) -> Result<(RoadNetwork, Fleet, RequestQueue)> {
        let network = RoadNetwork::new(&self.areas, self.roads)?;
        if let Some(v) = self
            .vehicles
            .iter()
            .find(|v| !(v.mileage().is_finite() && v.mileage() > 0.0))
        {
            return Err(FleetError::Config(format!(
                "vehicle '{}' has non-positive mileage {}",
                v.model(),
                v.mileage()
            )));
        }
        let fleet = Fleet::new(self.vehicles, self.drivers);
        Ok((network, fleet, RequestQueue::new(self.requests)))
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::belgaum()
    }
}
