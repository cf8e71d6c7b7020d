//! Vehicle and driver roster.

use serde::{Deserialize, Serialize};

use crate::models::{Commitment, Driver, Vehicle};

/// Vehicles and drivers in roster order.
///
/// Commitment only moves from available to committed through
/// [`commit_vehicle`](Fleet::commit_vehicle) and
/// [`commit_driver`](Fleet::commit_driver). The release calls are an
/// optional extension that nothing in the allotment path uses.
///
/// # Examples
///
/// ```
/// use u_fleet::fleet::Fleet;
/// use u_fleet::models::{Driver, Vehicle};
///
/// let mut fleet = Fleet::new(
///     vec![Vehicle::new("Tata Ace", 1000, 13.0), Vehicle::new("Eicher 950", 6000, 12.0)],
///     vec![Driver::new("Abhi", 30, "Gokak")],
/// );
/// assert_eq!(fleet.first_eligible_vehicle(5000), Some(1));
/// fleet.commit_vehicle(1);
/// assert_eq!(fleet.first_eligible_vehicle(5000), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
}

impl Fleet {
    /// Creates a fleet from rosters.
    pub fn new(vehicles: Vec<Vehicle>, drivers: Vec<Driver>) -> Self {
        Self { vehicles, drivers }
    }

    /// Vehicles in roster order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Drivers in roster order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Position of the first vehicle, in roster order, with capacity for
    /// `quantity` that has not been allotted.
    pub fn first_eligible_vehicle(&self, quantity: i32) -> Option<usize> {
        self.vehicles.iter().position(|v| v.can_serve(quantity))
    }

    /// Vehicles not yet allotted.
    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(|v| v.is_available())
    }

    /// Drivers not yet allotted.
    pub fn available_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter().filter(|d| d.is_available())
    }

    /// Marks the vehicle at `index` committed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn commit_vehicle(&mut self, index: usize) {
        self.vehicles[index].set_state(Commitment::Committed);
    }

    /// Marks the driver at `index` committed. Committing an already
    /// committed driver is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn commit_driver(&mut self, index: usize) {
        self.drivers[index].set_state(Commitment::Committed);
    }

    /// Returns a committed vehicle to the pool.
    ///
    /// Returns `false` if there is no such vehicle or it was not committed.
    pub fn release_vehicle(&mut self, index: usize) -> bool {
        match self.vehicles.get_mut(index) {
            Some(v) if !v.is_available() => {
                v.set_state(Commitment::Available);
                true
            }
            _ => false,
        }
    }

    /// Returns a committed driver to the pool.
    ///
    /// Returns `false` if there is no such driver or it was not committed.
    pub fn release_driver(&mut self, index: usize) -> bool {
        match self.drivers.get_mut(index) {
            Some(d) if !d.is_available() => {
                d.set_state(Commitment::Available);
                true
            }
            _ => false,
        }
    }
}
