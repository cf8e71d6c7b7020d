//! Collection vehicle with capacity, mileage and commitment state.

use serde::{Deserialize, Serialize};

use super::Commitment;

/// A waste-collection vehicle.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Vehicle;
///
/// let v = Vehicle::new("Tata Ace", 1000, 13.0);
/// assert_eq!(v.model(), "Tata Ace");
/// assert_eq!(v.capacity(), 1000);
/// assert!(v.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    model: String,
    capacity: i32,
    mileage: f64,
    #[serde(default)]
    state: Commitment,
}

impl Vehicle {
    /// Creates an available vehicle.
    ///
    /// `capacity` is in kg, `mileage` in km per liter.
    pub fn new(model: impl Into<String>, capacity: i32, mileage: f64) -> Self {
        Self {
            model: model.into(),
            capacity,
            mileage,
            state: Commitment::Available,
        }
    }

    /// Model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Maximum load capacity (kg).
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Fuel mileage (km per liter).
    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// Current commitment state.
    pub fn state(&self) -> Commitment {
        self.state
    }

    /// Returns `true` if the vehicle has not been allotted.
    pub fn is_available(&self) -> bool {
        !self.state.is_committed()
    }

    /// Returns `true` if this vehicle may serve `quantity`: enough capacity
    /// and not yet allotted.
    pub fn can_serve(&self, quantity: i32) -> bool {
        self.capacity >= quantity && self.is_available()
    }

    /// Fuel (liters) needed to cover `distance_km`.
    pub fn fuel_for(&self, distance_km: f64) -> f64 {
        distance_km / self.mileage
    }

    pub(crate) fn set_state(&mut self, state: Commitment) {
        self.state = state;
    }
}
