//! Driver roster entry.

use serde::{Deserialize, Serialize};

use super::Commitment;

/// A driver who can be allotted to a collection run.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Driver;
///
/// let d = Driver::new("Abhi", 30, "Gokak");
/// assert_eq!(d.name(), "Abhi");
/// assert!(d.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    name: String,
    age: u32,
    address: String,
    #[serde(default)]
    state: Commitment,
}

impl Driver {
    /// Creates an available driver.
    pub fn new(name: impl Into<String>, age: u32, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
            state: Commitment::Available,
        }
    }

    /// Driver name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Home address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Current commitment state.
    pub fn state(&self) -> Commitment {
        self.state
    }

    /// Returns `true` if the driver has not been allotted.
    pub fn is_available(&self) -> bool {
        !self.state.is_committed()
    }

    pub(crate) fn set_state(&mut self, state: Commitment) {
        self.state = state;
    }
}
