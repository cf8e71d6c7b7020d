//! Waste-collection request.

use serde::{Deserialize, Serialize};

/// A request to collect `quantity` kg of waste from an area.
///
/// Requests are immutable and identified by their position in the
/// [`RequestQueue`](crate::fleet::RequestQueue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteRequest {
    area: String,
    quantity: i32,
}

impl WasteRequest {
    /// Creates a request.
    pub fn new(area: impl Into<String>, quantity: i32) -> Self {
        Self {
            area: area.into(),
            quantity,
        }
    }

    /// Area name the waste is collected from.
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Quantity in kg, same unit as vehicle capacity.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}
