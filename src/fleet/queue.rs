//! Ordered list of waste-collection requests.

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::models::WasteRequest;

/// Waste-collection requests addressed by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestQueue {
    requests: Vec<WasteRequest>,
}

impl RequestQueue {
    /// Creates a queue from requests in order.
    pub fn new(requests: Vec<WasteRequest>) -> Self {
        Self { requests }
    }

    /// Request at zero-based `index`.
    pub fn get(&self, index: usize) -> Result<&WasteRequest> {
        self.requests.get(index).ok_or(FleetError::InvalidRequest {
            index,
            len: self.requests.len(),
        })
    }

    /// All requests in order.
    pub fn requests(&self) -> &[WasteRequest] {
        &self.requests
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if there are no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
