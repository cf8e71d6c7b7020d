//! Vehicle allotment.
//!
//! [`AllocationEngine`] picks a vehicle for a request, commits it with a
//! driver, routes from the depot, derives travel time and fuel, and files
//! the result in the ledger.

mod engine;
mod travel;

pub use engine::{AllocationEngine, Allotment};
pub use travel::TravelEstimate;
