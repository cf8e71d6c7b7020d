//! Fleet roster and request queue.
//!
//! - [`Fleet`] — vehicles and drivers with one-shot commitment
//! - [`DriverPolicy`] — which driver accompanies an allotted vehicle
//! - [`RequestQueue`] — ordered waste-collection requests

mod policy;
mod queue;
mod roster;

pub use policy::DriverPolicy;
pub use queue::RequestQueue;
pub use roster::Fleet;
