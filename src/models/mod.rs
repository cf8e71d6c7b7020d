//! Domain model types for fleet allotment.
//!
//! Provides the core records: named areas of the road network, vehicles and
//! drivers with a one-shot commitment state, waste-collection requests, the
//! allotment date, and the allocation record filed in the ledger.

mod area;
mod commitment;
mod date;
mod driver;
mod record;
mod request;
mod vehicle;

pub use area::Area;
pub use commitment::Commitment;
pub use date::AllotmentDate;
pub use driver::Driver;
pub use record::AllocationRecord;
pub use request::WasteRequest;
pub use vehicle::Vehicle;
