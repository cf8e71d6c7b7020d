//! Date-keyed store of allocation records.
//!
//! Records are grouped under their `dd/mm/yyyy` date, in insertion order
//! within a date. The ledger can be flushed to a plain-text file and that
//! file echoed back for review; the text is never parsed back into records.

mod persist;
mod store;

pub use persist::{dump, DumpOutcome, LEDGER_DIVIDER, LEDGER_HEADER};
pub use store::AllocationLedger;
