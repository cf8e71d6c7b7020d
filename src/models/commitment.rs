//! One-shot commitment state shared by vehicles and drivers.

use serde::{Deserialize, Serialize};

/// Commitment state of a fleet resource.
///
/// The allotment engine only ever moves `Available` to `Committed`. The
/// reverse transition exists solely through the explicit release calls on
/// [`Fleet`](crate::fleet::Fleet), which the engine never invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Commitment {
    /// Free to be allotted.
    #[default]
    Available,
    /// Allotted to a collection run.
    Committed,
}

impl Commitment {
    /// Returns `true` once the resource has been allotted.
    pub fn is_committed(self) -> bool {
        self == Commitment::Committed
    }

    /// "Yes"/"No" label used in roster listings.
    pub fn label(self) -> &'static str {
        if self.is_committed() {
            "Yes"
        } else {
            "No"
        }
    }
}
