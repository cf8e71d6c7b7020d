//! Error taxonomy for fleet operations.
//!
//! Every variant terminates only the current operation. The console reports
//! the message and stays live for the next command.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single fleet operation.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Request position outside the request queue.
    #[error("Invalid waste index {index}: the request queue holds {len} entries")]
    InvalidRequest {
        /// Zero-based position that was asked for.
        index: usize,
        /// Queue length at the time of the call.
        len: usize,
    },

    /// Date string not in `dd/mm/yyyy` form.
    #[error("Invalid date format '{0}'. Please enter the date in the format dd/mm/yyyy")]
    InvalidDateFormat(String),

    /// No unallotted vehicle with enough capacity.
    #[error("No suitable vehicle available for {quantity} kg")]
    NoVehicleAvailable {
        /// Requested quantity.
        quantity: i32,
    },

    /// Driver roster has drivers but the policy found none to assign.
    #[error("No driver available: all {roster} drivers are committed")]
    NoDriverAvailable {
        /// Roster size.
        roster: usize,
    },

    /// Request area is not a node of the road network.
    #[error("Invalid destination area '{0}'")]
    InvalidDestination(String),

    /// Destination cannot be reached from the origin.
    #[error("No path exists from {from} to {to}")]
    NoRouteFound {
        /// Origin area name.
        from: String,
        /// Destination area name.
        to: String,
    },

    /// Ledger file could not be opened, read, or written.
    #[error("Unable to access file '{}': {source}", .path.display())]
    FileUnavailable {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Malformed configuration or scenario data.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FleetError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FleetError>;
