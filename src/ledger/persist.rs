//! Plain-text ledger file.
//!
//! Flushing appends one block per date:
//!
//! ```text
//! Collected Waste Data by Date:
//! Date: 01/02/2024
//! Vehicle Model: Tata Ace, Driver Name: Abhi, Waste Area: Belgaum, Fuel Required: 0.77 liters
//! Route: Kanabargi -> Belgaum
//!  ---------------------------------------------------------
//! ```
//!
//! Dumping echoes the file verbatim; it is not parsed back into records.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::AllocationLedger;
use crate::error::{FleetError, Result};

/// First line written on every flush.
pub const LEDGER_HEADER: &str = "Collected Waste Data by Date:";

/// Line closing each date block.
pub const LEDGER_DIVIDER: &str = " ---------------------------------------------------------";

const EMPTY_NOTICE: &str = "No waste collection data available.";

impl AllocationLedger {
    /// Writes the ledger in its text form.
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{LEDGER_HEADER}")?;
        if self.is_empty() {
            writeln!(out, "{EMPTY_NOTICE}")?;
            return Ok(());
        }
        for (date, records) in self.by_date() {
            writeln!(out, "Date: {date}")?;
            for r in records {
                writeln!(
                    out,
                    "Vehicle Model: {}, Driver Name: {}, Waste Area: {}, Fuel Required: {:.2} liters",
                    r.vehicle_model, r.driver_name, r.area, r.fuel_required
                )?;
                writeln!(out, "Route: {}", r.route_line())?;
            }
            writeln!(out, "{LEDGER_DIVIDER}")?;
        }
        Ok(())
    }

    /// Appends the ledger's text form to `path`, creating the file if
    /// needed. Returns the number of records written.
    pub fn flush(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FleetError::file(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_text(&mut out)
            .and_then(|_| out.flush())
            .map_err(|e| FleetError::file(path, e))?;

        info!(path = %path.display(), records = self.len(), "ledger flushed");
        Ok(self.len())
    }
}

/// Contents of a dumped ledger file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// The file exists but has no lines.
    Empty,
    /// Lines in file order, without line terminators.
    Lines(Vec<String>),
}

/// Reads `path` line by line for display.
///
/// Bytes that are not valid UTF-8 are shown as U+FFFD rather than failing
/// the read.
pub fn dump(path: impl AsRef<Path>) -> Result<DumpOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FleetError::file(path, e))?;
    let lines = BufReader::new(file)
        .split(b'\n')
        .map(|line| line.map(|bytes| decode_line(&bytes)))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| FleetError::file(path, e))?;

    if lines.is_empty() {
        Ok(DumpOutcome::Empty)
    } else {
        Ok(DumpOutcome::Lines(lines))
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
