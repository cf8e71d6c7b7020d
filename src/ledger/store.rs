//! In-memory ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{AllocationRecord, AllotmentDate};

/// Allocation records grouped by date.
///
/// Dates iterate in ascending key order. The key is the `dd/mm/yyyy`
/// string, so ordering is lexicographic on that text (day first), not
/// chronological.
///
/// # Examples
///
/// ```
/// use u_fleet::ledger::AllocationLedger;
/// use u_fleet::models::{AllocationRecord, AllotmentDate};
///
/// let date = AllotmentDate::parse("02/03/2024").unwrap();
/// let mut ledger = AllocationLedger::new();
/// ledger.append(AllocationRecord {
///     vehicle_model: "Tata Ace".into(),
///     driver_name: "Abhi".into(),
///     area: "Belgaum".into(),
///     fuel_required: 10.0 / 13.0,
///     route: vec!["Kanabargi".into(), "Belgaum".into()],
///     date: date.clone(),
/// });
/// assert_eq!(ledger.records_on(&date).len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationLedger {
    entries: BTreeMap<AllotmentDate, Vec<AllocationRecord>>,
}

impl AllocationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `record` at the end of the group for its date, creating the
    /// group if absent.
    pub fn append(&mut self, record: AllocationRecord) {
        self.entries
            .entry(record.date.clone())
            .or_default()
            .push(record);
    }

    /// Date groups in ascending key order.
    pub fn by_date(&self) -> impl Iterator<Item = (&AllotmentDate, &[AllocationRecord])> {
        self.entries.iter().map(|(d, r)| (d, r.as_slice()))
    }

    /// Records filed under `date`, in insertion order.
    pub fn records_on(&self, date: &AllotmentDate) -> &[AllocationRecord] {
        self.entries.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct dates.
    pub fn num_dates(&self) -> usize {
        self.entries.len()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns `true` if no record has been filed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
