//! Allotment date in `dd/mm/yyyy` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// A date string validated against `dd/mm/yyyy`.
///
/// Day must be 01–31, month 01–12, year any four digits. There is no
/// calendar check beyond that, so `31/02/2024` is accepted.
///
/// # Examples
///
/// ```
/// use u_fleet::models::AllotmentDate;
///
/// let d = AllotmentDate::parse("05/11/2024").unwrap();
/// assert_eq!(d.as_str(), "05/11/2024");
/// assert!(AllotmentDate::parse("5/11/2024").is_err());
/// assert!(AllotmentDate::parse("31/02/2024").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AllotmentDate(String);

impl AllotmentDate {
    /// Validates `input` and wraps it.
    pub fn parse(input: &str) -> Result<Self, FleetError> {
        if is_valid_date(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FleetError::InvalidDateFormat(input.to_string()))
        }
    }

    /// The date as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }
    let digits_ok = [0, 1, 3, 4, 6, 7, 8, 9]
        .iter()
        .all(|&i| bytes[i].is_ascii_digit());
    if !digits_ok {
        return false;
    }

    let two = |i: usize| (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0');
    let day = two(0);
    let month = two(3);
    (1..=31).contains(&day) && (1..=12).contains(&month)
}

impl FromStr for AllotmentDate {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AllotmentDate {
    type Error = FleetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AllotmentDate> for String {
    fn from(date: AllotmentDate) -> Self {
        date.0
    }
}

impl fmt::Display for AllotmentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
