//! Travel time derived from distance.

use serde::{Deserialize, Serialize};

/// Travel time for a distance at a constant average speed, split into
/// whole hours and minutes (both truncated toward zero).
///
/// # Examples
///
/// ```
/// use u_fleet::allocation::TravelEstimate;
///
/// let t = TravelEstimate::new(35.0, 40.0);
/// assert_eq!(t.hours(), 0);
/// assert_eq!(t.minutes(), 52);
///
/// let t = TravelEstimate::new(115.0, 40.0);
/// assert_eq!((t.hours(), t.minutes()), (2, 52));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    distance_km: f64,
    hours: u32,
    minutes: u32,
}

impl TravelEstimate {
    /// Computes the estimate for `distance_km` at `speed_kmh`.
    pub fn new(distance_km: f64, speed_kmh: f64) -> Self {
        let time_hours = distance_km / speed_kmh;
        let hours = time_hours.trunc();
        let minutes = ((time_hours - hours) * 60.0).trunc();
        Self {
            distance_km,
            hours: hours as u32,
            minutes: minutes as u32,
        }
    }

    /// Distance covered (km).
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Whole hours.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Remaining whole minutes.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl std::fmt::Display for TravelEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hours and {} minutes", self.hours, self.minutes)
    }
}
