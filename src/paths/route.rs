//! Reconstructed route between two areas.

use serde::{Deserialize, Serialize};

use crate::network::RoadNetwork;

/// An ordered walk through the network with its total length.
///
/// # Examples
///
/// ```
/// use u_fleet::network::RoadNetwork;
/// use u_fleet::paths::shortest_route;
///
/// let net = RoadNetwork::from_edges(&["A", "B", "C"], &[(0, 1, 10), (1, 2, 5)]).unwrap();
/// let route = shortest_route(&net, 0, 2).unwrap();
/// assert_eq!(route.distance_km(), 15);
/// assert_eq!(route.to_string(), "A -> B -> C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<usize>,
    names: Vec<String>,
    distance_km: i64,
}

impl Route {
    pub(crate) fn new(network: &RoadNetwork, stops: Vec<usize>, distance_km: i64) -> Self {
        let names = stops.iter().map(|&i| network.name(i).to_string()).collect();
        Self {
            stops,
            names,
            distance_km,
        }
    }

    /// Area indices from first to last.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Area names from first to last.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Total length in km as computed by the search that produced it.
    pub fn distance_km(&self) -> i64 {
        self.distance_km
    }

    /// Number of areas on the route, endpoints included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First area of the route.
    pub fn origin(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Last area of the route.
    pub fn destination(&self) -> Option<usize> {
        self.stops.last().copied()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names.join(" -> "))
    }
}
