//! Dijkstra shortest paths over the road network.
//!
//! Frontier is a min-heap keyed by tentative distance. Popped entries whose
//! key exceeds the settled distance are stale and skipped. Ties are broken
//! by whatever order the heap yields.
//!
//! # Complexity
//!
//! O((V + E) log V) with lazy deletion.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use super::Route;
use crate::error::{FleetError, Result};
use crate::network::RoadNetwork;

/// Single-source shortest distances and the parent tree behind them.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    distances: Vec<Option<u32>>,
    parents: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Distance per area; `None` marks an unreached area.
    pub fn distances(&self) -> &[Option<u32>] {
        &self.distances
    }

    /// Predecessor per area on its shortest path; `None` for the source and
    /// unreached areas.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Shortest distance to `to`, or `None` if unreachable.
    pub fn distance(&self, to: usize) -> Option<u32> {
        self.distances.get(to).copied().flatten()
    }

    /// Returns `true` if `to` was reached.
    pub fn is_reachable(&self, to: usize) -> bool {
        self.distance(to).is_some()
    }

    /// Area indices from the source to `to`, or `None` if unreachable.
    pub fn path_to(&self, to: usize) -> Option<Vec<usize>> {
        self.distance(to)?;
        let mut path = vec![to];
        let mut at = to;
        while let Some(prev) = self.parents[at] {
            path.push(prev);
            at = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Full route to `to` with names and distance, or `None` if unreachable.
    pub fn route_to(&self, network: &RoadNetwork, to: usize) -> Option<Route> {
        let distance = self.distance(to)?;
        let path = self.path_to(to)?;
        Some(Route::new(network, path, i64::from(distance)))
    }
}

/// Computes shortest distances from `source` to every area.
///
/// # Panics
///
/// Panics if `source` is not an area index of `network`.
///
/// # Examples
///
/// ```
/// use u_fleet::network::RoadNetwork;
/// use u_fleet::paths::shortest_paths;
///
/// let net = RoadNetwork::from_edges(
///     &["Area0", "Area1", "Area2", "Island"],
///     &[(0, 1, 10), (1, 2, 5)],
/// ).unwrap();
/// let sp = shortest_paths(&net, 0);
/// assert_eq!(sp.distance(2), Some(15));
/// assert_eq!(sp.path_to(2), Some(vec![0, 1, 2]));
/// assert_eq!(sp.distance(3), None);
/// ```
pub fn shortest_paths(network: &RoadNetwork, source: usize) -> ShortestPaths {
    let n = network.size();
    assert!(source < n, "source {source} outside network of {n} areas");

    let mut distances: Vec<Option<u32>> = vec![None; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    distances[source] = Some(0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0u32, source)));
    let mut pushes = 1usize;
    let mut settled = 0usize;

    while let Some(Reverse((dist, node))) = frontier.pop() {
        if distances[node].is_some_and(|best| dist > best) {
            continue;
        }
        settled += 1;

        for road in network.neighbors(node) {
            let candidate = dist.saturating_add(road.km);
            let improves = distances[road.to].map_or(true, |best| candidate < best);
            if improves {
                distances[road.to] = Some(candidate);
                parents[road.to] = Some(node);
                frontier.push(Reverse((candidate, road.to)));
                pushes += 1;
            }
        }
    }

    debug!(source, settled, pushes, "dijkstra finished");
    ShortestPaths {
        distances,
        parents,
    }
}

/// Shortest route from `from` to `to`.
///
/// Fails with [`FleetError::NoRouteFound`] when `to` is unreachable, in
/// which case no route is reconstructed.
pub fn shortest_route(network: &RoadNetwork, from: usize, to: usize) -> Result<Route> {
    shortest_paths(network, from)
        .route_to(network, to)
        .ok_or_else(|| FleetError::NoRouteFound {
            from: network.name(from).to_string(),
            to: network.name(to).to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{belgaum_network, Road};
    use proptest::prelude::*;

    fn route_weight(network: &RoadNetwork, stops: &[usize]) -> u32 {
        stops
            .windows(2)
            .map(|w| network.road_length(w[0], w[1]).expect("route follows roads"))
            .sum()
    }

    /// Bellman-Ford relaxation, used as an independent reference.
    fn reference_distances(network: &RoadNetwork, source: usize) -> Vec<Option<u32>> {
        let n = network.size();
        let mut dist: Vec<Option<u32>> = vec![None; n];
        dist[source] = Some(0);
        for _ in 0..n {
            for from in 0..n {
                let Some(d) = dist[from] else { continue };
                for road in network.neighbors(from) {
                    let c = d + road.km;
                    if dist[road.to].map_or(true, |b| c < b) {
                        dist[road.to] = Some(c);
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn test_three_area_line() {
        let net = RoadNetwork::from_edges(&["Area0", "Area1", "Area2"], &[(0, 1, 10), (1, 2, 5)])
            .expect("valid");
        let route = shortest_route(&net, 0, 2).expect("reachable");
        assert_eq!(route.distance_km(), 15);
        assert_eq!(route.names(), &["Area0", "Area1", "Area2"]);
    }

    #[test]
    fn test_source_route_is_single_stop() {
        let net = belgaum_network();
        let route = shortest_route(&net, 0, 0).expect("reachable");
        assert_eq!(route.stops(), &[0]);
        assert_eq!(route.distance_km(), 0);
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        // 0 -> 2 direct costs 30, via 1 costs 12.
        let net = RoadNetwork::from_edges(&["A", "B", "C"], &[(0, 2, 30), (0, 1, 4), (1, 2, 8)])
            .expect("valid");
        let sp = shortest_paths(&net, 0);
        assert_eq!(sp.distance(2), Some(12));
        assert_eq!(sp.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(sp.parents()[0], None);
    }

    #[test]
    fn test_unreachable_reports_no_route() {
        let net = RoadNetwork::from_edges(&["A", "B", "C"], &[(0, 1, 3)]).expect("valid");
        let sp = shortest_paths(&net, 0);
        assert_eq!(sp.distance(2), None);
        assert!(sp.path_to(2).is_none());
        assert!(sp.route_to(&net, 2).is_none());
        match shortest_route(&net, 0, 2) {
            Err(FleetError::NoRouteFound { from, to }) => {
                assert_eq!(from, "A");
                assert_eq!(to, "C");
            }
            other => panic!("expected NoRouteFound, got {other:?}"),
        }
    }

    #[test]
    fn test_asymmetric_adjacency() {
        // Only B lists the road back to A.
        let net = RoadNetwork::new(&["A", "B"], vec![vec![], vec![Road::new(0, 6)]])
            .expect("valid");
        assert!(!shortest_paths(&net, 0).is_reachable(1));
        assert_eq!(shortest_paths(&net, 1).distance(0), Some(6));
    }

    #[test]
    fn test_belgaum_known_distances() {
        let net = belgaum_network();
        let sp = shortest_paths(&net, 0);
        // Kanabargi -> Shivaji Nagar -> Tilakwadi
        assert_eq!(sp.distance(3), Some(25));
        // Kanabargi -> Belgaum -> Gandhinagar -> Engg College Road
        assert_eq!(sp.distance(9), Some(35));
        assert_eq!(sp.path_to(9), Some(vec![0, 1, 5, 9]));
        // Fort Lake via Chennamma Nagar, Fort Road, Bogarves, Malmaruti, Angol
        assert_eq!(sp.distance(24), Some(115));
        for to in 0..net.size() {
            assert!(sp.is_reachable(to));
        }
    }

    fn arb_network() -> impl Strategy<Value = RoadNetwork> {
        (2usize..9).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 1u32..50), 0..(n * 3)).prop_map(move |edges| {
                let names: Vec<String> = (0..n).map(|i| format!("Area{i}")).collect();
                let mut adjacency = vec![Vec::new(); n];
                for (a, b, km) in edges {
                    adjacency[a].push(Road::new(b, km));
                }
                RoadNetwork::new(&names, adjacency).expect("generated network is valid")
            })
        })
    }

    proptest! {
        #[test]
        fn prop_matches_reference_and_route_sums(net in arb_network()) {
            let sp = shortest_paths(&net, 0);
            let reference = reference_distances(&net, 0);
            prop_assert_eq!(sp.distances(), reference.as_slice());

            for to in 0..net.size() {
                match sp.route_to(&net, to) {
                    Some(route) => {
                        prop_assert_eq!(route.origin(), Some(0));
                        prop_assert_eq!(route.destination(), Some(to));
                        let weight = route_weight(&net, route.stops());
                        prop_assert_eq!(i64::from(weight), route.distance_km());
                    }
                    None => prop_assert!(sp.distance(to).is_none()),
                }
            }
        }
    }
}
