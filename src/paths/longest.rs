//! Longest-distance estimate by single-pass DFS relaxation.
//!
//! A depth-first traversal is started from every area not yet visited, in
//! index order. Along each road `u -> v` the estimate for `v` is raised to
//! `dist[u] + km` when that is larger, and the traversal descends into `v`
//! only if `v` has not been visited. Each area is therefore expanded at most
//! once, so on graphs with cycles the result is an estimate and not the
//! longest simple path (an NP-hard quantity).
//!
//! The traversal keeps its own frame stack, so network depth is bounded by
//! memory rather than by the thread stack.
//!
//! Unreached areas hold `-∞` (`None`); `-∞ + km` stays `-∞`, so areas
//! never reached from the source do not relax their neighbors.

use tracing::debug;

use crate::network::RoadNetwork;

/// Longest-distance estimates from one source.
#[derive(Debug, Clone)]
pub struct LongestPaths {
    distances: Vec<Option<i64>>,
    parents: Vec<Option<usize>>,
}

impl LongestPaths {
    /// Estimate per area; `None` marks an area never reached.
    pub fn distances(&self) -> &[Option<i64>] {
        &self.distances
    }

    /// Area that last raised each estimate.
    ///
    /// Upward relaxation can point parents around a cycle, so these do not
    /// in general form a tree rooted at the source.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Estimated longest distance to `to`, or `None` if never reached.
    pub fn distance(&self, to: usize) -> Option<i64> {
        self.distances.get(to).copied().flatten()
    }
}

struct Traversal<'a> {
    network: &'a RoadNetwork,
    visited: Vec<bool>,
    distances: Vec<Option<i64>>,
    parents: Vec<Option<usize>>,
    relaxations: usize,
}

impl Traversal<'_> {
    /// Expands `start` and everything newly reachable from it.
    ///
    /// Each frame is `(area, next road index)`; roads are walked in list
    /// order and an unvisited neighbor is expanded before the next road.
    fn visit(&mut self, start: usize) {
        self.visited[start] = true;
        let mut frames = vec![(start, 0usize)];
        while let Some(frame) = frames.last_mut() {
            let (u, next) = *frame;
            let Some(road) = self.network.neighbors(u).get(next).copied() else {
                frames.pop();
                continue;
            };
            frame.1 += 1;

            let v = road.to;
            // dist[u] is re-read per road: descending may have raised it.
            if let Some(du) = self.distances[u] {
                let candidate = du + i64::from(road.km);
                if self.distances[v].map_or(true, |dv| candidate > dv) {
                    self.distances[v] = Some(candidate);
                    self.parents[v] = Some(u);
                    self.relaxations += 1;
                }
            }
            if !self.visited[v] {
                self.visited[v] = true;
                frames.push((v, 0));
            }
        }
    }
}

/// Estimates longest distances from `source` to every area.
///
/// # Panics
///
/// Panics if `source` is not an area index of `network`.
///
/// # Examples
///
/// ```
/// use u_fleet::network::RoadNetwork;
/// use u_fleet::paths::longest_paths;
///
/// let net = RoadNetwork::from_edges(&["A", "B", "C"], &[(0, 1, 10), (1, 2, 5)]).unwrap();
/// let lp = longest_paths(&net, 0);
/// assert_eq!(lp.distance(2), Some(15));
/// ```
pub fn longest_paths(network: &RoadNetwork, source: usize) -> LongestPaths {
    let n = network.size();
    assert!(source < n, "source {source} outside network of {n} areas");

    let mut distances = vec![None; n];
    distances[source] = Some(0);
    let mut traversal = Traversal {
        network,
        visited: vec![false; n],
        distances,
        parents: vec![None; n],
        relaxations: 0,
    };

    for start in 0..n {
        if !traversal.visited[start] {
            traversal.visit(start);
        }
    }

    debug!(source, relaxations = traversal.relaxations, "longest-path estimate finished");
    LongestPaths {
        distances: traversal.distances,
        parents: traversal.parents,
    }
}
