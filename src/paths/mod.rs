//! Path computations over the road network.
//!
//! - [`shortest_paths`] — Dijkstra single-source shortest distances, O((V + E) log V)
//! - [`longest_paths`] — single-pass DFS upward relaxation (estimate, not exact)

mod longest;
mod route;
mod shortest;

pub use longest::{longest_paths, LongestPaths};
pub use route::Route;
pub use shortest::{shortest_paths, shortest_route, ShortestPaths};
