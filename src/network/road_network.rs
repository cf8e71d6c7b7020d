//! Adjacency-list road network.

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::models::Area;

/// A directed adjacency entry: the neighbor's index and the road length in km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    /// Index of the neighboring area.
    pub to: usize,
    /// Length in km, always positive.
    pub km: u32,
}

impl Road {
    /// Creates an adjacency entry.
    pub fn new(to: usize, km: u32) -> Self {
        Self { to, km }
    }
}

/// Immutable weighted graph of named areas.
///
/// # Examples
///
/// ```
/// use u_fleet::network::RoadNetwork;
///
/// let net = RoadNetwork::from_edges(
///     &["Area0", "Area1", "Area2"],
///     &[(0, 1, 10), (1, 2, 5)],
/// ).unwrap();
/// assert_eq!(net.size(), 3);
/// assert_eq!(net.index_of("Area2"), Some(2));
/// assert_eq!(net.neighbors(1).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    areas: Vec<Area>,
    adjacency: Vec<Vec<Road>>,
}

impl RoadNetwork {
    /// Builds a network from area names and one adjacency list per area.
    ///
    /// Lists are taken as given, without mirroring. Fails if the list count
    /// differs from the area count, an entry points outside the network, or
    /// a road has zero length.
    pub fn new<S: AsRef<str>>(names: &[S], adjacency: Vec<Vec<Road>>) -> Result<Self> {
        if names.len() != adjacency.len() {
            return Err(FleetError::Config(format!(
                "{} areas but {} adjacency lists",
                names.len(),
                adjacency.len()
            )));
        }
        let n = names.len();
        for (from, roads) in adjacency.iter().enumerate() {
            for road in roads {
                if road.to >= n {
                    return Err(FleetError::Config(format!(
                        "road from area {from} points to unknown area {}",
                        road.to
                    )));
                }
                if road.km == 0 {
                    return Err(FleetError::Config(format!(
                        "road {from} -> {} has non-positive length",
                        road.to
                    )));
                }
            }
        }

        let areas = names
            .iter()
            .enumerate()
            .map(|(i, name)| Area::new(i, name.as_ref()))
            .collect();
        Ok(Self { areas, adjacency })
    }

    /// Builds an undirected network: each `(a, b, km)` is entered on both
    /// adjacency lists.
    pub fn from_edges<S: AsRef<str>>(names: &[S], edges: &[(usize, usize, u32)]) -> Result<Self> {
        let n = names.len();
        let mut adjacency = vec![Vec::new(); n];
        for &(a, b, km) in edges {
            if a >= n || b >= n {
                return Err(FleetError::Config(format!(
                    "edge ({a}, {b}) references an area outside 0..{n}"
                )));
            }
            adjacency[a].push(Road::new(b, km));
            adjacency[b].push(Road::new(a, km));
        }
        Self::new(names, adjacency)
    }

    /// Number of areas.
    pub fn size(&self) -> usize {
        self.areas.len()
    }

    /// All areas in index order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Area at `index`, if any.
    pub fn area(&self, index: usize) -> Option<&Area> {
        self.areas.get(index)
    }

    /// Area addressed by a 1-based ordinal.
    pub fn area_by_ordinal(&self, ordinal: usize) -> Option<&Area> {
        ordinal.checked_sub(1).and_then(|i| self.areas.get(i))
    }

    /// Name of the area at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn name(&self, index: usize) -> &str {
        self.areas[index].name()
    }

    /// Roads leaving the area at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn neighbors(&self, index: usize) -> &[Road] {
        &self.adjacency[index]
    }

    /// Index of the area called `name`, or `None` if it is not part of the
    /// network.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.areas.iter().position(|a| a.name() == name)
    }

    /// Total number of adjacency entries (directed roads).
    pub fn num_roads(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Length of the direct road `from -> to`, if one is listed.
    pub fn road_length(&self, from: usize, to: usize) -> Option<u32> {
        self.adjacency
            .get(from)?
            .iter()
            .filter(|r| r.to == to)
            .map(|r| r.km)
            .min()
    }
}
