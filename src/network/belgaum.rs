//! Built-in Belgaum road network: 25 collection areas.
//!
//! Index 0 (Kanabargi) is the depot every collection run starts from.

use super::{Road, RoadNetwork};

/// Area names in published order; ordinal `i + 1` addresses `BELGAUM_AREAS[i]`.
pub const BELGAUM_AREAS: [&str; 25] = [
    "Kanabargi",
    "Belgaum",
    "Shivaji Nagar",
    "Tilakwadi",
    "Chennamma Nagar",
    "Gandhinagar",
    "APMC Yard",
    "City Market",
    "Fort Road",
    "Engg College Road",
    "Khanapur Road",
    "Udyambag",
    "Bogarves",
    "Goaves",
    "Hindwadi",
    "Mache",
    "Malmaruti",
    "Nemgoa",
    "Shahpur",
    "Sambhaji Nagar",
    "Angol",
    "Balekundri",
    "Camp",
    "Dharamnath",
    "Fort Lake",
];

/// Adjacency lists as `(neighbor, km)` pairs, one slice per area.
///
/// Every entry is mirrored on the neighbor's list at the same length.
pub const BELGAUM_ROADS: [&[(usize, u32)]; 25] = [
    &[(1, 10), (2, 15), (4, 20)],
    &[(0, 10), (3, 25), (5, 15)],
    &[(0, 15), (3, 10), (6, 20)],
    &[(1, 25), (2, 10), (7, 30)],
    &[(0, 20), (5, 25), (8, 15)],
    &[(1, 15), (4, 25), (9, 10)],
    &[(2, 20), (10, 25)],
    &[(3, 30), (11, 15)],
    &[(4, 15), (12, 20)],
    &[(5, 10), (13, 30)],
    &[(6, 25), (14, 35)],
    &[(7, 15), (15, 20)],
    &[(8, 20), (16, 10)],
    &[(9, 30), (17, 25)],
    &[(10, 35), (18, 15)],
    &[(11, 20), (19, 10)],
    &[(12, 10), (20, 30)],
    &[(13, 25), (21, 15)],
    &[(14, 15), (22, 20)],
    &[(15, 10), (23, 25)],
    &[(16, 30), (24, 20)],
    &[(17, 15)],
    &[(18, 20)],
    &[(19, 25)],
    &[(20, 20)],
];

/// Builds the built-in 25-area network.
pub fn belgaum_network() -> RoadNetwork {
    let adjacency = BELGAUM_ROADS
        .iter()
        .map(|roads| roads.iter().map(|&(to, km)| Road::new(to, km)).collect())
        .collect();
    match RoadNetwork::new(&BELGAUM_AREAS, adjacency) {
        Ok(net) => net,
        Err(e) => unreachable!("built-in road table is consistent: {e}"),
    }
}
