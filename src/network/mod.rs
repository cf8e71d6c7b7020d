//! Road network of named collection areas.
//!
//! A static weighted graph built once at startup. Edges are stored as
//! per-area adjacency lists; mirrored entries make the network undirected
//! in practice, but asymmetric lists are legal.

mod belgaum;
mod road_network;

pub use belgaum::{belgaum_network, BELGAUM_AREAS, BELGAUM_ROADS};
pub use road_network::{Road, RoadNetwork};
