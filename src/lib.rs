//! # u-fleet
//!
//! Waste-collection fleet routing: shortest and longest-estimate paths over
//! a fixed road network, one-shot vehicle allotment, and a date-keyed
//! allocation ledger with a plain-text file form.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Area, Vehicle, Driver, WasteRequest, AllocationRecord)
//! - [`network`] — Road network and the built-in 25-area table
//! - [`paths`] — Dijkstra shortest paths and DFS longest-path estimate
//! - [`fleet`] — Vehicle/driver roster, driver policy, request queue
//! - [`allocation`] — Allotment engine, travel time and fuel
//! - [`ledger`] — Allocation ledger, flush and dump
//! - [`console`] — Menu-driven operator console
//! - [`config`] / [`scenario`] — Engine settings and startup data

pub mod allocation;
pub mod config;
pub mod console;
pub mod error;
pub mod fleet;
pub mod ledger;
pub mod models;
pub mod network;
pub mod paths;
pub mod scenario;

pub use error::{FleetError, Result};
