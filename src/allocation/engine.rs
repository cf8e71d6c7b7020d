//! Allotment engine.
//!
//! `allot` walks fixed checkpoints: request bounds, eligible vehicle,
//! commitment, destination lookup, route search, derived figures, ledger.
//! A failure after the commitment step leaves the vehicle and driver
//! committed; nothing is rolled back.

use serde::Serialize;
use tracing::{info, warn};

use super::TravelEstimate;
use crate::config::EngineConfig;
use crate::error::{FleetError, Result};
use crate::fleet::{Fleet, RequestQueue};
use crate::ledger::AllocationLedger;
use crate::models::{AllocationRecord, AllotmentDate};
use crate::network::RoadNetwork;
use crate::paths::{longest_paths, shortest_route, LongestPaths, Route};

/// Outcome of a successful allotment.
#[derive(Debug, Clone, Serialize)]
pub struct Allotment {
    /// Roster position of the allotted vehicle.
    pub vehicle_index: usize,
    /// Roster position of the allotted driver.
    pub driver_index: usize,
    /// Shortest route from the origin to the request area.
    pub route: Route,
    /// Travel time along the route.
    pub travel: TravelEstimate,
    /// Record filed in the ledger.
    pub record: AllocationRecord,
}

/// Owns the fleet, request queue and ledger, and routes over a shared
/// read-only road network.
///
/// # Examples
///
/// ```
/// use u_fleet::allocation::AllocationEngine;
/// use u_fleet::config::EngineConfig;
/// use u_fleet::models::AllotmentDate;
/// use u_fleet::scenario::Scenario;
///
/// let (network, fleet, requests) = Scenario::belgaum().build().unwrap();
/// let mut engine = AllocationEngine::new(&network, fleet, requests, EngineConfig::default()).unwrap();
///
/// let date = AllotmentDate::parse("01/02/2024").unwrap();
/// let allotment = engine.allot(3, &date).unwrap();
/// assert_eq!(allotment.record.vehicle_model, "Mahindra Pickup");
/// assert_eq!(allotment.route.to_string(), "Kanabargi -> Shivaji Nagar -> Tilakwadi");
/// assert_eq!(engine.ledger().len(), 1);
/// ```
#[derive(Debug)]
pub struct AllocationEngine<'a> {
    network: &'a RoadNetwork,
    config: EngineConfig,
    fleet: Fleet,
    requests: RequestQueue,
    ledger: AllocationLedger,
    last_commitment: Option<(usize, usize)>,
}

impl<'a> AllocationEngine<'a> {
    /// Creates an engine with an empty ledger.
    ///
    /// Fails if the configuration is invalid or its origin is not an area of
    /// `network`.
    pub fn new(
        network: &'a RoadNetwork,
        fleet: Fleet,
        requests: RequestQueue,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        if config.origin >= network.size() {
            return Err(FleetError::Config(format!(
                "origin {} outside network of {} areas",
                config.origin,
                network.size()
            )));
        }
        Ok(Self {
            network,
            config,
            fleet,
            requests,
            ledger: AllocationLedger::new(),
            last_commitment: None,
        })
    }

    /// Road network routes are computed on.
    pub fn network(&self) -> &'a RoadNetwork {
        self.network
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Vehicle and driver rosters.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Pending requests.
    pub fn requests(&self) -> &RequestQueue {
        &self.requests
    }

    /// Filed allocations.
    pub fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }

    /// `(vehicle, driver)` roster positions of the most recent commitment,
    /// whether or not that allotment went on to be filed.
    pub fn last_commitment(&self) -> Option<(usize, usize)> {
        self.last_commitment
    }

    /// Name of the origin area.
    pub fn origin_name(&self) -> &'a str {
        self.network.name(self.config.origin)
    }

    /// Allots a vehicle and driver to the request at zero-based
    /// `request_index`, filing the result under `date`.
    ///
    /// The first vehicle in roster order with enough capacity that is not
    /// yet allotted is chosen. If the request area is unknown or cannot be
    /// reached, the error is returned but the vehicle and driver stay
    /// committed.
    pub fn allot(&mut self, request_index: usize, date: &AllotmentDate) -> Result<Allotment> {
        let request = self.requests.get(request_index)?.clone();

        let Some(driver_index) = self.config.driver_policy.pick(&self.fleet) else {
            let roster = self.fleet.drivers().len();
            if roster == 0 {
                return Err(FleetError::Config("driver roster is empty".to_string()));
            }
            warn!(roster, policy = ?self.config.driver_policy, "no driver available");
            return Err(FleetError::NoDriverAvailable { roster });
        };

        let Some(vehicle_index) = self.fleet.first_eligible_vehicle(request.quantity()) else {
            warn!(
                area = request.area(),
                quantity = request.quantity(),
                "no suitable vehicle available"
            );
            return Err(FleetError::NoVehicleAvailable {
                quantity: request.quantity(),
            });
        };

        self.fleet.commit_vehicle(vehicle_index);
        self.fleet.commit_driver(driver_index);
        self.last_commitment = Some((vehicle_index, driver_index));
        let vehicle = &self.fleet.vehicles()[vehicle_index];
        let driver = &self.fleet.drivers()[driver_index];
        info!(
            vehicle = vehicle.model(),
            driver = driver.name(),
            area = request.area(),
            %date,
            "vehicle committed"
        );

        let Some(destination) = self.network.index_of(request.area()) else {
            warn!(area = request.area(), vehicle = vehicle.model(), "invalid destination area");
            return Err(FleetError::InvalidDestination(request.area().to_string()));
        };

        let route = shortest_route(self.network, self.config.origin, destination)
            .inspect_err(|_| {
                warn!(area = request.area(), vehicle = vehicle.model(), "no route to destination");
            })?;

        let distance = route.distance_km() as f64;
        let travel = TravelEstimate::new(distance, self.config.average_speed_kmh);
        let fuel_required = vehicle.fuel_for(distance);

        let record = AllocationRecord {
            vehicle_model: vehicle.model().to_string(),
            driver_name: driver.name().to_string(),
            area: request.area().to_string(),
            fuel_required,
            route: route.names().to_vec(),
            date: date.clone(),
        };
        self.ledger.append(record.clone());

        info!(
            vehicle = %record.vehicle_model,
            distance_km = route.distance_km(),
            fuel_l = fuel_required,
            "allotment filed"
        );
        Ok(Allotment {
            vehicle_index,
            driver_index,
            route,
            travel,
            record,
        })
    }

    /// Shortest route from the origin to `destination` with its travel time.
    /// No fleet state changes.
    pub fn shortest_route_to(&self, destination: usize) -> Result<(Route, TravelEstimate)> {
        self.check_area(destination)?;
        let route = shortest_route(self.network, self.config.origin, destination)?;
        let travel = TravelEstimate::new(route.distance_km() as f64, self.config.average_speed_kmh);
        Ok((route, travel))
    }

    /// Longest-distance estimate from the origin to `destination`.
    /// No fleet state changes.
    pub fn longest_distance_to(&self, destination: usize) -> Result<i64> {
        self.check_area(destination)?;
        let estimate: LongestPaths = longest_paths(self.network, self.config.origin);
        estimate
            .distance(destination)
            .ok_or_else(|| FleetError::NoRouteFound {
                from: self.origin_name().to_string(),
                to: self.network.name(destination).to_string(),
            })
    }

    fn check_area(&self, index: usize) -> Result<()> {
        if index < self.network.size() {
            Ok(())
        } else {
            Err(FleetError::InvalidDestination(format!("area #{}", index + 1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Driver, Vehicle, WasteRequest};
    use crate::scenario::Scenario;
    use proptest::prelude::*;

    fn date() -> AllotmentDate {
        AllotmentDate::parse("15/08/2024").expect("valid")
    }

    fn three_area_network() -> RoadNetwork {
        RoadNetwork::from_edges(&["Area0", "Area1", "Area2"], &[(0, 1, 10), (1, 2, 5)])
            .expect("valid")
    }

    fn engine_with<'a>(
        network: &'a RoadNetwork,
        vehicles: Vec<Vehicle>,
        requests: Vec<WasteRequest>,
    ) -> AllocationEngine<'a> {
        let fleet = Fleet::new(
            vehicles,
            vec![Driver::new("Abhi", 30, "Gokak"), Driver::new("Arun", 32, "Hubli")],
        );
        AllocationEngine::new(
            network,
            fleet,
            RequestQueue::new(requests),
            EngineConfig::default(),
        )
        .expect("valid engine")
    }

    #[test]
    fn test_allot_success_figures() {
        let net = three_area_network();
        let mut engine = engine_with(
            &net,
            vec![Vehicle::new("Van", 1000, 5.0)],
            vec![WasteRequest::new("Area2", 800)],
        );

        let a = engine.allot(0, &date()).expect("allotted");
        assert_eq!(a.vehicle_index, 0);
        assert_eq!(a.driver_index, 0);
        assert_eq!(a.route.distance_km(), 15);
        assert_eq!(a.record.route, vec!["Area0", "Area1", "Area2"]);
        assert!((a.record.fuel_required - 3.0).abs() < 1e-10);
        assert_eq!((a.travel.hours(), a.travel.minutes()), (0, 22));

        assert!(!engine.fleet().vehicles()[0].is_available());
        assert!(!engine.fleet().drivers()[0].is_available());
        assert_eq!(engine.ledger().records_on(&date()), &[a.record]);
    }

    #[test]
    fn test_invalid_request_index() {
        let net = three_area_network();
        let mut engine = engine_with(&net, vec![Vehicle::new("Van", 1000, 5.0)], vec![]);
        assert!(matches!(
            engine.allot(0, &date()),
            Err(FleetError::InvalidRequest { index: 0, len: 0 })
        ));
        assert!(engine.fleet().vehicles()[0].is_available());
    }

    #[test]
    fn test_single_capable_vehicle_then_none() {
        let net = three_area_network();
        let mut engine = engine_with(
            &net,
            vec![
                Vehicle::new("Small", 1000, 13.0),
                Vehicle::new("Big", 6000, 12.0),
                Vehicle::new("Medium", 4000, 11.0),
            ],
            vec![WasteRequest::new("Area1", 5000), WasteRequest::new("Area1", 5000)],
        );

        let a = engine.allot(0, &date()).expect("allotted");
        assert_eq!(a.record.vehicle_model, "Big");

        match engine.allot(1, &date()) {
            Err(FleetError::NoVehicleAvailable { quantity }) => assert_eq!(quantity, 5000),
            other => panic!("expected NoVehicleAvailable, got {other:?}"),
        }
        assert_eq!(engine.ledger().len(), 1);
        assert!(engine.fleet().vehicles()[0].is_available());
        assert!(engine.fleet().vehicles()[2].is_available());
    }

    #[test]
    fn test_invalid_destination_keeps_commitment() {
        let net = three_area_network();
        let mut engine = engine_with(
            &net,
            vec![Vehicle::new("Van", 1000, 5.0)],
            vec![WasteRequest::new("Nowhere", 100)],
        );

        assert!(matches!(
            engine.allot(0, &date()),
            Err(FleetError::InvalidDestination(area)) if area == "Nowhere"
        ));
        assert!(!engine.fleet().vehicles()[0].is_available());
        assert!(!engine.fleet().drivers()[0].is_available());
        assert_eq!(engine.last_commitment(), Some((0, 0)));
        assert!(engine.ledger().is_empty());
    }

    #[test]
    fn test_unreachable_keeps_commitment() {
        let net = RoadNetwork::from_edges(&["Depot", "Near", "Island"], &[(0, 1, 4)])
            .expect("valid");
        let mut engine = engine_with(
            &net,
            vec![Vehicle::new("Van", 1000, 5.0)],
            vec![WasteRequest::new("Island", 100)],
        );

        assert!(matches!(
            engine.allot(0, &date()),
            Err(FleetError::NoRouteFound { .. })
        ));
        assert!(!engine.fleet().vehicles()[0].is_available());
        assert_eq!(engine.last_commitment(), Some((0, 0)));
        assert!(engine.ledger().is_empty());
    }

    #[test]
    fn test_first_driver_always_assigned() {
        let net = three_area_network();
        let mut engine = engine_with(
            &net,
            vec![Vehicle::new("A", 1000, 5.0), Vehicle::new("B", 1000, 5.0)],
            vec![WasteRequest::new("Area1", 10), WasteRequest::new("Area2", 10)],
        );
        let first = engine.allot(0, &date()).expect("allotted");
        let second = engine.allot(1, &date()).expect("allotted");
        assert_eq!(first.record.driver_name, "Abhi");
        assert_eq!(second.record.driver_name, "Abhi");
        assert!(engine.fleet().drivers()[1].is_available());
    }

    #[test]
    fn test_first_available_driver_policy() {
        let net = three_area_network();
        let fleet = Fleet::new(
            vec![Vehicle::new("A", 1000, 5.0), Vehicle::new("B", 1000, 5.0)],
            vec![Driver::new("Abhi", 30, "Gokak"), Driver::new("Arun", 32, "Hubli")],
        );
        let config = EngineConfig {
            driver_policy: crate::fleet::DriverPolicy::FirstAvailable,
            ..EngineConfig::default()
        };
        let requests = RequestQueue::new(vec![
            WasteRequest::new("Area1", 10),
            WasteRequest::new("Area2", 10),
        ]);
        let mut engine = AllocationEngine::new(&net, fleet, requests, config).expect("valid");
        engine.allot(0, &date()).expect("allotted");
        let second = engine.allot(1, &date()).expect("allotted");
        assert_eq!(second.record.driver_name, "Arun");
    }

    #[test]
    fn test_all_drivers_committed_is_not_a_config_error() {
        let net = three_area_network();
        let fleet = Fleet::new(
            vec![Vehicle::new("A", 1000, 5.0), Vehicle::new("B", 1000, 5.0)],
            vec![Driver::new("Abhi", 30, "Gokak")],
        );
        let config = EngineConfig {
            driver_policy: crate::fleet::DriverPolicy::FirstAvailable,
            ..EngineConfig::default()
        };
        let requests = RequestQueue::new(vec![
            WasteRequest::new("Area1", 10),
            WasteRequest::new("Area2", 10),
        ]);
        let mut engine = AllocationEngine::new(&net, fleet, requests, config).expect("valid");
        engine.allot(0, &date()).expect("allotted");
        assert!(matches!(
            engine.allot(1, &date()),
            Err(FleetError::NoDriverAvailable { roster: 1 })
        ));
        assert!(engine.fleet().vehicles()[1].is_available());
        assert_eq!(engine.last_commitment(), Some((0, 0)));
    }

    #[test]
    fn test_empty_driver_roster_commits_nothing() {
        let net = three_area_network();
        let fleet = Fleet::new(vec![Vehicle::new("A", 1000, 5.0)], vec![]);
        let requests = RequestQueue::new(vec![WasteRequest::new("Area1", 10)]);
        let mut engine =
            AllocationEngine::new(&net, fleet, requests, EngineConfig::default()).expect("valid");
        assert!(matches!(engine.allot(0, &date()), Err(FleetError::Config(_))));
        assert!(engine.fleet().vehicles()[0].is_available());
    }

    #[test]
    fn test_rejects_origin_outside_network() {
        let net = three_area_network();
        let config = EngineConfig {
            origin: 3,
            ..EngineConfig::default()
        };
        assert!(AllocationEngine::new(&net, Fleet::default(), RequestQueue::default(), config)
            .is_err());
    }

    #[test]
    fn test_belgaum_session() {
        let (net, fleet, requests) = Scenario::belgaum().build().expect("consistent");
        let mut engine =
            AllocationEngine::new(&net, fleet, requests, EngineConfig::default()).expect("valid");

        // Ordinal 10: Engg College Road, 5000 kg -> Eicher 950 (6000 kg, 12 km/l).
        let a = engine.allot(9, &date()).expect("allotted");
        assert_eq!(a.record.vehicle_model, "Eicher 950");
        assert_eq!(a.route.distance_km(), 35);
        assert!((a.record.fuel_required - 35.0 / 12.0).abs() < 1e-10);
        assert_eq!(a.travel.to_string(), "0 hours and 52 minutes");

        // Ordinal 2 names an area outside the network; the Tata Ace stays committed.
        assert!(matches!(
            engine.allot(1, &date()),
            Err(FleetError::InvalidDestination(_))
        ));
        assert!(!engine.fleet().vehicles()[0].is_available());

        // Ordinal 25 needs 12500 kg: only the Tata 1630 fits.
        let a = engine.allot(24, &date()).expect("allotted");
        assert_eq!(a.record.vehicle_model, "Tata 1630");
        assert_eq!(a.route.distance_km(), 115);
        assert!(matches!(
            engine.allot(24, &date()),
            Err(FleetError::NoVehicleAvailable { .. })
        ));
        assert_eq!(engine.ledger().len(), 2);
    }

    #[test]
    fn test_queries_leave_fleet_untouched() {
        let (net, fleet, requests) = Scenario::belgaum().build().expect("consistent");
        let engine =
            AllocationEngine::new(&net, fleet, requests, EngineConfig::default()).expect("valid");

        let (route, travel) = engine.shortest_route_to(3).expect("reachable");
        assert_eq!(route.distance_km(), 25);
        assert_eq!(travel.minutes(), 37);

        let long = engine.longest_distance_to(3).expect("reachable");
        assert!(long >= 25);

        assert!(matches!(
            engine.shortest_route_to(25),
            Err(FleetError::InvalidDestination(_))
        ));
        assert_eq!(engine.fleet().available_vehicles().count(), 10);
    }

    proptest! {
        #[test]
        fn prop_never_picks_small_or_committed(
            capacities in prop::collection::vec(1i32..20, 1..8),
            quantities in prop::collection::vec(1i32..20, 1..12),
        ) {
            let net = three_area_network();
            let vehicles = capacities
                .iter()
                .enumerate()
                .map(|(i, &c)| Vehicle::new(format!("V{i}"), c, 4.0))
                .collect();
            let requests = quantities.iter().map(|&q| WasteRequest::new("Area2", q)).collect();
            let mut engine = engine_with(&net, vehicles, requests);

            let mut used = vec![false; capacities.len()];
            for (i, &q) in quantities.iter().enumerate() {
                let before: Vec<bool> =
                    engine.fleet().vehicles().iter().map(|v| v.is_available()).collect();
                match engine.allot(i, &date()) {
                    Ok(a) => {
                        prop_assert!(capacities[a.vehicle_index] >= q);
                        prop_assert!(before[a.vehicle_index]);
                        prop_assert!(!used[a.vehicle_index]);
                        used[a.vehicle_index] = true;
                        prop_assert!((a.record.fuel_required - 15.0 / 4.0).abs() < 1e-10);
                        prop_assert!(a.record.fuel_required >= 0.0);
                    }
                    Err(FleetError::NoVehicleAvailable { .. }) => {
                        let any_fit = capacities
                            .iter()
                            .zip(&before)
                            .any(|(&c, &free)| free && c >= q);
                        prop_assert!(!any_fit);
                    }
                    Err(e) => prop_assert!(false, "unexpected error {e}"),
                }
            }
        }
    }
}
