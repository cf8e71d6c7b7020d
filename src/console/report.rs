//! Tabular reports written to the console output.

use std::io::{self, Write};

use crate::allocation::{Allotment, TravelEstimate};
use crate::fleet::{Fleet, RequestQueue};
use crate::ledger::{AllocationLedger, DumpOutcome};
use crate::models::Driver;
use crate::network::RoadNetwork;
use crate::paths::Route;

const RULE: &str = "=========================================================";
const THIN_RULE: &str = "---------------------------------------------------------";

fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title:^57}")?;
    writeln!(out, "{RULE}")
}

pub(crate) fn vehicles<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    banner(out, "List of Vehicles")?;
    if fleet.vehicles().is_empty() {
        writeln!(out, "No vehicles available in the system.")?;
    }
    for (i, v) in fleet.vehicles().iter().enumerate() {
        writeln!(out, "Vehicle {}:", i + 1)?;
        writeln!(out, "  Model: {}", v.model())?;
        writeln!(out, "  Load Capacity: {} kg", v.capacity())?;
        writeln!(out, "  Mileage: {} km/l", v.mileage())?;
        writeln!(out, "  Allotted: {}", v.state().label())?;
        writeln!(out, "{THIN_RULE}")?;
    }
    banner(out, "End of Vehicle List")
}

fn driver_lines<W: Write>(out: &mut W, d: &Driver) -> io::Result<()> {
    writeln!(out, "  Name: {}", d.name())?;
    writeln!(out, "  Age: {} years", d.age())?;
    writeln!(out, "  Address: {}", d.address())
}

pub(crate) fn drivers<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    banner(out, "List of Drivers")?;
    if fleet.drivers().is_empty() {
        writeln!(out, "No drivers available in the system.")?;
    }
    for (i, d) in fleet.drivers().iter().enumerate() {
        writeln!(out, "Driver {}:", i + 1)?;
        driver_lines(out, d)?;
        writeln!(out, "{THIN_RULE}")?;
    }
    banner(out, "End of Driver List")
}

pub(crate) fn requests<W: Write>(out: &mut W, queue: &RequestQueue) -> io::Result<()> {
    banner(out, "Waste Information")?;
    if queue.is_empty() {
        writeln!(out, "No waste data available.")?;
    }
    for (i, r) in queue.requests().iter().enumerate() {
        writeln!(out, "Waste {}:", i + 1)?;
        writeln!(out, "  Area: {}", r.area())?;
        writeln!(out, "  Quantity: {} kg", r.quantity())?;
        writeln!(out, "{THIN_RULE}")?;
    }
    banner(out, "End of Waste List")
}

pub(crate) fn available<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    banner(out, "Available Vehicles")?;
    let mut any = false;
    for v in fleet.available_vehicles() {
        any = true;
        writeln!(out, "Vehicle Model: {}", v.model())?;
        writeln!(out, "  Load Capacity: {} kg", v.capacity())?;
        writeln!(out, "  Mileage: {} km/l", v.mileage())?;
        writeln!(out, "{THIN_RULE}")?;
    }
    if !any {
        writeln!(out, "No available vehicles at the moment.")?;
    }

    banner(out, "Available Drivers")?;
    let mut any = false;
    for d in fleet.available_drivers() {
        any = true;
        driver_lines(out, d)?;
        writeln!(out, "{THIN_RULE}")?;
    }
    if !any {
        writeln!(out, "No available drivers at the moment.")?;
    }
    banner(out, "End of Availability")
}

pub(crate) fn area_menu<W: Write>(out: &mut W, network: &RoadNetwork) -> io::Result<()> {
    for area in network.areas() {
        writeln!(out, "{area}")?;
    }
    Ok(())
}

fn travel_lines<W: Write>(out: &mut W, route: &Route, travel: &TravelEstimate) -> io::Result<()> {
    writeln!(out, "Route: {route}")?;
    writeln!(out, "Total Distance: {} km", route.distance_km())?;
    writeln!(out, "Estimated Travel Time: {travel}.")
}

pub(crate) fn allotment<W: Write>(out: &mut W, fleet: &Fleet, a: &Allotment) -> io::Result<()> {
    let driver = &fleet.drivers()[a.driver_index];
    writeln!(out, "Vehicle allotted : {}", a.record.vehicle_model)?;
    writeln!(
        out,
        "  Driver name : {} from {} for waste in {} on {}",
        driver.name(),
        driver.address(),
        a.record.area,
        a.record.date
    )?;
    travel_lines(out, &a.route, &a.travel)?;
    writeln!(out, "This vehicle will be free in {}.", a.travel)?;
    writeln!(out, "Fuel Required: {:.2} liters", a.record.fuel_required)?;
    writeln!(out, "{RULE}")
}

/// Commitment left in place by an allotment whose route step failed.
pub(crate) fn stranded<W: Write>(
    out: &mut W,
    fleet: &Fleet,
    vehicle_index: usize,
    driver_index: usize,
) -> io::Result<()> {
    let driver = &fleet.drivers()[driver_index];
    writeln!(out, "Vehicle allotted : {}", fleet.vehicles()[vehicle_index].model())?;
    writeln!(out, "  Driver name : {} from {}", driver.name(), driver.address())
}

pub(crate) fn shortest<W: Write>(
    out: &mut W,
    route: &Route,
    travel: &TravelEstimate,
) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    travel_lines(out, route, travel)?;
    writeln!(out, "{RULE}")
}

pub(crate) fn ledger<W: Write>(out: &mut W, ledger: &AllocationLedger) -> io::Result<()> {
    if ledger.is_empty() {
        return writeln!(out, "No waste collection details available.");
    }
    banner(out, "Waste Collection Details by Date")?;
    for (date, records) in ledger.by_date() {
        writeln!(out, "\nDate: {date}")?;
        writeln!(out, "{THIN_RULE}")?;
        for r in records {
            writeln!(out, "  Vehicle Model    : {}", r.vehicle_model)?;
            writeln!(out, "  Driver Name      : {}", r.driver_name)?;
            writeln!(out, "  Waste Area       : {}", r.area)?;
            writeln!(out, "  Fuel Required    : {:.2} liters", r.fuel_required)?;
            writeln!(out, "  Route            : {}", r.route_line())?;
            writeln!(out, "{THIN_RULE}")?;
        }
        writeln!(out, "\n{RULE}")?;
    }
    writeln!(out, "End of waste collection records.")
}

pub(crate) fn dump<W: Write>(out: &mut W, outcome: &DumpOutcome) -> io::Result<()> {
    banner(out, "Displaying File Content")?;
    match outcome {
        DumpOutcome::Empty => writeln!(out, "The file is empty.")?,
        DumpOutcome::Lines(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
    }
    banner(out, "End of File Content")
}
