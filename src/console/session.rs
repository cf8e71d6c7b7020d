//! Interactive session loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::{report, Command};
use crate::allocation::AllocationEngine;
use crate::error::FleetError;
use crate::ledger;
use crate::models::AllotmentDate;

/// Operator console over an [`AllocationEngine`].
///
/// End of input behaves like the exit command.
///
/// # Examples
///
/// ```
/// use u_fleet::allocation::AllocationEngine;
/// use u_fleet::config::EngineConfig;
/// use u_fleet::console::Console;
/// use u_fleet::scenario::Scenario;
///
/// let (network, fleet, requests) = Scenario::belgaum().build().unwrap();
/// let engine = AllocationEngine::new(&network, fleet, requests, EngineConfig::default()).unwrap();
///
/// let script = "1\n4\n01/02/2024\n11\n";
/// let mut console = Console::new(engine, script.as_bytes(), Vec::new());
/// console.run().unwrap();
/// assert_eq!(console.engine().ledger().len(), 1);
/// ```
pub struct Console<'a, R, W> {
    engine: AllocationEngine<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Creates a console reading commands from `input`.
    pub fn new(engine: AllocationEngine<'a>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Engine driven by this console.
    pub fn engine(&self) -> &AllocationEngine<'a> {
        &self.engine
    }

    /// Consumes the console, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the exit command or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match line.parse::<Command>() {
                Ok(Command::Exit) => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                Ok(command) => self.execute(command)?,
                Err(_) => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Executes one command, prompting for its arguments.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        debug!(?command, "executing");
        match command {
            Command::Allot => self.allot(),
            Command::ListVehicles => report::vehicles(&mut self.output, self.engine.fleet()),
            Command::ListDrivers => report::drivers(&mut self.output, self.engine.fleet()),
            Command::ListRequests => report::requests(&mut self.output, self.engine.requests()),
            Command::ShortestRoute => self.shortest_route(),
            Command::LongestRoute => self.longest_route(),
            Command::ListAvailable => report::available(&mut self.output, self.engine.fleet()),
            Command::ListAllocations => report::ledger(&mut self.output, self.engine.ledger()),
            Command::SaveLedger => self.save_ledger(),
            Command::LoadLedger => self.load_ledger(),
            Command::Exit => Ok(()),
        }
    }

    fn menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Belgaum City Waste Management System")?;
        for command in Command::ALL {
            writeln!(self.output, "{}. {}", command.number(), command.label())?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads a 1-based area ordinal and returns the zero-based index.
    fn prompt_area(&mut self) -> io::Result<Option<usize>> {
        writeln!(self.output, "Enter destination area index:")?;
        report::area_menu(&mut self.output, self.engine.network())?;
        let Some(line) = self.prompt("> ")? else {
            return Ok(None);
        };
        let size = self.engine.network().size();
        match line.parse::<usize>() {
            Ok(n) if (1..=size).contains(&n) => Ok(Some(n - 1)),
            Ok(_) => {
                writeln!(
                    self.output,
                    "Invalid index. Please enter a number between 1 and {size}."
                )?;
                Ok(None)
            }
            Err(_) => {
                writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                Ok(None)
            }
        }
    }

    /// Prompts until a `dd/mm/yyyy` date is entered.
    fn prompt_date(&mut self) -> io::Result<Option<AllotmentDate>> {
        let mut text = "Enter the date for allotment (dd/mm/yyyy): ";
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match AllotmentDate::parse(&line) {
                Ok(date) => return Ok(Some(date)),
                Err(e) => {
                    debug!(%e, "date rejected");
                    text = "Invalid date format. Please enter the date in the format dd/mm/yyyy: ";
                }
            }
        }
    }

    fn report_error(&mut self, e: &FleetError) -> io::Result<()> {
        writeln!(self.output, "Error: {e}")
    }

    fn allot(&mut self) -> io::Result<()> {
        let Some(index) = self.prompt_area()? else {
            return Ok(());
        };
        if let Err(e) = self.engine.requests().get(index).map(|_| ()) {
            return self.report_error(&e);
        }
        let Some(date) = self.prompt_date()? else {
            return Ok(());
        };
        match self.engine.allot(index, &date) {
            Ok(allotment) => report::allotment(&mut self.output, self.engine.fleet(), &allotment),
            Err(e @ (FleetError::InvalidDestination(_) | FleetError::NoRouteFound { .. })) => {
                if let Some((vehicle, driver)) = self.engine.last_commitment() {
                    report::stranded(&mut self.output, self.engine.fleet(), vehicle, driver)?;
                }
                self.report_error(&e)
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn shortest_route(&mut self) -> io::Result<()> {
        let Some(index) = self.prompt_area()? else {
            return Ok(());
        };
        match self.engine.shortest_route_to(index) {
            Ok((route, travel)) => {
                writeln!(
                    self.output,
                    "Shortest distance to {}: {} km",
                    self.engine.network().name(index),
                    route.distance_km()
                )?;
                report::shortest(&mut self.output, &route, &travel)
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn longest_route(&mut self) -> io::Result<()> {
        let Some(index) = self.prompt_area()? else {
            return Ok(());
        };
        match self.engine.longest_distance_to(index) {
            Ok(km) => writeln!(
                self.output,
                "Longest distance to {}: {km} km",
                self.engine.network().name(index)
            ),
            Err(e) => self.report_error(&e),
        }
    }

    fn save_ledger(&mut self) -> io::Result<()> {
        let path = self.engine.config().ledger_path.clone();
        if self.engine.ledger().is_empty() {
            writeln!(self.output, "No data to store in the file.")?;
        }
        match self.engine.ledger().flush(&path) {
            Ok(_) => writeln!(self.output, "Data stored successfully in {}", path.display()),
            Err(e) => self.report_error(&e),
        }
    }

    fn load_ledger(&mut self) -> io::Result<()> {
        let path = self.engine.config().ledger_path.clone();
        match ledger::dump(&path) {
            Ok(outcome) => report::dump(&mut self.output, &outcome),
            Err(e) => self.report_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::network::RoadNetwork;
    use crate::scenario::Scenario;

    fn run_script(network: &RoadNetwork, config: EngineConfig, script: &str) -> (String, usize) {
        let (_, fleet, requests) = Scenario::belgaum().build().expect("consistent");
        let engine = AllocationEngine::new(network, fleet, requests, config).expect("valid");
        let mut console = Console::new(engine, script.as_bytes(), Vec::new());
        console.run().expect("in-memory io");
        let filed = console.engine().ledger().len();
        let out = String::from_utf8(console.into_output()).expect("utf8");
        (out, filed)
    }

    fn belgaum() -> RoadNetwork {
        crate::network::belgaum_network()
    }

    #[test]
    fn test_allot_reprompts_for_date() {
        let net = belgaum();
        let (out, filed) = run_script(
            &net,
            EngineConfig::default(),
            "1\n4\n2024-02-01\n32/01/2024\n01/02/2024\n11\n",
        );
        assert_eq!(filed, 1);
        assert_eq!(out.matches("Invalid date format").count(), 2);
        assert!(out.contains("Vehicle allotted : Mahindra Pickup"));
        assert!(out.contains("Route: Kanabargi -> Shivaji Nagar -> Tilakwadi"));
        assert!(out.contains("This vehicle will be free in 0 hours and 37 minutes."));
        assert!(out.contains("Exiting the program."));
    }

    #[test]
    fn test_allot_reports_invalid_destination() {
        let net = belgaum();
        let (out, filed) = run_script(&net, EngineConfig::default(), "1\n2\n01/02/2024\n7\n");
        assert_eq!(filed, 0);
        assert!(out.contains(
            "Vehicle allotted : Tata Ace\n  Driver name : Abhi from Gokak\nError: Invalid destination area 'BelgaumCBT'"
        ));
        // The Tata Ace stayed committed and no longer shows as available.
        assert!(out.contains("Vehicle Model: Eicher 950\n"));
        assert!(!out.contains("Vehicle Model: Tata Ace\n"));
    }

    #[test]
    fn test_out_of_range_ordinal() {
        let net = belgaum();
        let (out, _) = run_script(&net, EngineConfig::default(), "5\n26\n5\nabc\n99\n");
        assert!(out.contains("Invalid index. Please enter a number between 1 and 25."));
        assert!(out.contains("Invalid input. Please enter a valid number."));
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_route_queries() {
        let net = belgaum();
        let (out, _) = run_script(&net, EngineConfig::default(), "5\n10\n6\n1\n11\n");
        assert!(out.contains("Shortest distance to Engg College Road: 35 km"));
        assert!(out.contains("Route: Kanabargi -> Belgaum -> Gandhinagar -> Engg College Road"));
        assert!(out.contains("Longest distance to Kanabargi:"));
    }

    #[test]
    fn test_listings() {
        let net = belgaum();
        let (out, _) = run_script(&net, EngineConfig::default(), "2\n3\n4\n8\n11\n");
        assert!(out.contains("Vehicle 10:"));
        assert!(out.contains("  Model: Tata 1630"));
        assert!(out.contains("Driver 5:"));
        assert!(out.contains("  Area: BelgaumCBT"));
        assert!(out.contains("  Quantity: 12500 kg"));
        assert!(out.contains("No waste collection details available."));
    }

    #[test]
    fn test_save_and_load_ledger() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = EngineConfig {
            ledger_path: dir.path().join("dateDATA.txt"),
            ..EngineConfig::default()
        };
        let net = belgaum();
        let (out, filed) = run_script(&net, config, "10\n1\n4\n01/02/2024\n9\n8\n10\n11\n");
        assert_eq!(filed, 1);
        assert!(out.contains("Error: Unable to access file"));
        assert!(out.contains("Data stored successfully in"));
        assert!(out.contains("Date: 01/02/2024"));
        assert!(out.contains("Route: Kanabargi -> Shivaji Nagar -> Tilakwadi"));
        assert!(out.contains("End of File Content"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let net = belgaum();
        let (out, filed) = run_script(&net, EngineConfig::default(), "1\n4\n");
        assert_eq!(filed, 0);
        assert!(!out.contains("Exiting the program."));
    }
}
