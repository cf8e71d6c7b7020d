//! Numbered operator commands.

use std::str::FromStr;

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1. Allot a vehicle to a request.
    Allot,
    /// 2. List vehicles.
    ListVehicles,
    /// 3. List drivers.
    ListDrivers,
    /// 4. List pending requests.
    ListRequests,
    /// 5. Shortest route from the origin.
    ShortestRoute,
    /// 6. Longest-route estimate from the origin.
    LongestRoute,
    /// 7. Unallotted vehicles and drivers.
    ListAvailable,
    /// 8. Allocations grouped by date.
    ListAllocations,
    /// 9. Append the ledger to its file.
    SaveLedger,
    /// 10. Echo the ledger file.
    LoadLedger,
    /// 11. Leave the console.
    Exit,
}

impl Command {
    /// All commands in menu order.
    pub const ALL: [Command; 11] = [
        Command::Allot,
        Command::ListVehicles,
        Command::ListDrivers,
        Command::ListRequests,
        Command::ShortestRoute,
        Command::LongestRoute,
        Command::ListAvailable,
        Command::ListAllocations,
        Command::SaveLedger,
        Command::LoadLedger,
        Command::Exit,
    ];

    /// Menu number.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&c| c == self)
            .map_or(0, |i| i + 1)
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Command::Allot => "Allot Vehicle",
            Command::ListVehicles => "Display Vehicles",
            Command::ListDrivers => "Display Drivers",
            Command::ListRequests => "Display Wastes",
            Command::ShortestRoute => "Shortest Route Details",
            Command::LongestRoute => "Longest Route Details",
            Command::ListAvailable => "View Available Vehicles and Drivers",
            Command::ListAllocations => "Display Collected Waste by Date",
            Command::SaveLedger => "Save Collected Waste Data to File",
            Command::LoadLedger => "Load Data from File",
            Command::Exit => "Exit",
        }
    }
}

/// Input that is not a menu number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| UnknownCommand(s.trim().to_string()))
    }
}
