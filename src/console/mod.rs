//! Menu-driven operator console.
//!
//! Reads numbered commands from any [`BufRead`](std::io::BufRead) and
//! writes reports to any [`Write`](std::io::Write), so sessions can be
//! scripted in tests.

mod command;
mod report;
mod session;

pub use command::Command;
pub use session::Console;
