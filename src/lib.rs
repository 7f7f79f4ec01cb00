//! Convert a parliamentary sitting roster (Excel or CSV) into a filtered
//! table of one member's speaking slots plus a ZIP of `.ics` calendar
//! documents, one per slot.
//!
//! The whole pipeline is the single call [`roster::process`]:
//!
//! ```no_run
//! use rostercal::{config::RosterConfig, roster};
//!
//! let bytes = std::fs::read("roster.xlsx").unwrap();
//! let artifacts = roster::process(&bytes, "roster.xlsx", &RosterConfig::default()).unwrap();
//! std::fs::write("events.csv", &artifacts.table_csv).unwrap();
//! std::fs::write("calendar.zip", &artifacts.calendar_zip).unwrap();
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod load;
pub mod roster;

pub use config::{Attendee, RosterConfig};
pub use error::RosterError;
pub use roster::{process, EventRow, Location, RosterArtifacts};
