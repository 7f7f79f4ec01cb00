// src/roster/mod.rs

pub mod dates;
pub mod normalize;
pub mod reshape;

pub use dates::coerce_date;
pub use normalize::{normalize, NormalizedTable};
pub use reshape::{reshape, EventRow, Location};

use crate::config::RosterConfig;
use crate::emit;
use crate::error::RosterError;
use crate::load;
use tracing::info;

/// Everything one successful run produces. Either all three outputs exist or
/// the run failed with a single [`RosterError`]; there are no partial
/// artifacts.
#[derive(Debug)]
pub struct RosterArtifacts {
    /// Filtered speaking slots, sorted by date.
    pub events: Vec<EventRow>,
    /// UTF-8 CSV of the same rows, header included.
    pub table_csv: Vec<u8>,
    /// ZIP archive with one `.ics` document per row.
    pub calendar_zip: Vec<u8>,
}

/// Run the whole pipeline on one uploaded roster: decode, normalize the
/// two-row header, melt and filter to the configured member's slots, then
/// serialize the events table and the calendar archive.
#[tracing::instrument(level = "info", skip(bytes, config), fields(file = %filename))]
pub fn process(
    bytes: &[u8],
    filename: &str,
    config: &RosterConfig,
) -> Result<RosterArtifacts, RosterError> {
    let grid = load::load_grid(bytes, filename)?;
    let table = normalize::normalize(grid)?;
    let events = reshape::reshape(&table, config)?;
    info!(count = events.len(), member = %config.member, "matched speaking slots");

    let table_csv = emit::to_csv_bytes(&events)?;
    let documents: Vec<emit::CalendarDocument> = events
        .iter()
        .map(|event| emit::build_document(event, config))
        .collect();
    let calendar_zip = emit::bundle(&documents)?;

    Ok(RosterArtifacts {
        events,
        table_csv,
        calendar_zip,
    })
}
