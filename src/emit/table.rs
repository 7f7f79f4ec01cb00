use crate::error::RosterError;
use crate::roster::EventRow;

/// Serialize the filtered events as UTF-8 CSV bytes: one header row
/// (`Weekday,Date,Notes,Event Type,Person,Location`), one row per event,
/// fields quoted when they contain the delimiter.
pub fn to_csv_bytes(events: &[EventRow]) -> Result<Vec<u8>, RosterError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for event in events {
        wtr.serialize(event)
            .map_err(|e| RosterError::Table(e.to_string()))?;
    }
    wtr.into_inner()
        .map_err(|e| RosterError::Table(e.to_string()))
}
