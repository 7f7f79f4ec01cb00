use super::dates::coerce_date;
use super::normalize::NormalizedTable;
use crate::config::RosterConfig;
use crate::error::RosterError;
use chrono::NaiveDate;
use regex::RegexBuilder;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Where an event takes place, inferred from the event type and notes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    #[serde(rename = "Federation Chamber")]
    FederationChamber,
    #[serde(rename = "House of Representatives Chamber")]
    HouseChamber,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Location {
    /// Classify from the lowercase concatenation of event type and notes.
    /// "fed chamber" is checked before the bare "chamber" so the more
    /// specific venue wins.
    pub fn classify(event_type: &str, notes: &str) -> Location {
        let blob = format!("{} {}", event_type, notes).to_lowercase();
        if blob.contains("fed chamber") {
            Location::FederationChamber
        } else if blob.contains("chamber") {
            Location::HouseChamber
        } else {
            Location::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::FederationChamber => "Federation Chamber",
            Location::HouseChamber => "House of Representatives Chamber",
            Location::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (date, event type, assigned member) speaking slot.
///
/// Field order is the column order of the emitted events table; `date`
/// serializes as an ISO calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    #[serde(rename = "Weekday")]
    pub weekday: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Event Type")]
    pub event_type: String,
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "Location")]
    pub location: Location,
}

/// Melt the wide per-event-type columns into one row per slot, keep the rows
/// that mention the configured member, classify locations, and sort by date.
///
/// Rows whose Date cell cannot be resolved are dropped here, a data quality
/// policy rather than an error. Zero surviving rows after the name filter is
/// [`RosterError::NoMatchingEvents`].
pub fn reshape(table: &NormalizedTable, config: &RosterConfig) -> Result<Vec<EventRow>, RosterError> {
    let member_re = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&config.member)))
        .case_insensitive(true)
        .build()
        .expect("escaped member name is a valid pattern");

    let mut events = Vec::new();
    let mut dropped = 0usize;

    for row in &table.rows {
        let date = match coerce_date(&row[1], config.fallback_year) {
            Some(d) => d,
            None => {
                dropped += 1;
                debug!(weekday = %row[0].text(), raw = %row[1].text(), "dropping row with unresolvable date");
                continue;
            }
        };
        let weekday = row[0].text();
        let notes = row[table.notes_idx].text();

        // melt: one candidate per non-id column, in column order within the row
        for (idx, column) in table.columns.iter().enumerate() {
            if idx < 2 || idx == table.notes_idx {
                continue;
            }
            let person = row[idx].text();
            if !member_re.is_match(&person) {
                continue;
            }
            events.push(EventRow {
                weekday: weekday.clone(),
                date,
                notes: notes.clone(),
                event_type: column.clone(),
                person,
                location: Location::Unknown,
            });
        }
    }

    if dropped > 0 {
        debug!(dropped, "rows skipped for unresolvable dates");
    }
    if events.is_empty() {
        return Err(RosterError::NoMatchingEvents {
            pattern: config.member.clone(),
        });
    }

    // location is a pure function of two already-melted fields
    for event in &mut events {
        event.location = Location::classify(&event.event_type, &event.notes);
    }

    // stable: same-date rows keep melt order
    events.sort_by_key(|e| e.date);

    Ok(events)
}
