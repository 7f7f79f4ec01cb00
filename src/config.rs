use chrono::NaiveTime;
use chrono_tz::Tz;

/// The fixed attendee stamped onto every generated calendar document.
#[derive(Debug, Clone)]
pub struct Attendee {
    pub common_name: String,
    pub email: String,
}

/// Policy knobs for one roster run.
///
/// The defaults reproduce the original Crossbench roster behaviour: filter
/// for "Ryan", assume 2025 for year-less dates, book 09:00–10:00 slots in
/// Sydney time, and invite the electorate office.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Name matched as a whole word (case-insensitive) against each
    /// assignment cell.
    pub member: String,
    /// Year appended to date strings like "12-Jan" that carry no year.
    pub fallback_year: i32,
    /// Named timezone written into DTSTART/DTEND.
    pub timezone: Tz,
    /// Wall-clock start of every generated event.
    pub start_time: NaiveTime,
    /// Event length in minutes.
    pub duration_minutes: i64,
    /// PRODID line of each calendar document.
    pub product_id: String,
    pub attendee: Attendee,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            member: "Ryan".to_string(),
            fallback_year: 2025,
            timezone: chrono_tz::Australia::Sydney,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_minutes: 60,
            product_id: "-//Monique Ryan Calendar//EN".to_string(),
            attendee: Attendee {
                common_name: "Rosie Leonthomas".to_string(),
                email: "Rosie.Leonthomas@aph.gov.au".to_string(),
            },
        }
    }
}
