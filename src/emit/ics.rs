use crate::config::RosterConfig;
use crate::roster::EventRow;
use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that may not appear in an archive entry name; everything
/// outside word characters, hyphen and space becomes an underscore.
static UNSAFE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\- ]").expect("unsafe filename pattern"));

/// One self-contained calendar-event text document, plus the sanitized name
/// it will carry inside the archive (extension added at bundling time).
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    pub file_name: String,
    pub content: String,
}

/// Escape text for embedding in a calendar document property. Backslashes
/// are doubled first so the later replacements cannot double-escape.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

/// Render one event as a single-event VCALENDAR document.
///
/// The slot starts at the configured wall-clock time (default 09:00) in the
/// configured named timezone on the event's date and runs for the configured
/// duration. The title is the first line of the event type.
pub fn build_document(event: &EventRow, config: &RosterConfig) -> CalendarDocument {
    let start = event.date.and_time(config.start_time);
    let end = start + Duration::minutes(config.duration_minutes);
    let title = event.event_type.lines().next().unwrap_or("").trim();

    let summary = format!("{} – {}", title, start.format("%d %b"));

    let mut description_lines = vec![
        event.event_type.trim().to_string(),
        String::new(),
        "-".repeat(29),
        format!("Speaker: {}", event.person),
    ];
    if !event.notes.is_empty() {
        description_lines.push(format!("Notes: {}", event.notes));
    }
    let description = description_lines.join("\n");

    let tz = config.timezone.name();
    let content = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", config.product_id),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART;TZID={}:{}", tz, start.format("%Y%m%dT%H%M%S")),
        format!("DTEND;TZID={}:{}", tz, end.format("%Y%m%dT%H%M%S")),
        format!("SUMMARY:{}", escape_text(&summary)),
        format!("DESCRIPTION:{}", escape_text(&description)),
        format!("LOCATION:{}", escape_text(event.location.as_str())),
        format!(
            "ATTENDEE;CN={};ROLE=REQ-PARTICIPANT;PARTSTAT=NEEDS-ACTION;RSVP=TRUE:mailto:{}",
            config.attendee.common_name, config.attendee.email
        ),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
    .join("\n");

    let raw_name = format!("{} – {}", start.format("%Y-%m-%d"), title);
    let file_name = UNSAFE_NAME_RE.replace_all(&raw_name, "_").into_owned();

    CalendarDocument { file_name, content }
}
