use thiserror::Error;

/// Everything that can stop a roster run. Rows with unresolvable dates are
/// not represented here: they are dropped (and debug-logged) as a data
/// quality policy, not a failure.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The byte stream could not be decoded as a spreadsheet or as
    /// delimited text.
    #[error("could not read roster file: {0}")]
    UnreadableInput(String),

    /// The grid decoded, but is structurally too small to hold two header
    /// rows plus data, or the Weekday/Date/Notes columns.
    #[error("malformed roster: {0}")]
    MalformedRoster(String),

    /// Parsing succeeded but no cell mentions the configured member. This is
    /// terminal for the run; no table or archive bytes are produced.
    #[error(
        "no speaking slots mention \"{pattern}\": the roster was read but no cell \
         contains that name as a whole word; check the spelling or pass a different --member"
    )]
    NoMatchingEvents { pattern: String },

    /// Writing the events table into its in-memory buffer failed.
    #[error("failed to serialize events table: {0}")]
    Table(String),

    /// Writing the calendar archive into its in-memory buffer failed.
    #[error("failed to build calendar archive: {0}")]
    Archive(String),
}
