use crate::error::RosterError;
use crate::load::{Cell, RawGrid};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Matches a header cell meaning "the notes column": `note` or `notes`, any
/// case, surrounding whitespace tolerated, nothing else in the cell.
static NOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*notes?\s*$").expect("notes header pattern"));

/// The roster after header interpretation: grid row 1 supplies the column
/// labels, rows 2+ are data, and exactly one column is the canonical `Notes`.
#[derive(Debug)]
pub struct NormalizedTable {
    /// `[Weekday, Date, <event type labels...>]`, padded to grid width.
    pub columns: Vec<String>,
    /// Index of the canonical Notes column within `columns`.
    pub notes_idx: usize,
    /// Data rows, each padded with empty cells to `columns.len()`.
    pub rows: Vec<Vec<Cell>>,
}

/// Interpret the raw grid: row 0 is decoration (weekday/date banners) and is
/// never read, row 1 holds the column labels, rows 2+ hold the data.
///
/// The first two columns are always named `Weekday` and `Date` regardless of
/// their row-1 labels. If no label looks like a notes column, the *last*
/// label is renamed `Notes` unconditionally; rosters without a genuine notes
/// column will have their final event column mislabeled, which matches the
/// historical behaviour of this pipeline.
pub fn normalize(grid: RawGrid) -> Result<NormalizedTable, RosterError> {
    if grid.rows.len() < 3 {
        return Err(RosterError::MalformedRoster(format!(
            "need two header rows plus at least one data row, found {} rows",
            grid.rows.len()
        )));
    }
    let width = grid.width();
    if width < 3 {
        return Err(RosterError::MalformedRoster(format!(
            "need at least Weekday, Date and one event column, found {} columns",
            width
        )));
    }

    // row 1 → labels, rendered to text and padded to the grid width
    let mut labels: Vec<String> = grid.rows[1].iter().map(Cell::text).collect();
    labels.resize(width, String::new());

    let notes_idx = canonicalize_notes(&mut labels);
    debug!(notes_idx, "canonical Notes column");

    let mut columns = vec!["Weekday".to_string(), "Date".to_string()];
    columns.extend(labels.into_iter().skip(2));

    let rows: Vec<Vec<Cell>> = grid
        .rows
        .into_iter()
        .skip(2)
        .map(|mut row| {
            row.resize(width, Cell::Empty);
            row
        })
        .collect();

    Ok(NormalizedTable {
        columns,
        notes_idx,
        rows,
    })
}

/// Rewrite the first notes-like label to `Notes` and return its index; if
/// none matches, rename the last label.
fn canonicalize_notes(labels: &mut [String]) -> usize {
    for (i, label) in labels.iter_mut().enumerate() {
        if NOTES_RE.is_match(label) {
            *label = "Notes".to_string();
            return i;
        }
    }
    let last = labels.len() - 1;
    labels[last] = "Notes".to_string();
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<&str>>) -> RawGrid {
        RawGrid {
            rows: rows
                .into_iter()
                .map(|r| {
                    r.into_iter()
                        .map(|c| {
                            if c.is_empty() {
                                Cell::Empty
                            } else {
                                Cell::Text(c.to_string())
                            }
                        })
                        .collect()
                })
                .collect(),
        }
    }

    #[test]
    fn lowercase_note_header_is_canonicalized() {
        let g = grid(vec![
            vec!["", "", "", ""],
            vec!["day", "date", "Question Time", "note"],
            vec!["Mon", "3-Feb", "Ryan", "Fed Chamber"],
        ]);
        let table = normalize(g).unwrap();
        assert_eq!(table.columns, vec!["Weekday", "Date", "Question Time", "Notes"]);
        assert_eq!(table.notes_idx, 3);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][3], Cell::Text("Fed Chamber".into()));
    }

    #[test]
    fn notes_with_trailing_s_and_whitespace_matches() {
        let g = grid(vec![
            vec!["", "", "", ""],
            vec!["day", "date", " Notes ", "90s Statements"],
            vec!["Mon", "3-Feb", "x", "y"],
        ]);
        let table = normalize(g).unwrap();
        assert_eq!(table.notes_idx, 2);
        assert_eq!(table.columns[2], "Notes");
        // the later column is untouched
        assert_eq!(table.columns[3], "90s Statements");
    }

    #[test]
    fn missing_notes_header_renames_last_column() {
        let g = grid(vec![
            vec!["", "", "", ""],
            vec!["day", "date", "Question Time", "Adjournment"],
            vec!["Mon", "3-Feb", "Ryan", "Smith"],
        ]);
        let table = normalize(g).unwrap();
        assert_eq!(table.columns, vec!["Weekday", "Date", "Question Time", "Notes"]);
        assert_eq!(table.notes_idx, 3);
    }

    #[test]
    fn first_two_labels_are_ignored() {
        let g = grid(vec![
            vec!["", "", ""],
            vec!["whatever", "anything", "Notes"],
            vec!["Mon", "3-Feb", "n"],
        ]);
        let table = normalize(g).unwrap();
        assert_eq!(table.columns[0], "Weekday");
        assert_eq!(table.columns[1], "Date");
    }

    #[test]
    fn short_rows_are_padded() {
        let g = grid(vec![
            vec!["", "", "", ""],
            vec!["d", "d", "QT", "Notes"],
            vec!["Mon", "3-Feb"],
        ]);
        let table = normalize(g).unwrap();
        assert_eq!(table.rows[0].len(), 4);
        assert_eq!(table.rows[0][2], Cell::Empty);
    }

    #[test]
    fn too_few_rows_is_malformed() {
        let g = grid(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
        assert!(matches!(
            normalize(g).unwrap_err(),
            RosterError::MalformedRoster(_)
        ));
    }

    #[test]
    fn too_few_columns_is_malformed() {
        let g = grid(vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
        assert!(matches!(
            normalize(g).unwrap_err(),
            RosterError::MalformedRoster(_)
        ));
    }
}
