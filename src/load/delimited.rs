use super::{Cell, RawGrid};
use crate::error::RosterError;
use csv::ReaderBuilder;
use std::io::Cursor;

/// Read delimited text into a grid with no header inference. Rows may have
/// different field counts; the normalizer pads them later.
pub fn read_grid(bytes: &[u8]) -> Result<RawGrid, RosterError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(bytes));

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .map_err(|e| RosterError::UnreadableInput(format!("CSV record {}: {}", idx, e)))?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(RawGrid { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_is_literal() {
        let grid = read_grid(b"a,b,c\n1,2,3\n").unwrap();
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0][0], Cell::Text("a".into()));
        assert_eq!(grid.rows[1][2], Cell::Text("3".into()));
    }

    #[test]
    fn empty_fields_become_empty_cells() {
        let grid = read_grid(b"a,,c\n").unwrap();
        assert_eq!(grid.rows[0][1], Cell::Empty);
    }

    #[test]
    fn ragged_rows_are_kept_ragged() {
        let grid = read_grid(b"a,b\nx,y,z,w\n").unwrap();
        assert_eq!(grid.rows[0].len(), 2);
        assert_eq!(grid.rows[1].len(), 4);
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn quoted_delimiters_stay_in_field() {
        let grid = read_grid(b"\"Question Time, Main\",b\n").unwrap();
        assert_eq!(grid.rows[0][0], Cell::Text("Question Time, Main".into()));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let err = read_grid(b"ok,\xff\xfe\n").unwrap_err();
        assert!(matches!(err, RosterError::UnreadableInput(_)));
    }
}
