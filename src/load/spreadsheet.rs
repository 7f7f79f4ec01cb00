use super::{Cell, RawGrid};
use crate::error::RosterError;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use tracing::debug;

/// Read the first sheet of an Excel workbook into a grid.
///
/// calamine returns the *used* range of a sheet, which may not begin at A1;
/// leading empty rows/columns are re-inserted so that grid indexing matches
/// the file exactly, keeping the spreadsheet and delimited paths equivalent.
pub fn read_grid(bytes: &[u8]) -> Result<RawGrid, RosterError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| RosterError::UnreadableInput(format!("opening workbook: {}", e)))?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RosterError::UnreadableInput("workbook has no sheets".to_string()))?;
    debug!(sheet = %first_sheet, "reading first worksheet");

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| RosterError::UnreadableInput(format!("reading sheet {}: {}", first_sheet, e)))?;

    let (row_offset, col_offset) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => (0, 0),
    };

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(row_offset + range.height());
    for _ in 0..row_offset {
        rows.push(Vec::new());
    }
    for sheet_row in range.rows() {
        let mut row = Vec::with_capacity(col_offset + sheet_row.len());
        row.extend(std::iter::repeat(Cell::Empty).take(col_offset));
        row.extend(sheet_row.iter().map(convert_cell));
        rows.push(row);
    }

    Ok(RawGrid { rows })
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Cell::DateTime(naive),
            None => Cell::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        // formula errors read as missing values, like any other unusable cell
        Data::Error(_) => Cell::Empty,
    }
}
