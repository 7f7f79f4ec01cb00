// src/load/mod.rs

mod delimited;
mod spreadsheet;

use crate::error::RosterError;
use std::path::Path;
use tracing::info;

/// One untyped cell of the loaded grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(chrono::NaiveDateTime),
}

impl Cell {
    /// Render the cell the way it would appear in the roster. `Empty` is the
    /// empty string, so downstream text operations never see a sentinel.
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format!("{}", n),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// True for `Empty` and for text that is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// The roster exactly as decoded: ordered rows of untyped cells, no header
/// interpretation. Row 0 is the file's literal first row.
#[derive(Debug)]
pub struct RawGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    /// Widest row in the grid. Rows are not padded here; the normalizer pads
    /// to this width.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Decode `bytes` into a [`RawGrid`], picking the decoder by filename
/// extension: `.xlsx`/`.xlsm`/`.xls` use the spreadsheet reader (first sheet
/// only), anything else is treated as delimited text.
pub fn load_grid(bytes: &[u8], filename: &str) -> Result<RawGrid, RosterError> {
    let grid = if is_spreadsheet(filename) {
        spreadsheet::read_grid(bytes)?
    } else {
        delimited::read_grid(bytes)?
    };
    info!(
        file = %filename,
        rows = grid.rows.len(),
        cols = grid.width(),
        "loaded roster grid"
    );
    Ok(grid)
}

fn is_spreadsheet(filename: &str) -> bool {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    matches!(ext.as_deref(), Some("xlsx") | Some("xlsm") | Some("xls"))
}
