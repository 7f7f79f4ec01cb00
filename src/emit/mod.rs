// src/emit/mod.rs

pub mod archive;
pub mod ics;
pub mod table;

pub use archive::bundle;
pub use ics::{build_document, escape_text, CalendarDocument};
pub use table::to_csv_bytes;
