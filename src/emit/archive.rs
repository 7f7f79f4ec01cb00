use super::ics::CalendarDocument;
use crate::error::RosterError;
use std::io::{Cursor, Write};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Bundle the calendar documents into one deflate-compressed ZIP held
/// entirely in memory. Entry names are the documents' sanitized names plus
/// the `.ics` extension.
pub fn bundle(documents: &[CalendarDocument]) -> Result<Vec<u8>, RosterError> {
    let mut buf = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buf));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for doc in documents {
        zip.start_file(format!("{}.ics", doc.file_name), options)
            .map_err(|e| RosterError::Archive(e.to_string()))?;
        zip.write_all(doc.content.as_bytes())
            .map_err(|e| RosterError::Archive(e.to_string()))?;
    }
    zip.finish()
        .map_err(|e| RosterError::Archive(e.to_string()))?;

    Ok(buf)
}
