use std::io::Write;

use crate::{ExportError, Tabular};

/// Write the header and every row as CSV, `\n`-terminated.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written or flushed.
pub fn write_csv<W: Write, T: Tabular>(writer: W, rows: &[T]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(T::header())?;
    for row in rows {
        csv_writer.write_record(row.cells())?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// CSV document as UTF-8 bytes.
///
/// # Errors
///
/// See [`write_csv`].
pub fn csv_bytes<T: Tabular>(rows: &[T]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    Ok(buf)
}
