use onboard_core::DetailRow;
use rust_xlsxwriter::{Format, Workbook};

use crate::{ExportError, Tabular};

const DETAIL_SHEET: &str = "Detailed Data";

/// Workbook with a single sheet: a bold header row followed by one line per row.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if a cell cannot be written or the workbook
/// cannot be serialized.
pub fn workbook<T: Tabular>(sheet_name: &str, rows: &[T]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();
    for (row_idx, line) in (0u32..).zip(sheet_lines(rows)) {
        for (col, value) in (0u16..).zip(line) {
            if row_idx == 0 {
                worksheet.write_string_with_format(row_idx, col, value, &header_format)?;
            } else {
                worksheet.write_string(row_idx, col, value)?;
            }
        }
    }
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

/// Sheet content line by line: the header, then one line per row.
fn sheet_lines<T: Tabular>(rows: &[T]) -> Vec<Vec<&str>> {
    std::iter::once(T::header().to_vec())
        .chain(rows.iter().map(T::cells))
        .collect()
}

/// Spreadsheet of the detailed per-brand breakdown.
///
/// # Errors
///
/// See [`workbook`].
pub fn detail_workbook(rows: &[DetailRow]) -> Result<Vec<u8>, ExportError> {
    workbook(DETAIL_SHEET, rows)
}
