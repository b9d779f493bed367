// Write path: encode records through a column spec into an xlsx buffer

use crate::cell::CellValue;
use crate::errors::ExportError;
use crate::schema::{ColumnSpec, Record};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, instrument};

/// Encode records into an xlsx workbook buffer.
///
/// Row 0 carries the column names from the spec, so the output is
/// self-describing. Each record becomes one row, with every cell produced
/// by the column's resolver. A resolver failure aborts the whole encode
/// with the column name and zero-based record index; nothing partial is
/// returned.
#[instrument(skip(records, spec), fields(record_type = T::TYPE_NAME, records = records.len(), columns = spec.columns().len()))]
pub fn encode<T: Record>(records: &[T], spec: &ColumnSpec<T>) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(spec.sheet_name())?;

    for (col, column) in spec.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, column.name())?;
    }

    let blank = Format::new();
    for (row, record) in records.iter().enumerate() {
        for (col, column) in spec.columns().iter().enumerate() {
            let value = column.resolve(record).map_err(|reason| ExportError::Coercion {
                column: column.name().to_string(),
                record: row,
                reason,
            })?;
            let r = (row + 1) as u32;
            let c = col as u16;
            match value {
                CellValue::Empty => {
                    worksheet.write_blank(r, c, &blank)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, b)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(r, c, n)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(r, c, &s)?;
                }
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    debug!(bytes = buffer.len(), "Encoded workbook");
    Ok(buffer)
}
