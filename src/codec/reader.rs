// Read path: decode an xlsx buffer back into named cell values

use crate::cell::{decode_cell, CellKind, CellValue};
use crate::errors::ExportError;
use crate::schema::{Record, SheetSchema};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Cursor;
use tracing::{debug, instrument};

/// One decoded data row: field name paired with its coerced value, in
/// header order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRow {
    cells: Vec<(String, CellValue)>,
}

impl DecodedRow {
    pub fn cells(&self) -> &[(String, CellValue)] {
        &self.cells
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(cell_name, _)| cell_name == name)
            .map(|(_, value)| value)
    }

    /// Renders the row as a JSON object keyed by column name, with empty
    /// cells as null.
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        for (name, value) in &self.cells {
            let json = match value {
                CellValue::Empty => Value::Null,
                CellValue::Bool(b) => json!(b),
                CellValue::Number(n) => json!(n),
                CellValue::Text(s) => json!(s),
            };
            object.insert(name.clone(), json);
        }
        Value::Object(object)
    }
}

/// Decode an xlsx buffer produced for records of type `T`.
///
/// The header row names the columns, so the sheet itself dictates column
/// order and width. `start_row` is one-based with row 1 being the header;
/// data rows are read from `start_row` to the end of the sheet. Synthetic
/// columns absent from `T::FIELDS` are typed through `synthetic_kinds`.
#[instrument(skip(buffer, synthetic_kinds), fields(record_type = T::TYPE_NAME, bytes = buffer.len()))]
pub fn decode<T: Record>(
    buffer: &[u8],
    start_row: u32,
    synthetic_kinds: &HashMap<String, CellKind>,
) -> Result<Vec<DecodedRow>, ExportError> {
    if start_row < 2 {
        return Err(ExportError::MalformedSheet(format!(
            "start_row must be at least 2, got {start_row}"
        )));
    }

    let cursor = Cursor::new(buffer.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExportError::MalformedSheet("workbook has no worksheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let header_cells = rows
        .next()
        .ok_or_else(|| ExportError::MalformedSheet("worksheet is empty".to_string()))?;
    let header = header_row(header_cells)?;
    let schema = SheetSchema::derive::<T>(&header, synthetic_kinds)?;

    let mut decoded = Vec::new();
    for (offset, row) in rows.enumerate() {
        // rows() yielded the header as row 1, so data offsets start at row 2
        let row_number = offset as u32 + 2;
        if row_number < start_row {
            continue;
        }
        if row.len() != schema.width() {
            return Err(ExportError::MalformedSheet(format!(
                "row {} has {} cells, expected {}",
                row_number,
                row.len(),
                schema.width()
            )));
        }
        let mut cells = Vec::with_capacity(schema.width());
        for ((name, kind), data) in schema.columns().iter().zip(row.iter()) {
            let value = decode_cell(data, *kind).map_err(|reason| {
                ExportError::MalformedSheet(format!(
                    "row {row_number}, column '{name}': {reason}"
                ))
            })?;
            cells.push((name.clone(), value));
        }
        decoded.push(DecodedRow { cells });
    }

    debug!(rows = decoded.len(), sheet = %sheet_name, "Decoded worksheet");
    Ok(decoded)
}

fn header_row(cells: &[Data]) -> Result<Vec<String>, ExportError> {
    cells
        .iter()
        .enumerate()
        .map(|(col, data)| match data {
            Data::String(s) if !s.trim().is_empty() => Ok(s.clone()),
            other => Err(ExportError::MalformedSheet(format!(
                "header cell {col} is not a column name: {other:?}"
            ))),
        })
        .collect()
}
