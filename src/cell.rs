// Logical cell model: values, declared column kinds, and coercion rules

use crate::errors::ExportError;
use calamine::Data;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

/// Declared type of a column. Drives the read-path coercion and documents
/// the write-path representation (`Integer` also covers enum codes).
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CellKind {
    Bool,
    Integer,
    Decimal,
    /// OLE Automation serial: fractional days since 1899-12-30 (1900 date system)
    DateTime,
    /// Canonical hyphenated string representation
    Uuid,
    Text,
}

/// A single logical cell value. This is the only shape that crosses the
/// codec boundary in either direction.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn from_i32(value: i32) -> Self {
        CellValue::Number(value as f64)
    }

    pub fn from_f64(value: f64) -> Self {
        CellValue::Number(value)
    }

    pub fn from_bool(value: bool) -> Self {
        CellValue::Bool(value)
    }

    pub fn text(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }

    /// Absent strings encode as empty cells, never as errors.
    pub fn opt_text(value: &Option<String>) -> Self {
        match value {
            Some(text) => CellValue::Text(text.clone()),
            None => CellValue::Empty,
        }
    }

    pub fn from_uuid(value: &Uuid) -> Self {
        CellValue::Text(value.to_string())
    }

    pub fn from_datetime(value: &DateTime<Utc>) -> Self {
        CellValue::Number(datetime_to_serial(value))
    }

    pub fn from_opt_datetime(value: &Option<DateTime<Utc>>) -> Self {
        match value {
            Some(dt) => Self::from_datetime(dt),
            None => CellValue::Empty,
        }
    }

    pub fn from_enum<E: EnumCode>(value: E) -> Self {
        CellValue::Number(value.code() as f64)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Enums exported as their underlying integer code.
pub trait EnumCode: Sized + Copy {
    /// Human-readable enum name used in coercion errors
    const NAME: &'static str;

    fn code(self) -> i32;

    fn from_code(code: i32) -> Option<Self>;

    /// Inverse coercion with out-of-range rejection.
    fn try_from_code(code: i32, column: &str, record: usize) -> Result<Self, ExportError> {
        Self::from_code(code).ok_or_else(|| ExportError::Coercion {
            column: column.to_string(),
            record,
            reason: format!("{} is not a valid {} code", code, Self::NAME),
        })
    }
}

// The 1900 date system stores day zero as 1899-12-30, which makes modern
// dates line up with OADate values produced by other platforms.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("epoch literal")
}

/// Converts a UTC datetime to its spreadsheet serial representation.
pub fn datetime_to_serial(value: &DateTime<Utc>) -> f64 {
    let epoch = serial_epoch().and_hms_opt(0, 0, 0).expect("epoch midnight");
    let elapsed = value.naive_utc() - epoch;
    elapsed.num_milliseconds() as f64 / 86_400_000.0
}

/// Converts a spreadsheet serial back to a UTC datetime, rounded to whole
/// milliseconds so that `datetime_to_serial` round-trips.
pub fn serial_to_datetime(serial: f64) -> Option<DateTime<Utc>> {
    let epoch = serial_epoch().and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    let naive = epoch.checked_add_signed(Duration::milliseconds(millis as i64))?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Decodes one raw sheet cell into the column's declared kind. The error
/// carries only the reason; the reader wraps it with cell position.
pub fn decode_cell(data: &Data, kind: CellKind) -> Result<CellValue, String> {
    // Empty cells are valid for every kind: absent values round-trip as Empty.
    if matches!(data, Data::Empty) {
        return Ok(CellValue::Empty);
    }

    match kind {
        CellKind::Bool => match data {
            Data::Bool(b) => Ok(CellValue::Bool(*b)),
            other => Err(format!("expected a boolean cell, found {:?}", other)),
        },
        CellKind::Integer => match data {
            Data::Int(i) => Ok(CellValue::Number(*i as f64)),
            Data::Float(f) if f.fract() == 0.0 => Ok(CellValue::Number(*f)),
            Data::String(s) => s
                .trim()
                .parse::<i64>()
                .map(|i| CellValue::Number(i as f64))
                .map_err(|_| format!("'{}' is not an integer", s)),
            other => Err(format!("expected an integer cell, found {:?}", other)),
        },
        CellKind::Decimal => match data {
            Data::Int(i) => Ok(CellValue::Number(*i as f64)),
            Data::Float(f) => Ok(CellValue::Number(*f)),
            Data::String(s) => s
                .trim()
                .parse::<f64>()
                .map(CellValue::Number)
                .map_err(|_| format!("'{}' is not a number", s)),
            other => Err(format!("expected a numeric cell, found {:?}", other)),
        },
        CellKind::DateTime => match data {
            Data::Int(i) => Ok(CellValue::Number(*i as f64)),
            Data::Float(f) => Ok(CellValue::Number(*f)),
            Data::DateTime(dt) => Ok(CellValue::Number(dt.as_f64())),
            other => Err(format!("expected a date serial cell, found {:?}", other)),
        },
        CellKind::Uuid => match data {
            Data::String(s) => Uuid::parse_str(s)
                .map(|_| CellValue::Text(s.clone()))
                .map_err(|_| format!("'{}' is not a UUID", s)),
            other => Err(format!("expected a UUID cell, found {:?}", other)),
        },
        CellKind::Text => match data {
            Data::String(s) => Ok(CellValue::Text(s.clone())),
            Data::Bool(b) => Ok(CellValue::Text(if *b { "true" } else { "false" }.to_string())),
            Data::Int(i) => Ok(CellValue::Text(i.to_string())),
            Data::Float(f) => Ok(CellValue::Text(f.to_string())),
            other => Err(format!("unsupported text cell {:?}", other)),
        },
    }
}
