// Error handling framework for the export/import engine

use thiserror::Error;

/// Errors raised by schema derivation, encoding, decoding, and the
/// completeness check. All of them are terminal for the call that raised
/// them; nothing is retried internally and no partial output is returned.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Column '{column}' matches no record field and no synthetic accessor")]
    SchemaMismatch { column: String },

    #[error("Cannot coerce column '{column}' at record {record}: {reason}")]
    Coercion {
        column: String,
        record: usize,
        reason: String,
    },

    #[error("Malformed sheet: {0}")]
    MalformedSheet(String),

    #[error("Field '{field}' is not covered by any column")]
    MissingColumn { field: String },

    #[error("Workbook error: {0}")]
    Workbook(String),
}

// External workbook-library errors are wrapped rather than exposed so the
// container format stays out of the public contract.
impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Workbook(err.to_string())
    }
}

impl From<calamine::Error> for ExportError {
    fn from(err: calamine::Error) -> Self {
        ExportError::Workbook(err.to_string())
    }
}

/// Configuration errors raised while loading export profiles
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Invalid profile for '{record_type}': {reason}")]
    InvalidProfile { record_type: String, reason: String },
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::LoadFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_error_names_column_and_record() {
        let err = ExportError::Coercion {
            column: "OrderTotal".to_string(),
            record: 3,
            reason: "not a number".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("OrderTotal"));
        assert!(message.contains("record 3"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = ExportError::MissingColumn {
            field: "Gtin".to_string(),
        };
        assert!(err.to_string().contains("Gtin"));
    }
}
