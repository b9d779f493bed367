// Static record schemas and column binding
//
// Column-to-field binding is declared per record type at initialization
// time through `Record::FIELDS`; there is no runtime type inspection.

use crate::cell::{CellKind, CellValue};
use crate::errors::ExportError;
use crate::profile::ExportProfile;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// One entry of a record type's static field table.
#[derive(Copy, Clone, Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: CellKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: CellKind) -> Self {
        FieldDef { name, kind }
    }
}

/// A record type that can cross the tabular codec boundary.
///
/// `FIELDS` is the complete, ordered field table of the type; `field_value`
/// resolves one field to its coerced cell representation. Nested-reference
/// fields appear in `FIELDS` (so the completeness check can guard them) but
/// resolve to `None`: they are exported through synthetic columns, never
/// as raw references.
pub trait Record {
    const TYPE_NAME: &'static str;
    const FIELDS: &'static [FieldDef];

    fn field_value(&self, name: &str) -> Option<CellValue>;

    fn field_def(name: &str) -> Option<&'static FieldDef> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }
}

type Resolver<T> = Box<dyn Fn(&T) -> Result<CellValue, String> + Send + Sync>;

/// One exportable column: a unique name, a declared kind, and a resolver
/// bound either to a record field or to a custom accessor.
pub struct Column<T> {
    name: String,
    kind: CellKind,
    resolve: Resolver<T>,
}

impl<T> Column<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn resolve(&self, record: &T) -> Result<CellValue, String> {
        (self.resolve)(record)
    }
}

// Resolvers are opaque closures, so only the declared shape is printed.
impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered column list for one sheet. Built once per export call and
/// immutable afterwards; emission order is insertion order.
pub struct ColumnSpec<T> {
    sheet_name: String,
    columns: Vec<Column<T>>,
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("sheet_name", &self.sheet_name)
            .field("columns", &self.columns)
            .finish()
    }
}

impl<T: Record> ColumnSpec<T> {
    pub fn new(sheet_name: &str) -> Self {
        ColumnSpec {
            sheet_name: sheet_name.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Declared kinds of every column whose name is not a field of `T`,
    /// in the shape [`SheetSchema::derive`] expects for its synthetic
    /// lookup. Renamed and synthetic columns both land here.
    pub fn reader_kinds(&self) -> HashMap<String, CellKind> {
        self.columns
            .iter()
            .filter(|c| T::field_def(&c.name).is_none())
            .map(|c| (c.name.clone(), c.kind))
            .collect()
    }

    /// Binds a column named after the field itself.
    pub fn field(&mut self, name: &'static str) -> Result<&mut Self, ExportError> {
        self.field_as(name, name)
    }

    /// Binds a column whose exported name differs from the field name
    /// (e.g. "OrderId" reading the `Id` field).
    pub fn field_as(
        &mut self,
        column: &str,
        field: &'static str,
    ) -> Result<&mut Self, ExportError> {
        let def = T::field_def(field).ok_or_else(|| ExportError::SchemaMismatch {
            column: column.to_string(),
        })?;
        let kind = def.kind;
        self.push_column(column, kind, move |record: &T| {
            Ok(record.field_value(field).unwrap_or(CellValue::Empty))
        });
        Ok(self)
    }

    /// Binds a synthetic column to a custom accessor. Used for denormalized
    /// display values such as resolved picture paths or country names.
    pub fn synthetic<F>(&mut self, column: &str, kind: CellKind, accessor: F) -> &mut Self
    where
        F: Fn(&T) -> Result<CellValue, String> + Send + Sync + 'static,
    {
        self.push_column(column, kind, accessor);
        self
    }

    fn push_column<F>(&mut self, column: &str, kind: CellKind, accessor: F)
    where
        F: Fn(&T) -> Result<CellValue, String> + Send + Sync + 'static,
    {
        debug_assert!(
            !self.columns.iter().any(|c| c.name == column),
            "duplicate column '{}' in {} spec",
            column,
            T::TYPE_NAME
        );
        self.columns.push(Column {
            name: column.to_string(),
            kind,
            resolve: Box::new(accessor),
        });
    }
}

/// Column order and declared kinds of one sheet, derived from its header
/// row. The header is authoritative: decoding never assumes the writer's
/// column order.
#[derive(Clone, Debug)]
pub struct SheetSchema {
    columns: Vec<(String, CellKind)>,
}

impl SheetSchema {
    /// Derives the schema by matching header names against `T::FIELDS`,
    /// left to right, exact and case-sensitive. Header names with no field
    /// must appear in `synthetic_kinds` or the derivation fails.
    pub fn derive<T: Record>(
        header: &[String],
        synthetic_kinds: &HashMap<String, CellKind>,
    ) -> Result<Self, ExportError> {
        let mut columns = Vec::with_capacity(header.len());
        for name in header {
            let kind = match T::field_def(name) {
                Some(def) => def.kind,
                None => *synthetic_kinds.get(name).ok_or_else(|| {
                    ExportError::SchemaMismatch {
                        column: name.clone(),
                    }
                })?,
            };
            columns.push((name.clone(), kind));
        }
        debug!(
            record_type = T::TYPE_NAME,
            columns = columns.len(),
            "Derived sheet schema"
        );
        Ok(SheetSchema { columns })
    }

    pub fn columns(&self) -> &[(String, CellKind)] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Verifies that every non-ignored field of `T` is covered by a column:
/// either a column carrying the field's own name, or one whose name the
/// profile's replacement map sends to the field.
///
/// This guards the schema contract, not values: a field added to a record
/// without a matching column (or an ignore entry) must fail here.
pub fn verify_all_fields_covered<T: Record>(
    spec: &ColumnSpec<T>,
    profile: &ExportProfile,
) -> Result<(), ExportError> {
    for def in T::FIELDS {
        if profile.is_ignored(def.name) {
            continue;
        }
        let covered = spec
            .columns
            .iter()
            .any(|column| profile.field_for_column(&column.name) == def.name);
        if !covered {
            return Err(ExportError::MissingColumn {
                field: def.name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ExportProfile;

    struct Sample {
        id: i32,
        name: String,
    }

    impl Record for Sample {
        const TYPE_NAME: &'static str = "Sample";
        const FIELDS: &'static [FieldDef] = &[
            FieldDef::new("Id", CellKind::Integer),
            FieldDef::new("Name", CellKind::Text),
        ];

        fn field_value(&self, name: &str) -> Option<CellValue> {
            match name {
                "Id" => Some(CellValue::from_i32(self.id)),
                "Name" => Some(CellValue::text(&self.name)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_derive_matches_fields_exactly() {
        let header = vec!["Name".to_string(), "Id".to_string()];
        let schema = SheetSchema::derive::<Sample>(&header, &HashMap::new()).unwrap();
        assert_eq!(
            schema.columns(),
            &[
                ("Name".to_string(), CellKind::Text),
                ("Id".to_string(), CellKind::Integer)
            ]
        );
    }

    #[test]
    fn test_derive_is_case_sensitive() {
        let header = vec!["id".to_string()];
        let err = SheetSchema::derive::<Sample>(&header, &HashMap::new()).unwrap_err();
        assert!(matches!(err, ExportError::SchemaMismatch { column } if column == "id"));
    }

    #[test]
    fn test_derive_accepts_registered_synthetic() {
        let header = vec!["Id".to_string(), "DisplayPath".to_string()];
        let mut synthetic = HashMap::new();
        synthetic.insert("DisplayPath".to_string(), CellKind::Text);
        let schema = SheetSchema::derive::<Sample>(&header, &synthetic).unwrap();
        assert_eq!(schema.width(), 2);
    }

    #[test]
    fn test_field_as_unknown_field_fails() {
        let mut spec = ColumnSpec::<Sample>::new("Samples");
        let err = spec.field_as("SampleId", "Missing").unwrap_err();
        assert!(matches!(err, ExportError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_completeness_passes_with_replacement() {
        let mut spec = ColumnSpec::<Sample>::new("Samples");
        spec.field_as("SampleId", "Id").unwrap();
        spec.field("Name").unwrap();

        let mut profile = ExportProfile::default();
        profile.add_replacement("SampleId", "Id");
        verify_all_fields_covered(&spec, &profile).unwrap();
    }

    #[test]
    fn test_completeness_reports_uncovered_field() {
        let mut spec = ColumnSpec::<Sample>::new("Samples");
        spec.field("Name").unwrap();

        let err = verify_all_fields_covered(&spec, &ExportProfile::default()).unwrap_err();
        assert!(matches!(err, ExportError::MissingColumn { field } if field == "Id"));
    }

    #[test]
    fn test_completeness_skips_ignored_field() {
        let mut spec = ColumnSpec::<Sample>::new("Samples");
        spec.field("Name").unwrap();

        let mut profile = ExportProfile::default();
        profile.ignore("Id");
        verify_all_fields_covered(&spec, &profile).unwrap();
    }

    #[test]
    fn test_spec_debug_prints_columns_without_resolvers() {
        let mut spec = ColumnSpec::<Sample>::new("Samples");
        spec.field("Id").unwrap();
        // unwrap_err on a builder result renders this shape, so it has to
        // format despite the boxed resolvers.
        let rendered = format!("{spec:?}");
        assert!(rendered.contains("Samples"));
        assert!(rendered.contains("Id"));
        assert!(rendered.contains("Integer"));
    }

    #[test]
    fn test_column_resolves_field_value() {
        let mut spec = ColumnSpec::<Sample>::new("Samples");
        spec.field("Id").unwrap();
        let sample = Sample {
            id: 7,
            name: "seven".to_string(),
        };
        let value = spec.columns()[0].resolve(&sample).unwrap();
        assert_eq!(value, CellValue::Number(7.0));
    }
}
