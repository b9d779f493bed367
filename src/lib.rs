// Statically-declared tabular export and import engine

pub mod cell;
pub mod codec;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod profile;
pub mod schema;
pub mod telemetry;

pub use cell::{CellKind, CellValue, EnumCode};
pub use codec::{decode, encode, DecodedRow};
pub use config::ExportSettings;
pub use errors::{ExportError, SettingsError};
pub use export::{ExportManager, NoPictures, PictureResolver};
pub use profile::ExportProfile;
pub use schema::{verify_all_fields_covered, ColumnSpec, FieldDef, Record, SheetSchema};
