// Tabular codec: record rows <-> self-describing xlsx buffers

mod reader;
mod writer;

pub use reader::{decode, DecodedRow};
pub use writer::encode;
