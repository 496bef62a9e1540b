//! Workbook import: planning workbook (.xlsx) → normalized rows
//!
//! Sheet discovery is convention-driven: "<year> To grow" sheets hold the
//! seed-order list, "Sowing calendar <year>" sheets hold the plantings.

mod cells;
mod importer;

pub use importer::{ImportedWorkbook, WorkbookImporter};
