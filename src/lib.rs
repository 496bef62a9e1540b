//! Plotport - allotment planning workbook → app backup converter
//!
//! This library reads a spreadsheet-based allotment planning workbook,
//! normalizes its free-text plant names and bed labels through static
//! mapping tables, and assembles the backup document the planning app
//! imports.
//!
//! # Features
//!
//! - Convention-driven sheet discovery ("<year> To grow", "Sowing calendar <year>")
//! - Two-stage plant-name lookup (exact, then parenthetical-stripped)
//! - Carry-forward for the workbook's blank repeated-type rows
//! - Both export schema generations (v5 beds, v11 areas) from one parse
//!
//! # Example
//!
//! ```no_run
//! use plotport::backup::BackupBuilder;
//! use plotport::excel::WorkbookImporter;
//! use plotport::types::SchemaVersion;
//!
//! let mut imported = WorkbookImporter::new("allotment.xlsx").import()?;
//! let document = BackupBuilder::new(SchemaVersion::V11)
//!     .build(&imported.varieties, &imported.plantings, &mut imported.report);
//!
//! println!("{} seasons", document.allotment.seasons.len());
//! # Ok::<(), plotport::error::PortError>(())
//! ```

pub mod backup;
pub mod cli;
pub mod error;
pub mod excel;
pub mod mappings;
pub mod types;

// Re-export commonly used types
pub use error::{PortError, PortResult};
pub use types::{ImportReport, PlantingRow, SchemaVersion, VarietyRow};
