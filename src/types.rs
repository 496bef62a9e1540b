use clap::ValueEnum;

//==============================================================================
// Backup Schema Version
//==============================================================================

/// Generation of the app's export schema to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaVersion {
    /// Legacy bed-centric layout, historical plural plant IDs
    V5,
    /// Unified areas layout with kind tags and grid coordinates
    V11,
}

impl SchemaVersion {
    /// The `exportVersion` / `allotment.version` number this generation uses.
    pub fn export_version(&self) -> u32 {
        match self {
            SchemaVersion::V5 => 5,
            SchemaVersion::V11 => 11,
        }
    }
}

//==============================================================================
// Intermediate Rows (workbook → builder)
//==============================================================================

/// One row of a "<year> To grow" sheet after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct VarietyRow {
    pub plant_id: &'static str,
    pub name: String,
    pub supplier: Option<String>,
    pub price: Option<f64>,
    pub year: i32,
    pub arrived: bool,
}

/// One row of a "Sowing calendar <year>" sheet after normalization.
///
/// Dates are already rendered as ISO `YYYY-MM-DD` strings; `bed` is the raw
/// workbook label (remapped later, rows with unmapped beds are dropped at
/// grouping time).
#[derive(Debug, Clone, PartialEq)]
pub struct PlantingRow {
    pub plant_id: &'static str,
    pub variety_name: String,
    pub bed: Option<String>,
    pub sow_date: Option<String>,
    pub transplant_date: Option<String>,
    pub harvest_date: Option<String>,
    pub year: i32,
}

//==============================================================================
// Import Report
//==============================================================================

/// What kind of sheet a recognized sheet name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    ToGrow,
    SowingCalendar,
}

impl SheetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::ToGrow => "to-grow",
            SheetKind::SowingCalendar => "sowing-calendar",
        }
    }
}

/// Per-sheet import statistics
#[derive(Debug, Clone)]
pub struct SheetStats {
    pub name: String,
    pub kind: SheetKind,
    pub year: i32,
    pub rows_parsed: usize,
}

/// Result of reading one workbook: counters plus actionable warnings.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Recognized sheets, in the order they were parsed
    pub sheets: Vec<SheetStats>,
    /// Variety rows extracted
    pub varieties_parsed: usize,
    /// Planting rows extracted
    pub plantings_parsed: usize,
    /// Rows dropped because the plant name mapped to no plant ID
    pub skipped_unmapped_plant: usize,
    /// Planting rows dropped because the bed label mapped to no bed ID
    pub skipped_unmapped_bed: usize,
    /// Actionable warnings (unmapped plant names, missing columns)
    pub warnings: Vec<String>,
}

impl ImportReport {
    pub fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line summary suitable for display
    pub fn summary(&self) -> String {
        format!(
            "{} sheet{}, {} varieties, {} plantings",
            self.sheets.len(),
            if self.sheets.len() == 1 { "" } else { "s" },
            self.varieties_parsed,
            self.plantings_parsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_version_numbers() {
        assert_eq!(SchemaVersion::V5.export_version(), 5);
        assert_eq!(SchemaVersion::V11.export_version(), 11);
    }

    #[test]
    fn test_report_summary_pluralization() {
        let mut report = ImportReport::default();
        assert_eq!(report.summary(), "0 sheets, 0 varieties, 0 plantings");

        report.sheets.push(SheetStats {
            name: "2024 To grow".to_string(),
            kind: SheetKind::ToGrow,
            year: 2024,
            rows_parsed: 3,
        });
        report.varieties_parsed = 3;
        assert_eq!(report.summary(), "1 sheet, 3 varieties, 0 plantings");
    }

    #[test]
    fn test_report_warnings() {
        let mut report = ImportReport::default();
        assert!(!report.has_warnings());
        report.warn("Could not map 'triffid' to plant ID".to_string());
        assert!(report.has_warnings());
        assert_eq!(report.warnings.len(), 1);
    }
}
