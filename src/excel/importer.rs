//! Workbook importer implementation - planning workbook (.xlsx) → rows

use crate::error::{PortError, PortResult};
use crate::excel::cells::{cell_date, cell_f64, cell_str, cell_truthy};
use crate::mappings::PlantCatalog;
use crate::types::{ImportReport, PlantingRow, SheetKind, SheetStats, VarietyRow};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Everything extracted from one workbook.
#[derive(Debug, Default)]
pub struct ImportedWorkbook {
    pub varieties: Vec<VarietyRow>,
    pub plantings: Vec<PlantingRow>,
    pub report: ImportReport,
}

/// Workbook importer for converting planning workbooks to backup rows
pub struct WorkbookImporter {
    path: PathBuf,
    catalog: PlantCatalog,
}

impl WorkbookImporter {
    /// Create a new workbook importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            catalog: PlantCatalog::new(),
        }
    }

    /// Import the workbook, extracting variety and planting rows from every
    /// recognized sheet.
    pub fn import(&self) -> PortResult<ImportedWorkbook> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| PortError::Excel(format!("Failed to open workbook: {}", e)))?;

        let recognized = recognize_sheets(&workbook.sheet_names().to_vec())?;

        let mut out = ImportedWorkbook::default();
        if recognized.is_empty() {
            out.report.warn(format!(
                "No '<year> To grow' or 'Sowing calendar <year>' sheets found in {}",
                self.path.display()
            ));
        }

        for (year, kind, sheet_name) in recognized {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                PortError::Excel(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;

            let rows_parsed = match kind {
                SheetKind::ToGrow => {
                    let rows = self.parse_varieties(&range, year, &mut out.report);
                    let n = rows.len();
                    out.varieties.extend(rows);
                    n
                }
                SheetKind::SowingCalendar => {
                    let rows = self.parse_plantings(&range, year, &mut out.report);
                    let n = rows.len();
                    out.plantings.extend(rows);
                    n
                }
            };

            out.report.sheets.push(SheetStats {
                name: sheet_name,
                kind,
                year,
                rows_parsed,
            });
        }

        out.report.varieties_parsed = out.varieties.len();
        out.report.plantings_parsed = out.plantings.len();
        Ok(out)
    }

    /// Parse a "<year> To grow" sheet: header row, then one row per ordered
    /// variety. Columns are located by header name.
    fn parse_varieties(
        &self,
        range: &Range<Data>,
        year: i32,
        report: &mut ImportReport,
    ) -> Vec<VarietyRow> {
        let (height, width) = range.get_size();
        if height < 2 {
            return Vec::new(); // header only, or empty
        }

        let mut col_type = None;
        let mut col_variety = None;
        let mut col_supplier = None;
        let mut col_price = None;
        let mut col_arrived = None;
        for col in 0..width {
            if let Some(header) = range.get((0, col)).and_then(cell_str) {
                match header.to_lowercase().as_str() {
                    "type" => col_type = Some(col),
                    "variety" => col_variety = Some(col),
                    "supplier" => col_supplier = Some(col),
                    "price" => col_price = Some(col),
                    "arrived" => col_arrived = Some(col),
                    _ => {}
                }
            }
        }

        let Some(col_variety) = col_variety else {
            report.warn(format!(
                "'{} To grow' sheet has no 'Variety' column, skipping",
                year
            ));
            return Vec::new();
        };

        let mut rows = Vec::new();
        let mut last_type: Option<String> = None;

        for row in 1..height {
            let Some(name) = range.get((row, col_variety)).and_then(cell_str) else {
                continue;
            };

            // Blank type cells reuse the last seen value (the workbook only
            // writes the type on the first row of each group)
            let plant_type = match col_type.and_then(|c| range.get((row, c))).and_then(cell_str) {
                Some(t) => {
                    last_type = Some(t.clone());
                    t
                }
                None => match &last_type {
                    Some(t) => t.clone(),
                    None => continue,
                },
            };

            let Some(plant_id) = self.catalog.plant_id(&plant_type) else {
                report.skipped_unmapped_plant += 1;
                report.warn(format!("Could not map '{}' to plant ID", plant_type));
                continue;
            };

            rows.push(VarietyRow {
                plant_id,
                name,
                supplier: col_supplier
                    .and_then(|c| range.get((row, c)))
                    .and_then(cell_str),
                price: col_price
                    .and_then(|c| range.get((row, c)))
                    .and_then(cell_f64),
                year,
                arrived: col_arrived
                    .and_then(|c| range.get((row, c)))
                    .map(cell_truthy)
                    .unwrap_or(false),
            });
        }

        rows
    }

    /// Parse a "Sowing calendar <year>" sheet.
    ///
    /// Fixed shape: column 0 = type, column 1 = variety, column 2 = bed; the
    /// two rows under the header carry month groupings and are skipped. Date
    /// cells anywhere in the row are routed by their column header.
    fn parse_plantings(
        &self,
        range: &Range<Data>,
        year: i32,
        report: &mut ImportReport,
    ) -> Vec<PlantingRow> {
        let (height, width) = range.get_size();
        if height < 2 {
            return Vec::new();
        }

        let headers: Vec<String> = (0..width)
            .map(|col| {
                range
                    .get((0, col))
                    .and_then(cell_str)
                    .unwrap_or_default()
                    .to_lowercase()
            })
            .collect();

        let mut rows = Vec::new();
        let mut last_type: Option<String> = None;

        for row in 3..height {
            let Some(variety_name) = range.get((row, 1)).and_then(cell_str) else {
                continue;
            };

            let plant_type = match range.get((row, 0)).and_then(cell_str) {
                Some(t) => {
                    last_type = Some(t.clone());
                    t
                }
                None => match &last_type {
                    Some(t) => t.clone(),
                    None => continue,
                },
            };

            let Some(plant_id) = self.catalog.plant_id(&plant_type) else {
                report.skipped_unmapped_plant += 1;
                continue;
            };

            let mut sow_date = None;
            let mut transplant_date = None;
            let mut harvest_date = None;
            for col in 0..width {
                let Some(date) = range.get((row, col)).and_then(cell_date) else {
                    continue;
                };
                let header = headers[col].as_str();
                if header.contains("sow") || header.contains("january") || header.contains("february")
                {
                    if sow_date.is_none() {
                        sow_date = Some(date);
                    }
                } else if header.contains("plant") {
                    if transplant_date.is_none() {
                        transplant_date = Some(date);
                    }
                } else if header.contains("harvest") && harvest_date.is_none() {
                    harvest_date = Some(date);
                }
            }

            rows.push(PlantingRow {
                plant_id,
                variety_name,
                bed: range.get((row, 2)).and_then(cell_str),
                sow_date,
                transplant_date,
                harvest_date,
                year,
            });
        }

        rows
    }
}

/// Match sheet names against the workbook conventions and return them as
/// (year, kind, name), sorted by year with the to-grow sheet first.
fn recognize_sheets(sheet_names: &[String]) -> PortResult<Vec<(i32, SheetKind, String)>> {
    let to_grow = Regex::new(r"(?i)^\s*(\d{4})\s+to\s+grow\s*$")
        .map_err(|e| PortError::Excel(format!("Regex error: {}", e)))?;
    let sowing = Regex::new(r"(?i)^\s*sowing\s+calendar\s+(\d{4}|\d{2})\s*$")
        .map_err(|e| PortError::Excel(format!("Regex error: {}", e)))?;

    let mut recognized = Vec::new();
    for name in sheet_names {
        if let Some(caps) = to_grow.captures(name) {
            if let Ok(year) = caps[1].parse::<i32>() {
                recognized.push((year, SheetKind::ToGrow, name.clone()));
            }
        } else if let Some(caps) = sowing.captures(name) {
            if let Ok(mut year) = caps[1].parse::<i32>() {
                // "Sowing calendar 25" means 2025
                if year < 100 {
                    year += 2000;
                }
                recognized.push((year, SheetKind::SowingCalendar, name.clone()));
            }
        }
    }

    recognized.sort_by_key(|(year, kind, _)| (*year, matches!(kind, SheetKind::SowingCalendar)));
    Ok(recognized)
}
