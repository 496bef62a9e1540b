//! End-to-end workbook tests: fabricate .xlsx fixtures, run the importer and
//! builder, assert on the resulting document.

use plotport::backup::BackupBuilder;
use plotport::excel::WorkbookImporter;
use plotport::types::{SchemaVersion, SheetKind};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;
use tempfile::TempDir;

/// Write a two-year fixture workbook with the real sheet conventions.
fn write_fixture_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    // 2024 To grow
    let sheet = workbook.add_worksheet();
    sheet.set_name("2024 To grow").unwrap();
    for (col, header) in ["Type", "Variety", "Supplier", "Price", "Arrived"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "Peas").unwrap();
    sheet.write_string(1, 1, "Kelvedon Wonder").unwrap();
    sheet.write_string(1, 2, "Thompson & Morgan").unwrap();
    sheet.write_number(1, 3, 2.99).unwrap();
    sheet.write_boolean(1, 4, true).unwrap();
    // Blank type cell: carried forward from the row above
    sheet.write_string(2, 1, "Alderman").unwrap();
    sheet.write_string(3, 0, "Potatoes (early)").unwrap();
    sheet.write_string(3, 1, "Charlotte").unwrap();
    // Unmapped plant name: skipped with a warning
    sheet.write_string(4, 0, "Triffid").unwrap();
    sheet.write_string(4, 1, "Audrey II").unwrap();

    // Sowing calendar 2024
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sowing calendar 2024").unwrap();
    for (col, header) in [
        "Type",
        "Variety",
        "Bed",
        "Sow under cover",
        "Plant out",
        "Harvest from",
    ]
    .iter()
    .enumerate()
    {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    // Rows 1-2 are month groupings in the real workbook
    sheet.write_string(1, 3, "Spring").unwrap();
    sheet.write_string(2, 3, "March").unwrap();
    sheet.write_string(3, 0, "Peas").unwrap();
    sheet.write_string(3, 1, "Kelvedon Wonder").unwrap();
    sheet.write_string(3, 2, "B").unwrap();
    sheet
        .write_datetime_with_format(
            3,
            3,
            &ExcelDateTime::from_ymd(2024, 3, 10).unwrap(),
            &date_format,
        )
        .unwrap();
    sheet
        .write_datetime_with_format(
            3,
            4,
            &ExcelDateTime::from_ymd(2024, 4, 20).unwrap(),
            &date_format,
        )
        .unwrap();
    sheet
        .write_datetime_with_format(
            3,
            5,
            &ExcelDateTime::from_ymd(2024, 6, 30).unwrap(),
            &date_format,
        )
        .unwrap();
    sheet.write_string(4, 1, "Alderman").unwrap();
    sheet.write_string(4, 2, "B").unwrap();
    // Unmapped bed label: row is dropped at grouping time
    sheet.write_string(5, 0, "Carrots").unwrap();
    sheet.write_string(5, 1, "Nantes 2").unwrap();
    sheet.write_string(5, 2, "greenhouse").unwrap();

    // 2025 To grow
    let sheet = workbook.add_worksheet();
    sheet.set_name("2025 To grow").unwrap();
    for (col, header) in ["Type", "Variety", "Supplier", "Price", "Arrived"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "Peas").unwrap();
    sheet.write_string(1, 1, "Kelvedon Wonder").unwrap();
    sheet.write_string(1, 4, "x").unwrap();

    // Sowing calendar 25 (two-digit year form)
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sowing calendar 25").unwrap();
    for (col, header) in ["Type", "Variety", "Bed", "Sow direct"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(3, 0, "Onions").unwrap();
    sheet.write_string(3, 1, "Sturon").unwrap();
    sheet.write_string(3, 2, "C/B").unwrap();

    // Unrelated sheet, must be ignored
    let sheet = workbook.add_worksheet();
    sheet.set_name("Notes").unwrap();
    sheet.write_string(0, 0, "remember the netting").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_import_fixture_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("allotment.xlsx");
    write_fixture_workbook(&path);

    let imported = WorkbookImporter::new(&path).import().unwrap();
    let report = &imported.report;

    assert_eq!(report.sheets.len(), 4);
    assert_eq!(report.sheets[0].kind, SheetKind::ToGrow);
    assert_eq!(report.sheets[0].year, 2024);
    assert_eq!(report.sheets[3].kind, SheetKind::SowingCalendar);
    assert_eq!(report.sheets[3].year, 2025);

    // 2024: Kelvedon Wonder, Alderman (carried-forward type), Charlotte;
    // Triffid skipped. 2025: Kelvedon Wonder.
    assert_eq!(imported.varieties.len(), 4);
    assert_eq!(imported.varieties[1].plant_id, "peas");
    assert_eq!(imported.varieties[1].name, "Alderman");
    assert_eq!(imported.varieties[2].plant_id, "potato");
    assert_eq!(report.skipped_unmapped_plant, 1);
    assert!(report.warnings.iter().any(|w| w.contains("Triffid")));

    // 2024: Kelvedon, Alderman, Nantes 2 (bed unmapped but kept as a row);
    // 2025: Sturon
    assert_eq!(imported.plantings.len(), 4);
    let first = &imported.plantings[0];
    assert_eq!(first.sow_date.as_deref(), Some("2024-03-10"));
    assert_eq!(first.transplant_date.as_deref(), Some("2024-04-20"));
    assert_eq!(first.harvest_date.as_deref(), Some("2024-06-30"));
    // Carried-forward type on the dateless row
    assert_eq!(imported.plantings[1].plant_id, "peas");
    assert_eq!(imported.plantings[1].sow_date, None);
}

#[test]
fn test_convert_v11_document_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("allotment.xlsx");
    write_fixture_workbook(&path);

    let mut imported = WorkbookImporter::new(&path).import().unwrap();
    let document = BackupBuilder::new(SchemaVersion::V11).build(
        &imported.varieties,
        &imported.plantings,
        &mut imported.report,
    );
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["exportVersion"], 11);
    assert_eq!(json["allotment"]["version"], 11);
    assert_eq!(json["allotment"]["currentYear"], 2025);
    assert_eq!(json["varieties"]["version"], 2);

    // Unified areas layout with kind tags and grid rects
    let areas = json["allotment"]["layout"]["areas"].as_array().unwrap();
    assert_eq!(areas.len(), 9);
    assert_eq!(areas[0]["kind"], "bed");
    assert_eq!(areas[0]["grid"]["w"], 4);
    assert!(json["allotment"]["layout"].get("beds").is_none());

    // Seasons reference areas; plant IDs are singular
    let seasons = json["allotment"]["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0]["year"], 2024);
    assert_eq!(seasons[0]["status"], "historical");
    assert_eq!(seasons[0]["notes"], "Imported from Excel");
    let groups = seasons[0]["areas"].as_array().unwrap();
    assert_eq!(groups[0]["areaId"], "B1"); // workbook "B" remapped
    assert_eq!(groups[0]["rotationGroup"], "legumes");
    assert_eq!(groups[0]["plantings"][0]["plantId"], "pea");

    // The greenhouse row was dropped
    assert_eq!(imported.report.skipped_unmapped_bed, 1);
}

#[test]
fn test_convert_v5_document_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("allotment.xlsx");
    write_fixture_workbook(&path);

    let mut imported = WorkbookImporter::new(&path).import().unwrap();
    let document = BackupBuilder::new(SchemaVersion::V5).build(
        &imported.varieties,
        &imported.plantings,
        &mut imported.report,
    );
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["exportVersion"], 5);
    assert_eq!(json["allotment"]["version"], 5);

    let beds = json["allotment"]["layout"]["beds"].as_array().unwrap();
    assert_eq!(beds.len(), 9);
    assert_eq!(beds[0]["status"], "rotation");
    assert!(json["allotment"]["layout"].get("areas").is_none());

    let seasons = json["allotment"]["seasons"].as_array().unwrap();
    let groups = seasons[0]["beds"].as_array().unwrap();
    assert_eq!(groups[0]["bedId"], "B1");
    // Historical plural form is kept in v5
    assert_eq!(groups[0]["plantings"][0]["plantId"], "peas");
}

#[test]
fn test_variety_merge_spans_years() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("allotment.xlsx");
    write_fixture_workbook(&path);

    let mut imported = WorkbookImporter::new(&path).import().unwrap();
    let document = BackupBuilder::new(SchemaVersion::V11).build(
        &imported.varieties,
        &imported.plantings,
        &mut imported.report,
    );
    let json = serde_json::to_value(&document).unwrap();

    let varieties = json["varieties"]["varieties"].as_array().unwrap();
    // Kelvedon Wonder appears in 2024 and 2025; merged into one record
    assert_eq!(varieties.len(), 3);
    let kelvedon = &varieties[0];
    assert_eq!(kelvedon["name"], "Kelvedon Wonder");
    assert_eq!(kelvedon["yearsUsed"], serde_json::json!([2024, 2025]));
    assert_eq!(kelvedon["seedsByYear"]["2024"], "have");
    assert_eq!(kelvedon["seedsByYear"]["2025"], "have");
    assert_eq!(kelvedon["supplier"], "Thompson & Morgan");
    assert_eq!(kelvedon["price"], 2.99);
    // Charlotte had no supplier/price: the keys are absent, not null
    let charlotte = varieties.iter().find(|v| v["name"] == "Charlotte").unwrap();
    assert!(charlotte.get("supplier").is_none());
    assert!(charlotte.get("price").is_none());
}

#[test]
fn test_workbook_without_recognized_sheets() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("other.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Budget").unwrap();
    sheet.write_string(0, 0, "Item").unwrap();
    workbook.save(&path).unwrap();

    let mut imported = WorkbookImporter::new(&path).import().unwrap();
    assert!(imported.report.has_warnings());
    assert!(imported.varieties.is_empty());

    let document = BackupBuilder::new(SchemaVersion::V11).build(
        &imported.varieties,
        &imported.plantings,
        &mut imported.report,
    );
    assert!(document.allotment.seasons.is_empty());
    assert_eq!(document.allotment.current_year, 2025);
}
