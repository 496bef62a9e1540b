use crate::backup::BackupBuilder;
use crate::error::PortResult;
use crate::excel::WorkbookImporter;
use crate::types::{ImportReport, SchemaVersion};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Execute the convert command: workbook in, backup JSON out.
pub fn convert(
    workbook: PathBuf,
    output: PathBuf,
    schema: SchemaVersion,
    name: Option<String>,
    location: Option<String>,
    verbose: bool,
) -> PortResult<()> {
    println!("{}", "🌱 Plotport - Converting workbook".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Schema: v{}", schema.export_version());
    println!();

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let importer = WorkbookImporter::new(&workbook);
    let mut imported = importer.import()?;

    if verbose {
        for sheet in &imported.report.sheets {
            println!(
                "   {} [{}] {} rows",
                sheet.name.bright_blue(),
                sheet.kind.as_str(),
                sheet.rows_parsed
            );
        }
        println!();
    }

    let mut builder = BackupBuilder::new(schema);
    if let Some(name) = name {
        builder = builder.with_name(name);
    }
    if let Some(location) = location {
        builder = builder.with_location(location);
    }
    let document = builder.build(&imported.varieties, &imported.plantings, &mut imported.report);

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(&output, json)?;

    print_warnings(&imported.report);

    println!(
        "{}",
        format!(
            "✅ Converted {} varieties and {} seasons",
            document.varieties.varieties.len(),
            document.allotment.seasons.len()
        )
        .bold()
        .green()
    );
    println!("   Output written to {}", output.display());
    Ok(())
}

/// Execute the inspect command: parse and report, write nothing.
pub fn inspect(workbook: PathBuf) -> PortResult<()> {
    println!("{}", "🔍 Plotport - Inspecting workbook".bold().green());
    println!("   Workbook: {}\n", workbook.display());

    let importer = WorkbookImporter::new(&workbook);
    let mut imported = importer.import()?;

    // Dry-run the grouping so unmapped-bed drops get counted too
    let _ = BackupBuilder::new(SchemaVersion::V11).build(
        &imported.varieties,
        &imported.plantings,
        &mut imported.report,
    );
    let report = &imported.report;

    if report.sheets.is_empty() {
        println!("{}", "   No recognized sheets".yellow());
    } else {
        println!("{}", "📋 Recognized sheets:".bold().cyan());
        for sheet in &report.sheets {
            println!(
                "   {} [{} {}] {} rows",
                sheet.name.bright_blue(),
                sheet.kind.as_str(),
                sheet.year,
                sheet.rows_parsed
            );
        }
    }

    println!();
    println!("{}", "📊 Totals:".bold().cyan());
    println!("   Varieties: {}", report.varieties_parsed);
    println!("   Plantings: {}", report.plantings_parsed);
    if report.skipped_unmapped_plant > 0 {
        println!(
            "   {}",
            format!("Unmapped plant rows: {}", report.skipped_unmapped_plant).yellow()
        );
    }
    if report.skipped_unmapped_bed > 0 {
        println!(
            "   {}",
            format!("Unmapped bed rows: {}", report.skipped_unmapped_bed).yellow()
        );
    }
    println!();

    print_warnings(report);

    println!("{}", "✅ Inspection complete - nothing written".bold().green());
    Ok(())
}

fn print_warnings(report: &ImportReport) {
    for warning in &report.warnings {
        eprintln!("{}", format!("⚠️  Warning: {}", warning).yellow());
    }
}
