use clap::{Parser, Subcommand};
use plotport::cli;
use plotport::error::PortResult;
use plotport::types::SchemaVersion;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plotport")]
#[command(about = "One-time migration: allotment planning workbook (.xlsx) to app backup JSON.")]
#[command(long_about = "Plotport - Excel workbook to app backup converter

Converts a spreadsheet-based allotment planning workbook into the backup
format the app's import feature consumes. Run it once per workbook; after
migrating, use the app's built-in export/import for backups.

SHEET CONVENTIONS:
  '<year> To grow'          - seed orders (Type / Variety / Supplier / Price / Arrived)
  'Sowing calendar <year>'  - plantings (type, variety, bed, dated columns)

COMMANDS:
  convert  - Convert a workbook to a backup JSON file
  inspect  - List what a workbook contains without writing anything

EXAMPLES:
  plotport convert allotment.xlsx backup.json
  plotport convert allotment.xlsx backup.json --schema v5
  plotport inspect allotment.xlsx

Docs: https://github.com/royalbit/plotport")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a planning workbook to a backup JSON file.

Reads every recognized sheet, normalizes plant names and bed labels through
the built-in mapping tables, groups plantings into seasons, and writes one
backup document. Rows that cannot be classified are skipped with a warning.

SCHEMA GENERATIONS:
  v11 (default) - unified areas layout, singular plant IDs
  v5            - legacy bed-centric layout for older app versions

EXAMPLES:
  plotport convert allotment.xlsx backup.json
  plotport convert allotment.xlsx backup.json --schema v5
  plotport convert allotment.xlsx backup.json --name 'Hillside Plot' --location Fife")]
    /// Convert a workbook to a backup JSON file
    Convert {
        /// Path to the planning workbook (.xlsx)
        workbook: PathBuf,

        /// Output backup file path (.json)
        output: PathBuf,

        /// Backup schema generation to emit
        #[arg(long, value_enum, default_value = "v11", env = "PLOTPORT_SCHEMA")]
        schema: SchemaVersion,

        /// Allotment name for the backup metadata
        #[arg(long)]
        name: Option<String>,

        /// Allotment location for the backup metadata
        #[arg(long)]
        location: Option<String>,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "List what a workbook contains without writing anything.

Shows the recognized sheets, row totals, and every name or bed label the
mapping tables cannot classify. Use it before converting to see what a
conversion would skip.")]
    /// List what a workbook contains without writing anything
    Inspect {
        /// Path to the planning workbook (.xlsx)
        workbook: PathBuf,
    },
}

fn main() -> PortResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            workbook,
            output,
            schema,
            name,
            location,
            verbose,
        } => cli::convert(workbook, output, schema, name, location, verbose),

        Commands::Inspect { workbook } => cli::inspect(workbook),
    }
}
