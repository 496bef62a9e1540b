//! Backup assembly: merge variety rows, group plantings into seasons, stamp
//! IDs and timestamps.

use crate::backup::document::{
    AllotmentDocument, AllotmentMeta, AreaDef, BackupDocument, BedDef, GridRect, Layout, Planting,
    Season, SeasonGroup, StoreMeta, VarietyRecord, VarietyStore,
};
use crate::mappings::{map_bed_id, modern_plant_id, RotationGroup};
use crate::types::{ImportReport, PlantingRow, SchemaVersion, VarietyRow};
use chrono::{SecondsFormat, Utc};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// The plot as the app expects it: (id, display name, perennial, grid rect).
///
/// The workbook only ever references a subset of these; the app wants the
/// full layout so un-planted beds still render.
const PLOT_LAYOUT: &[(&str, &str, bool, GridRect)] = &[
    ("A", "Bed A", false, GridRect { x: 0, y: 0, w: 4, h: 1 }),
    ("B1", "Bed B1", false, GridRect { x: 0, y: 1, w: 2, h: 1 }),
    ("B2", "Bed B2", false, GridRect { x: 2, y: 1, w: 2, h: 1 }),
    ("B1-prime", "Bed B1'", false, GridRect { x: 0, y: 2, w: 2, h: 1 }),
    ("B2-prime", "Bed B2'", false, GridRect { x: 2, y: 2, w: 2, h: 1 }),
    ("C", "Bed C", false, GridRect { x: 0, y: 3, w: 4, h: 1 }),
    ("D", "Bed D", false, GridRect { x: 0, y: 4, w: 4, h: 1 }),
    ("E", "Bed E", false, GridRect { x: 0, y: 5, w: 4, h: 1 }),
    ("raspberries", "Raspberries", true, GridRect { x: 0, y: 6, w: 4, h: 1 }),
];

/// Assembles the backup document from normalized workbook rows.
pub struct BackupBuilder {
    schema: SchemaVersion,
    name: String,
    location: String,
}

impl BackupBuilder {
    pub fn new(schema: SchemaVersion) -> Self {
        Self {
            schema,
            name: "My Allotment".to_string(),
            location: "Scotland".to_string(),
        }
    }

    /// Override the allotment display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the allotment location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Assemble the complete backup document. Planting rows whose bed label
    /// does not remap are dropped and counted on the report.
    pub fn build(
        &self,
        varieties: &[VarietyRow],
        plantings: &[PlantingRow],
        report: &mut ImportReport,
    ) -> BackupDocument {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let variety_records = self.merge_varieties(varieties);
        let (seasons, current_year) = self.group_seasons(plantings, report, &now);

        BackupDocument {
            allotment: AllotmentDocument {
                version: self.schema.export_version(),
                meta: AllotmentMeta {
                    name: self.name.clone(),
                    location: self.location.clone(),
                    created_at: now.clone(),
                    updated_at: now.clone(),
                },
                layout: self.layout(),
                seasons,
                current_year,
                maintenance_tasks: Vec::new(),
            },
            varieties: VarietyStore {
                version: 2,
                varieties: variety_records,
                meta: StoreMeta {
                    created_at: now.clone(),
                    updated_at: now.clone(),
                },
            },
            exported_at: now,
            export_version: self.schema.export_version(),
        }
    }

    /// Merge variety rows by (plant, name). The first occurrence wins for
    /// supplier and price; every occurrence contributes its year.
    fn merge_varieties(&self, varieties: &[VarietyRow]) -> Vec<VarietyRecord> {
        let mut index: HashMap<(&'static str, String), usize> = HashMap::new();
        let mut records: Vec<VarietyRecord> = Vec::new();

        for row in varieties {
            let key = (row.plant_id, row.name.clone());
            let idx = match index.get(&key) {
                Some(idx) => *idx,
                None => {
                    records.push(VarietyRecord {
                        id: new_id("variety"),
                        plant_id: self.emit_plant_id(row.plant_id),
                        name: row.name.clone(),
                        supplier: row.supplier.clone(),
                        price: row.price,
                        years_used: Vec::new(),
                        planned_years: Vec::new(),
                        seeds_by_year: BTreeMap::new(),
                    });
                    index.insert(key, records.len() - 1);
                    records.len() - 1
                }
            };

            let record = &mut records[idx];
            if !record.years_used.contains(&row.year) {
                record.years_used.push(row.year);
            }
            let status = if row.arrived { "have" } else { "ordered" };
            record.seeds_by_year.insert(row.year, status.to_string());
        }

        for record in &mut records {
            record.years_used.sort_unstable();
        }
        records
    }

    /// Group plantings by year then bed, voting each group's rotation family.
    /// Returns the seasons plus the `currentYear` value (latest season, 2025
    /// when there are none).
    fn group_seasons(
        &self,
        plantings: &[PlantingRow],
        report: &mut ImportReport,
        now: &str,
    ) -> (Vec<Season>, i32) {
        // year → bed → (legacy plant IDs for the rotation vote, plantings)
        let mut seasons_map: BTreeMap<i32, BTreeMap<String, (Vec<&'static str>, Vec<Planting>)>> =
            BTreeMap::new();

        for row in plantings {
            let bed_id = row.bed.as_deref().and_then(map_bed_id);
            let Some(bed_id) = bed_id else {
                report.skipped_unmapped_bed += 1;
                continue;
            };

            let (ids, group) = seasons_map
                .entry(row.year)
                .or_default()
                .entry(bed_id.to_string())
                .or_default();
            ids.push(row.plant_id);
            group.push(Planting {
                id: new_id("planting"),
                plant_id: self.emit_plant_id(row.plant_id),
                variety_name: Some(row.variety_name.clone()),
                sow_date: row.sow_date.clone(),
                transplant_date: row.transplant_date.clone(),
                harvest_date: row.harvest_date.clone(),
            });
        }

        let current_year = seasons_map.keys().next_back().copied().unwrap_or(2025);

        let mut seasons = Vec::new();
        for (year, beds) in seasons_map {
            let groups: Vec<SeasonGroup> = beds
                .into_iter()
                .map(|(bed_id, (ids, group))| {
                    let rotation = RotationGroup::majority(ids.iter().copied())
                        .as_str()
                        .to_string();
                    let (bed_id, area_id) = match self.schema {
                        SchemaVersion::V5 => (Some(bed_id), None),
                        SchemaVersion::V11 => (None, Some(bed_id)),
                    };
                    SeasonGroup {
                        bed_id,
                        area_id,
                        rotation_group: rotation,
                        plantings: group,
                    }
                })
                .collect();

            let (beds, areas) = match self.schema {
                SchemaVersion::V5 => (Some(groups), None),
                SchemaVersion::V11 => (None, Some(groups)),
            };
            seasons.push(Season {
                year,
                status: "historical".to_string(),
                beds,
                areas,
                notes: "Imported from Excel".to_string(),
                created_at: now.to_string(),
                updated_at: now.to_string(),
            });
        }

        (seasons, current_year)
    }

    fn layout(&self) -> Layout {
        let (beds, areas) = match self.schema {
            SchemaVersion::V5 => {
                let beds = PLOT_LAYOUT
                    .iter()
                    .map(|(id, name, perennial, _)| BedDef {
                        id: (*id).to_string(),
                        name: (*name).to_string(),
                        status: if *perennial { "perennial" } else { "rotation" }.to_string(),
                    })
                    .collect();
                (Some(beds), None)
            }
            SchemaVersion::V11 => {
                let areas = PLOT_LAYOUT
                    .iter()
                    .map(|(id, name, perennial, grid)| AreaDef {
                        id: (*id).to_string(),
                        kind: if *perennial { "perennial" } else { "bed" }.to_string(),
                        name: (*name).to_string(),
                        grid: Some(*grid),
                    })
                    .collect();
                (None, Some(areas))
            }
        };
        Layout {
            beds,
            areas,
            permanent_plantings: Vec::new(),
            infrastructure: Vec::new(),
        }
    }

    fn emit_plant_id(&self, id: &'static str) -> String {
        match self.schema {
            SchemaVersion::V5 => id.to_string(),
            SchemaVersion::V11 => modern_plant_id(id).to_string(),
        }
    }
}

/// `<prefix>-<8 lowercase hex>` record ID, unique per run.
fn new_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &suffix[..8])
}
