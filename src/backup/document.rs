//! Serde types for the app's backup/export document.
//!
//! Field names mirror the app's own export function; optional fields are
//! omitted rather than serialized as null. The v5 and v11 generations share
//! these types: version-specific fields are `Option`s filled by the emitter
//! for one generation and left empty for the other.

use serde::Serialize;
use std::collections::BTreeMap;

/// Complete backup: allotment document + variety store + export envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub allotment: AllotmentDocument,
    pub varieties: VarietyStore,
    pub exported_at: String,
    pub export_version: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllotmentDocument {
    pub version: u32,
    pub meta: AllotmentMeta,
    pub layout: Layout,
    pub seasons: Vec<Season>,
    pub current_year: i32,
    pub maintenance_tasks: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllotmentMeta {
    pub name: String,
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Plot layout. v5 fills `beds`, v11 fills `areas`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<Vec<BedDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<AreaDef>>,
    pub permanent_plantings: Vec<serde_json::Value>,
    pub infrastructure: Vec<serde_json::Value>,
}

/// v5 layout entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedDef {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// v11 layout entry: kind-tagged area with optional grid placement
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDef {
    pub id: String,
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridRect>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub year: i32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<Vec<SeasonGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<SeasonGroup>>,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One bed/area's plantings within a season. v5 keys by `bedId`, v11 by
/// `areaId`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    pub rotation_group: String,
    pub plantings: Vec<Planting>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planting {
    pub id: String,
    pub plant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sow_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transplant_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyStore {
    pub version: u32,
    pub varieties: Vec<VarietyRecord>,
    pub meta: StoreMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMeta {
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyRecord {
    pub id: String,
    pub plant_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub years_used: Vec<i32>,
    pub planned_years: Vec<i32>,
    /// year → "have" | "ordered"
    pub seeds_by_year: BTreeMap<i32, String>,
}
