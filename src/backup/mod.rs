//! Backup document assembly: normalized rows → the app's export JSON
//!
//! Two schema generations share one assembly pass:
//! - v5: bed-centric layout, historical plural plant IDs
//! - v11: unified areas layout (kind tags, grid coordinates), singular IDs

mod builder;
mod document;

pub use builder::BackupBuilder;
pub use document::{
    AllotmentDocument, AllotmentMeta, AreaDef, BackupDocument, BedDef, GridRect, Layout, Planting,
    Season, SeasonGroup, StoreMeta, VarietyRecord, VarietyStore,
};
