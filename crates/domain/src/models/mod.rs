//! Domain models for the bed timeline service.

pub mod asset;
pub mod bed;
pub mod timeline;

pub use asset::{Asset, AssetDiff};
pub use bed::{Bed, BedAssignment, BedHistory, BedHistoryError, LocationRef};
pub use timeline::{
    AssetLabel, AssetSection, AssetSectionKind, TimelineEntry, TimelineIcon, TimelineNodeView,
    TransferKind,
};
