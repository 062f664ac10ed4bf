//! Bed activity timeline domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use super::asset::{Asset, AssetDiff};
use super::bed::{Bed, BedAssignment};

/// Event type shown on every bed timeline node.
pub const ALLOCATED_EVENT_TYPE: &str = "allocated";

// ============================================================================
// Entry Classification
// ============================================================================

/// How a bed assignment relates to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    /// Same bed as the predecessor; only the linked assets changed.
    AssetChangedIn,
    /// Different bed than the predecessor, or no predecessor at all.
    TransferredTo,
}

impl TransferKind {
    /// Compares bed ids with the predecessor's bed, if any.
    pub fn classify(current: &Bed, previous: Option<&Bed>) -> Self {
        match previous {
            Some(previous) if previous.id == current.id => TransferKind::AssetChangedIn,
            _ => TransferKind::TransferredTo,
        }
    }

    /// Title text used in front of the bed label.
    pub fn title(&self) -> &'static str {
        match self {
            TransferKind::AssetChangedIn => "Asset changed in",
            TransferKind::TransferredTo => "Transferred to",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Icon selector for a timeline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineIcon {
    #[serde(rename = "l-map-pin-alt")]
    MapPin,
    #[serde(rename = "l-bed")]
    Bed,
}

impl TimelineIcon {
    pub fn for_assignment(assignment: &BedAssignment) -> Self {
        if assignment.is_active() {
            TimelineIcon::MapPin
        } else {
            TimelineIcon::Bed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineIcon::MapPin => "l-map-pin-alt",
            TimelineIcon::Bed => "l-bed",
        }
    }
}

impl fmt::Display for TimelineIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Core Model
// ============================================================================

/// One node of the bed activity timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub bed_assignment_id: Uuid,
    pub bed: Bed,
    /// Start of the assignment.
    pub timestamp: DateTime<Utc>,
    /// True when the assignment has no end date.
    pub is_active: bool,
    pub transfer_kind: TransferKind,
    pub icon: TimelineIcon,
    /// True for the chronologically oldest entry.
    pub is_last: bool,
    pub asset_diff: AssetDiff,
}

// ============================================================================
// Node Views
// ============================================================================

/// Which asset list a section of a node view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSectionKind {
    NewlyLinked,
    Existing,
    Unlinked,
}

impl AssetSectionKind {
    pub fn heading(&self) -> &'static str {
        match self {
            AssetSectionKind::NewlyLinked => "Newly Linked Assets",
            AssetSectionKind::Existing => "Existing Assets",
            AssetSectionKind::Unlinked => "Unlinked Assets",
        }
    }
}

/// Asset as listed under a section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLabel {
    pub id: Uuid,
    pub name: String,
}

impl From<&Asset> for AssetLabel {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name.clone(),
        }
    }
}

/// Labeled list of assets; only built for non-empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSection {
    pub kind: AssetSectionKind,
    pub heading: String,
    pub assets: Vec<AssetLabel>,
}

/// Unstyled, display-ready projection of a [`TimelineEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineNodeView {
    pub id: Uuid,
    pub event_type: String,
    pub icon: TimelineIcon,
    pub is_last: bool,
    /// First half of the formatted start timestamp (the time, by default).
    pub primary_label: String,
    /// Second half of the formatted start timestamp (the date, by default).
    pub secondary_label: String,
    pub title: String,
    pub bed_label: String,
    pub in_use: bool,
    pub asset_sections: Vec<AssetSection>,
    /// Start timestamp relative to the reference time, for the details popover.
    pub relative_time: String,
}

// ============================================================================
// Request / Response DTOs
// ============================================================================

/// Request payload carrying already-fetched consultation bed records.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BedTimelineRequest {
    #[validate(length(
        max = 10000,
        message = "consultation_beds must contain at most 10000 records"
    ))]
    pub consultation_beds: Vec<BedAssignment>,
}

/// Request payload for node views.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BedTimelineViewRequest {
    #[validate(length(
        max = 10000,
        message = "consultation_beds must contain at most 10000 records"
    ))]
    pub consultation_beds: Vec<BedAssignment>,

    /// Reference time for relative labels; defaults to the current time.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,

    /// Viewer's offset east of UTC in minutes; defaults to the configured offset.
    #[serde(default)]
    #[validate(range(
        min = -1439,
        max = 1439,
        message = "utc_offset_minutes must be between -1439 and 1439"
    ))]
    pub utc_offset_minutes: Option<i32>,
}

/// Response payload for the assembled timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedTimelineResponse {
    pub entries: Vec<TimelineEntry>,
    pub total: usize,
}

impl From<Vec<TimelineEntry>> for BedTimelineResponse {
    fn from(entries: Vec<TimelineEntry>) -> Self {
        let total = entries.len();
        Self { entries, total }
    }
}

/// Response payload for node views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedTimelineViewResponse {
    pub nodes: Vec<TimelineNodeView>,
}
