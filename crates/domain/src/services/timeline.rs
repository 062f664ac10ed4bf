//! Bed activity timeline assembly.
//!
//! Records are expected newest first. Each record is paired with the record
//! after it (its chronological predecessor), which decides the transfer kind
//! and the asset diff of the resulting entry.

use tracing::debug;

use super::asset_diff::diff_assets;
use crate::models::{BedAssignment, BedHistory, TimelineEntry, TimelineIcon, TransferKind};

/// Builds one timeline entry per record, preserving input order.
///
/// The last record has no predecessor: it is always "transferred to" and its
/// diff is computed against an empty asset list.
pub fn assemble(beds: &[BedAssignment]) -> Vec<TimelineEntry> {
    let predecessors = beds
        .iter()
        .skip(1)
        .map(Some)
        .chain(std::iter::once(None));
    let last_index = beds.len().saturating_sub(1);

    let entries: Vec<TimelineEntry> = beds
        .iter()
        .zip(predecessors)
        .enumerate()
        .map(|(index, (record, previous))| build_entry(record, previous, index == last_index))
        .collect();

    debug!(entries = entries.len(), "Assembled bed activity timeline");
    entries
}

/// Builds the timeline for a history whose ordering is already guaranteed.
pub fn assemble_history(history: &BedHistory) -> Vec<TimelineEntry> {
    assemble(history.records())
}

fn build_entry(
    record: &BedAssignment,
    previous: Option<&BedAssignment>,
    is_last: bool,
) -> TimelineEntry {
    let previous_assets = previous.map(|p| p.assets.as_slice()).unwrap_or(&[]);

    TimelineEntry {
        bed_assignment_id: record.id,
        bed: record.bed.clone(),
        timestamp: record.start_date,
        is_active: record.is_active(),
        transfer_kind: TransferKind::classify(&record.bed, previous.map(|p| &p.bed)),
        icon: TimelineIcon::for_assignment(record),
        is_last,
        asset_diff: diff_assets(previous_assets, &record.assets),
    }
}
