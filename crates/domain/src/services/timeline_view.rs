//! Display-ready projections of timeline entries.
//!
//! Produces plain labels only. Styling and interaction belong to the client.
//! Absolute labels are rendered at the viewer's UTC offset.

use chrono::{DateTime, FixedOffset, Utc};
use shared::datetime::{relative_time, split_date_time};

use crate::models::timeline::ALLOCATED_EVENT_TYPE;
use crate::models::{
    Asset, AssetLabel, AssetSection, AssetSectionKind, TimelineEntry, TimelineNodeView,
};

/// Builds node views for all entries, in order.
pub fn build_node_views(
    entries: &[TimelineEntry],
    now: DateTime<Utc>,
    offset: FixedOffset,
    date_time_format: &str,
) -> Vec<TimelineNodeView> {
    entries
        .iter()
        .map(|entry| build_node_view(entry, now, offset, date_time_format))
        .collect()
}

/// Builds the view of a single entry relative to `now`.
pub fn build_node_view(
    entry: &TimelineEntry,
    now: DateTime<Utc>,
    offset: FixedOffset,
    date_time_format: &str,
) -> TimelineNodeView {
    let (primary_label, secondary_label) =
        split_date_time(entry.timestamp.with_timezone(&offset), date_time_format);

    TimelineNodeView {
        id: entry.bed_assignment_id,
        event_type: ALLOCATED_EVENT_TYPE.to_string(),
        icon: entry.icon,
        is_last: entry.is_last,
        primary_label,
        secondary_label,
        title: entry.transfer_kind.title().to_string(),
        bed_label: entry.bed.display_label(),
        in_use: entry.is_active,
        asset_sections: asset_sections(entry),
        relative_time: relative_time(entry.timestamp, now),
    }
}

fn asset_sections(entry: &TimelineEntry) -> Vec<AssetSection> {
    let diff = &entry.asset_diff;
    [
        (AssetSectionKind::NewlyLinked, &diff.newly_linked),
        (AssetSectionKind::Existing, &diff.existing),
        (AssetSectionKind::Unlinked, &diff.unlinked),
    ]
    .into_iter()
    .filter(|(_, assets)| !assets.is_empty())
    .map(|(kind, assets)| section(kind, assets))
    .collect()
}

fn section(kind: AssetSectionKind, assets: &[Asset]) -> AssetSection {
    AssetSection {
        kind,
        heading: kind.heading().to_string(),
        assets: assets.iter().map(AssetLabel::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{asset, assignment, base_time, bed, hours_ago};
    use crate::models::{LocationRef, TimelineIcon};
    use crate::services::timeline::assemble;
    use shared::datetime::DEFAULT_DATE_TIME_FORMAT;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_node_view_labels() {
        let mut b = bed("Bed 4", "ICU");
        b.location = Some(LocationRef {
            id: None,
            name: "Ward A".to_string(),
        });
        let record = assignment(&b, hours_ago(3), None, vec![asset("Ventilator")]);

        let entries = assemble(&[record.clone()]);
        let view = build_node_view(&entries[0], base_time(), utc(), DEFAULT_DATE_TIME_FORMAT);

        assert_eq!(view.id, record.id);
        assert_eq!(view.event_type, "allocated");
        assert_eq!(view.icon, TimelineIcon::MapPin);
        assert_eq!(view.primary_label, "09:00 AM");
        assert_eq!(view.secondary_label, "12/03/2024");
        assert_eq!(view.title, "Transferred to");
        assert_eq!(view.bed_label, "Bed 4 (ICU) in Ward A");
        assert!(view.in_use);
        assert!(view.is_last);
        assert_eq!(view.relative_time, "3 hours ago");
    }

    #[test]
    fn test_node_view_sections_skip_empty_lists() {
        let b = bed("Bed 1", "ICU");
        let kept = asset("Monitor");
        let added = asset("Oxygen");

        let records = vec![
            assignment(&b, hours_ago(1), None, vec![kept.clone(), added.clone()]),
            assignment(&b, hours_ago(4), Some(hours_ago(1)), vec![kept.clone()]),
        ];
        let views = build_node_views(&assemble(&records), base_time(), utc(), DEFAULT_DATE_TIME_FORMAT);

        let sections = &views[0].asset_sections;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, AssetSectionKind::NewlyLinked);
        assert_eq!(sections[0].heading, "Newly Linked Assets");
        assert_eq!(sections[0].assets[0].name, "Oxygen");
        assert_eq!(sections[1].kind, AssetSectionKind::Existing);
        assert_eq!(sections[1].assets[0].id, kept.id);

        assert_eq!(views[0].title, "Asset changed in");
        assert_eq!(views[1].title, "Transferred to");
        assert!(!views[1].in_use);
        assert_eq!(views[1].icon, TimelineIcon::Bed);
    }

    #[test]
    fn test_node_view_no_assets_no_sections() {
        let b = bed("Bed 1", "ICU");
        let entries = assemble(&[assignment(&b, hours_ago(1), None, vec![])]);
        let view = build_node_view(&entries[0], base_time(), utc(), DEFAULT_DATE_TIME_FORMAT);
        assert!(view.asset_sections.is_empty());
    }

    #[test]
    fn test_node_view_unlinked_section() {
        let b = bed("Bed 1", "ICU");
        let removed = asset("Suction pump");
        let records = vec![
            assignment(&b, hours_ago(1), None, vec![]),
            assignment(&b, hours_ago(2), Some(hours_ago(1)), vec![removed]),
        ];
        let views = build_node_views(&assemble(&records), base_time(), utc(), DEFAULT_DATE_TIME_FORMAT);

        assert_eq!(views[0].asset_sections.len(), 1);
        assert_eq!(views[0].asset_sections[0].heading, "Unlinked Assets");
        assert_eq!(views[0].asset_sections[0].assets[0].name, "Suction pump");
    }

    #[test]
    fn test_node_view_custom_format() {
        let b = bed("Bed 1", "ICU");
        let entries = assemble(&[assignment(&b, hours_ago(2), None, vec![])]);
        let view = build_node_view(&entries[0], base_time(), utc(), "%Y-%m-%d; %H:%M");
        assert_eq!(view.primary_label, "2024-03-12");
        assert_eq!(view.secondary_label, "10:00");
    }

    #[test]
    fn test_node_view_labels_use_viewer_offset() {
        let b = bed("Bed 1", "ICU");
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let records = vec![
            assignment(&b, hours_ago(3), None, vec![]),
            assignment(&b, hours_ago(16), Some(hours_ago(3)), vec![]),
        ];
        let views = build_node_views(&assemble(&records), base_time(), ist, DEFAULT_DATE_TIME_FORMAT);

        assert_eq!(views[0].primary_label, "02:30 PM");
        assert_eq!(views[0].secondary_label, "12/03/2024");
        assert_eq!(views[1].primary_label, "01:30 AM");
        assert_eq!(views[1].secondary_label, "12/03/2024");
        assert_eq!(views[0].relative_time, "3 hours ago");
    }
}
