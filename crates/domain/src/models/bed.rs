//! Bed and bed assignment domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::asset::Asset;

/// Location a bed belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
}

/// Reference to a physical bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub id: Uuid,
    pub name: String,
    pub bed_type: String,
    #[serde(
        rename = "location_object",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<LocationRef>,
}

impl Bed {
    /// Human-readable label, e.g. `"ICU Bed 4 (ICU) in Ward A"`.
    pub fn display_label(&self) -> String {
        match &self.location {
            Some(location) => format!("{} ({}) in {}", self.name, self.bed_type, location.name),
            None => format!("{} ({})", self.name, self.bed_type),
        }
    }
}

/// One interval during which a patient occupied a specific bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedAssignment {
    pub id: Uuid,
    #[serde(rename = "bed_object")]
    pub bed: Bed,
    pub start_date: DateTime<Utc>,
    /// `None` while the assignment is ongoing.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(
        rename = "assets_objects",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub assets: Vec<Asset>,
}

impl BedAssignment {
    /// True while the patient still occupies the bed.
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Asset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Asset>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error building a [`BedHistory`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BedHistoryError {
    #[error("Bed assignment at position {index} starts after the one before it; records must be ordered newest first")]
    OutOfOrder { index: usize },
}

/// Bed assignments ordered newest first by start date.
///
/// The record following any given record is its chronological predecessor.
/// Equal start dates are allowed and keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BedHistory(Vec<BedAssignment>);

impl BedHistory {
    /// Wraps records that are already ordered newest first.
    pub fn from_descending(records: Vec<BedAssignment>) -> Result<Self, BedHistoryError> {
        if let Some(position) = records
            .windows(2)
            .position(|pair| pair[0].start_date < pair[1].start_date)
        {
            return Err(BedHistoryError::OutOfOrder {
                index: position + 1,
            });
        }
        Ok(Self(records))
    }

    /// Sorts records newest first. The sort is stable.
    pub fn from_unordered(mut records: Vec<BedAssignment>) -> Self {
        records.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Self(records)
    }

    pub fn records(&self) -> &[BedAssignment] {
        &self.0
    }

    pub fn into_records(self) -> Vec<BedAssignment> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The newest assignment, if it is still ongoing.
    pub fn current(&self) -> Option<&BedAssignment> {
        self.0.first().filter(|record| record.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{assignment, bed, hours_ago};
    use serde_json::json;

    #[test]
    fn test_bed_display_label() {
        let mut b = bed("Bed 4", "ICU");
        b.location = Some(LocationRef {
            id: None,
            name: "Ward A".to_string(),
        });
        assert_eq!(b.display_label(), "Bed 4 (ICU) in Ward A");

        b.location = None;
        assert_eq!(b.display_label(), "Bed 4 (ICU)");
    }

    #[test]
    fn test_assignment_deserialize_upstream_shape() {
        let id = Uuid::new_v4();
        let bed_id = Uuid::new_v4();
        let record: BedAssignment = serde_json::from_value(json!({
            "id": id,
            "bed_object": {
                "id": bed_id,
                "name": "Bed 1",
                "bed_type": "REGULAR",
                "location_object": { "name": "General Ward" }
            },
            "start_date": "2024-03-12T09:30:00Z",
            "end_date": null,
            "assets_objects": null
        }))
        .unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.bed.id, bed_id);
        assert_eq!(record.bed.location.as_ref().unwrap().name, "General Ward");
        assert!(record.is_active());
        assert!(record.assets.is_empty());
    }

    #[test]
    fn test_assignment_deserialize_missing_optional_fields() {
        let record: BedAssignment = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "bed_object": { "id": Uuid::new_v4(), "name": "Bed 2", "bed_type": "ICU" },
            "start_date": "2024-03-12T09:30:00Z"
        }))
        .unwrap();

        assert!(record.end_date.is_none());
        assert!(record.assets.is_empty());
        assert!(record.bed.location.is_none());
    }

    #[test]
    fn test_is_active() {
        let b = bed("Bed 1", "ICU");
        assert!(assignment(&b, hours_ago(2), None, vec![]).is_active());
        assert!(!assignment(&b, hours_ago(4), Some(hours_ago(2)), vec![]).is_active());
    }

    #[test]
    fn test_history_from_descending_accepts_ordered() {
        let b = bed("Bed 1", "ICU");
        let records = vec![
            assignment(&b, hours_ago(1), None, vec![]),
            assignment(&b, hours_ago(1), Some(hours_ago(1)), vec![]),
            assignment(&b, hours_ago(5), Some(hours_ago(1)), vec![]),
        ];
        let history = BedHistory::from_descending(records).unwrap();
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_from_descending_rejects_out_of_order() {
        let b = bed("Bed 1", "ICU");
        let records = vec![
            assignment(&b, hours_ago(5), None, vec![]),
            assignment(&b, hours_ago(8), Some(hours_ago(5)), vec![]),
            assignment(&b, hours_ago(3), Some(hours_ago(2)), vec![]),
        ];
        assert_eq!(
            BedHistory::from_descending(records),
            Err(BedHistoryError::OutOfOrder { index: 2 })
        );
    }

    #[test]
    fn test_history_from_unordered_sorts_newest_first() {
        let b = bed("Bed 1", "ICU");
        let oldest = assignment(&b, hours_ago(10), Some(hours_ago(6)), vec![]);
        let middle = assignment(&b, hours_ago(6), Some(hours_ago(2)), vec![]);
        let newest = assignment(&b, hours_ago(2), None, vec![]);

        let history =
            BedHistory::from_unordered(vec![middle.clone(), oldest.clone(), newest.clone()]);
        assert_eq!(history.records(), &[newest.clone(), middle, oldest]);
        assert_eq!(history.current(), Some(&newest));
    }

    #[test]
    fn test_history_current_none_when_discharged() {
        let b = bed("Bed 1", "ICU");
        let history =
            BedHistory::from_unordered(vec![assignment(&b, hours_ago(3), Some(hours_ago(1)), vec![])]);
        assert!(history.current().is_none());
        assert!(BedHistory::default().is_empty());
    }
}
