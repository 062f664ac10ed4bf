//! Builders for domain test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::{faker::lorem::en::Word, Fake};
use uuid::Uuid;

use crate::models::{Asset, Bed, BedAssignment};

/// Fixed reference instant so ordering in tests is deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap()
}

pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    base_time() - Duration::hours(hours)
}

pub fn asset(name: &str) -> Asset {
    Asset::new(Uuid::new_v4(), name)
}

pub fn random_asset() -> Asset {
    let name: String = Word().fake();
    Asset::new(Uuid::new_v4(), name)
}

pub fn bed(name: &str, bed_type: &str) -> Bed {
    Bed {
        id: Uuid::new_v4(),
        name: name.to_string(),
        bed_type: bed_type.to_string(),
        location: None,
    }
}

pub fn assignment(
    bed: &Bed,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    assets: Vec<Asset>,
) -> BedAssignment {
    BedAssignment {
        id: Uuid::new_v4(),
        bed: bed.clone(),
        start_date: start,
        end_date: end,
        assets,
    }
}
