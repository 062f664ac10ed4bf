//! Asset diff between consecutive bed assignments.
//!
//! Classifies assets into three disjoint lists:
//! 1. Newly linked: in the current assignment only
//! 2. Existing: in both assignments
//! 3. Unlinked: in the previous assignment only
//!
//! Membership is decided by asset id through keyed lookups on both sides, so
//! the diff runs in linear time.

use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{Asset, AssetDiff};

/// Diffs the assets of the previous assignment against the current one.
///
/// `existing` and `unlinked` keep the order of `previous` and carry the
/// previous side's records; `newly_linked` keeps the order of `current`.
/// Each input element is classified on its own, so a duplicated id shows up
/// once per occurrence in the same list.
pub fn diff_assets(previous: &[Asset], current: &[Asset]) -> AssetDiff {
    let previous_ids: HashSet<Uuid> = previous.iter().map(|asset| asset.id).collect();
    let current_ids: HashSet<Uuid> = current.iter().map(|asset| asset.id).collect();

    let (existing, unlinked): (Vec<Asset>, Vec<Asset>) = previous
        .iter()
        .cloned()
        .partition(|asset| current_ids.contains(&asset.id));

    let newly_linked = current
        .iter()
        .filter(|asset| !previous_ids.contains(&asset.id))
        .cloned()
        .collect();

    AssetDiff {
        newly_linked,
        existing,
        unlinked,
    }
}
