//! Domain services for the bed timeline.
//!
//! Services are pure functions over domain models.

pub mod asset_diff;
pub mod timeline;
pub mod timeline_view;

pub use asset_diff::diff_assets;
pub use timeline::{assemble, assemble_history};
pub use timeline_view::{build_node_view, build_node_views};
