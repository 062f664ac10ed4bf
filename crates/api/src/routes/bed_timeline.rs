//! Bed activity timeline endpoint handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{FixedOffset, Utc};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::config::{TimelineConfig, TimelineOrdering};
use crate::error::ApiError;
use domain::models::timeline::{
    BedTimelineRequest, BedTimelineResponse, BedTimelineViewRequest, BedTimelineViewResponse,
};
use domain::models::{BedAssignment, BedHistory};
use domain::services::{assemble_history, build_node_views};

/// Assemble the timeline for already-fetched consultation bed records.
///
/// POST /api/v1/bed-timeline
pub async fn assemble_timeline(
    State(state): State<AppState>,
    payload: Result<Json<BedTimelineRequest>, JsonRejection>,
) -> Result<Json<BedTimelineResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let history = order_records(&state.config.timeline, request.consultation_beds)?;
    let entries = assemble_history(&history);

    info!(
        records = history.len(),
        active = history.current().is_some(),
        "Bed timeline assembled"
    );

    Ok(Json(BedTimelineResponse::from(entries)))
}

/// Assemble the timeline and project it into display-ready node views.
///
/// POST /api/v1/bed-timeline/view
pub async fn timeline_view(
    State(state): State<AppState>,
    payload: Result<Json<BedTimelineViewRequest>, JsonRejection>,
) -> Result<Json<BedTimelineViewResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let config = &state.config.timeline;
    let now = request.now.unwrap_or_else(Utc::now);
    let offset = viewer_offset(config, request.utc_offset_minutes)?;
    let history = order_records(config, request.consultation_beds)?;
    let entries = assemble_history(&history);
    let nodes = build_node_views(&entries, now, offset, &config.date_time_format);

    info!(
        records = history.len(),
        utc_offset = %offset,
        "Bed timeline view built"
    );

    Ok(Json(BedTimelineViewResponse { nodes }))
}

/// Offset for timestamp labels: the request's, else the configured one.
fn viewer_offset(
    config: &TimelineConfig,
    requested_minutes: Option<i32>,
) -> Result<FixedOffset, ApiError> {
    let minutes = requested_minutes.unwrap_or(config.utc_offset_minutes);
    shared::datetime::utc_offset(minutes)
        .ok_or_else(|| ApiError::Validation(format!("Invalid UTC offset: {} minutes", minutes)))
}

/// Applies the configured record limit and ordering policy.
fn order_records(
    config: &TimelineConfig,
    records: Vec<BedAssignment>,
) -> Result<BedHistory, ApiError> {
    shared::validation::validate_record_count(records.len(), config.max_records).map_err(|e| {
        ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default())
    })?;

    match config.ordering {
        TimelineOrdering::Strict => Ok(BedHistory::from_descending(records)?),
        TimelineOrdering::Sort => Ok(BedHistory::from_unordered(records)),
    }
}
