//! Common validation utilities.

use chrono::format::{Item, StrftimeItems};
use validator::ValidationError;

use crate::datetime::{utc_offset, DATE_TIME_SEPARATOR, MAX_UTC_OFFSET_MINUTES};

/// Validates a chrono format string used for timeline labels.
///
/// The format must parse and must contain the `;` separator so it can be
/// split into two labels.
pub fn validate_date_time_format(format: &str) -> Result<(), ValidationError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        let mut err = ValidationError::new("date_time_format_invalid");
        err.message = Some("Date/time format contains an unknown specifier".into());
        return Err(err);
    }

    if !format.contains(DATE_TIME_SEPARATOR) {
        let mut err = ValidationError::new("date_time_format_separator");
        err.message = Some("Date/time format must contain a ';' separator".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a UTC offset given in minutes east of UTC.
pub fn validate_utc_offset_minutes(minutes: i32) -> Result<(), ValidationError> {
    if utc_offset(minutes).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("utc_offset_range");
        err.message = Some(
            format!(
                "UTC offset must be between -{0} and {0} minutes",
                MAX_UTC_OFFSET_MINUTES
            )
            .into(),
        );
        Err(err)
    }
}

/// Validates that a batch of `count` records does not exceed `max`.
pub fn validate_record_count(count: usize, max: usize) -> Result<(), ValidationError> {
    if count <= max {
        Ok(())
    } else {
        let mut err = ValidationError::new("record_count");
        err.message = Some(format!("At most {} records may be submitted", max).into());
        Err(err)
    }
}
