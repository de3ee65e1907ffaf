// Schedule date resolution: which `YYYY-MM-DD` key to look up.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidOverride { input: String },

    #[error("invalid UTC offset of {hours} hours")]
    InvalidOffset { hours: i32 },
}

/// Resolve the schedule key to use.
///
/// An explicit `date_override` wins and is normalized (e.g. `2025-1-5` ->
/// `2025-01-05`). Otherwise "today" is the calendar date of `now` on a clock
/// `utc_offset_hours` away from UTC.
pub fn resolve_date_key(
    date_override: Option<&str>,
    now: DateTime<Utc>,
    utc_offset_hours: i32,
) -> Result<String, DateError> {
    if let Some(input) = date_override {
        let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
            DateError::InvalidOverride {
                input: input.to_string(),
            }
        })?;
        return Ok(date.format(DATE_FORMAT).to_string());
    }

    let offset = FixedOffset::east_opt(utc_offset_hours * 3600).ok_or(DateError::InvalidOffset {
        hours: utc_offset_hours,
    })?;
    Ok(now.with_timezone(&offset).format(DATE_FORMAT).to_string())
}
