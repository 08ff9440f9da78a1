//! Assembly of the attendance summary returned to callers.
//!
//! Pure field assembly plus duration formatting; no further computation
//! happens here. The serde field names are the wire contract consumed by
//! the browser client.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::aggregate::DayAggregate;
use crate::projection::{Projection, Status};

/// The structured attendance result for one employee-day. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub employee_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub status: Status,
    pub first_in: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_out: Option<NaiveDateTime>,
    pub total_cafeteria_seconds: i64,
    pub total_cafeteria_duration: String,
    pub net_in_office_seconds: i64,
    pub net_in_office_duration: String,
    pub required_seconds_for_8_hours: i64,
    pub remaining_duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_logout: Option<NaiveDateTime>,
}

/// Format a second count as "2h 55m 13s", dropping leading zero units.
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Assemble the final summary from the aggregated day and its projection.
#[must_use]
pub fn assemble(
    employee_id: String,
    name: String,
    date: NaiveDate,
    day: &DayAggregate,
    projection: &Projection,
) -> AttendanceSummary {
    AttendanceSummary {
        employee_id,
        name,
        date,
        status: projection.status,
        first_in: day.first_in,
        last_out: day.last_out,
        total_cafeteria_seconds: day.cafeteria_seconds,
        total_cafeteria_duration: format_duration(day.cafeteria_seconds),
        net_in_office_seconds: day.net_office_seconds,
        net_in_office_duration: format_duration(day.net_office_seconds),
        required_seconds_for_8_hours: projection.required_seconds,
        remaining_duration: format_duration(projection.required_seconds),
        expected_logout: projection.expected_logout,
    }
}
