//! 8-hour workday projection.
//!
//! Works purely off the aggregated totals and the last event timestamp.
//! There is no ambient clock: "now" is always the last event in the input.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::aggregate::DayAggregate;

/// Required net office time for a full workday, in seconds.
pub const REQUIRED_SECONDS: i64 = 8 * 3600;

/// Whether the workday is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Completed,
    InProgress,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the 8-hour projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// `max(0, 28800 - net_office_seconds)`.
    pub required_seconds: i64,
    /// Projected logout assuming uninterrupted continued presence. Set only
    /// while the requirement is unmet and the employee has not fully left;
    /// a closed-but-short day gets no retroactive projection.
    pub expected_logout: Option<NaiveDateTime>,
    pub status: Status,
}

/// Compute the shortfall and projected logout for an aggregated day.
///
/// The day counts as completed once it is closed by an office exit or once
/// the 8-hour requirement is met, whichever comes first.
#[must_use]
pub fn project(day: &DayAggregate) -> Projection {
    let required_seconds = (REQUIRED_SECONDS - day.net_office_seconds).max(0);

    let expected_logout = if required_seconds > 0 && day.last_out.is_none() {
        Some(day.last_event + Duration::seconds(required_seconds))
    } else {
        None
    };

    let status = if day.last_out.is_some() || required_seconds == 0 {
        Status::Completed
    } else {
        Status::InProgress
    };

    Projection {
        required_seconds,
        expected_logout,
        status,
    }
}
