//! Core attendance engine: raw badge-log text in, attendance summary out.
//!
//! The pipeline runs strictly left to right over one employee-day:
//! line parsing → swipe classification → single-pass aggregation →
//! 8-hour projection → summary assembly. The whole computation is pure and
//! synchronous; "now" is the last event timestamp, never a wall clock, so
//! identical input always yields an identical summary.

pub mod aggregate;
pub mod error;
pub mod event;
pub mod projection;
pub mod record;
pub mod summary;

pub use aggregate::{CafeteriaInterval, DayAggregate, aggregate};
pub use error::{EngineError, SequenceViolation};
pub use event::{Direction, SwipeEvent, Zone, classify, classify_direction, classify_zone};
pub use projection::{Projection, REQUIRED_SECONDS, Status, project};
pub use record::{LogRecord, parse_logs};
pub use summary::{AttendanceSummary, format_duration};

/// Run the full pipeline over one employee-day of raw badge-log text.
pub fn calculate_day(raw: &str) -> Result<AttendanceSummary, EngineError> {
    let records = record::parse_logs(raw)?;
    let events = records
        .iter()
        .map(event::classify)
        .collect::<Result<Vec<_>, _>>()?;

    let day = aggregate::aggregate(&events)?;
    let projection = projection::project(&day);

    let first = &records[0];
    Ok(summary::assemble(
        first.employee_id.clone(),
        first.name.clone(),
        first.date,
        &day,
        &projection,
    ))
}
