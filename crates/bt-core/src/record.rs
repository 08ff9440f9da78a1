//! Raw badge-log records and line parsing.
//!
//! One record per non-empty input line, in input order. Lines are
//! tab-delimited: employee ID, name, date, timestamp, access-point label,
//! decision text.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, SequenceViolation};

/// Number of tab-delimited fields in a badge-log line.
const FIELD_COUNT: usize = 6;

/// Accepted timestamp layouts, tried in order. Badge exports disagree on
/// day-first vs year-first ordering and on the separator.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Accepted date layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// A single badge-scan log line, structurally validated but not yet
/// classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub employee_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    /// Free-text access-point description (e.g. "LD CHN-1 (ASC) Cafeteria IN-1").
    pub location_label: String,
    /// Free-text badge decision (e.g. "Entry Granted").
    pub decision: String,
}

/// Parse a timestamp in any of the supported layouts.
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}

/// Parse a calendar date in any of the supported layouts.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
}

/// Parse raw multi-line badge-log text into ordered records.
///
/// Blank lines are skipped. Order is preserved; no sorting is performed.
/// All records must belong to one employee and one date.
pub fn parse_logs(raw: &str) -> Result<Vec<LogRecord>, EngineError> {
    let mut records = Vec::new();

    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record = parse_line(line).map_err(|reason| EngineError::MalformedRecord {
            line: index + 1,
            reason,
            content: line.to_string(),
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    check_grouping(&records)?;
    tracing::debug!(count = records.len(), "parsed badge-log records");
    Ok(records)
}

fn parse_line(line: &str) -> Result<LogRecord, String> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} tab-delimited fields, got {}",
            fields.len()
        ));
    }

    let date = parse_date(fields[2]).ok_or_else(|| format!("unparseable date: {}", fields[2]))?;
    let timestamp = parse_timestamp(fields[3])
        .ok_or_else(|| format!("unparseable timestamp: {}", fields[3]))?;

    Ok(LogRecord {
        employee_id: fields[0].to_string(),
        name: fields[1].to_string(),
        date,
        timestamp,
        location_label: fields[4].to_string(),
        decision: fields[5].to_string(),
    })
}

/// All records in one invocation must share one employee ID and one date.
fn check_grouping(records: &[LogRecord]) -> Result<(), EngineError> {
    let first = &records[0];
    for record in &records[1..] {
        if record.employee_id != first.employee_id || record.date != first.date {
            return Err(SequenceViolation::MixedGrouping {
                first: format!("{}/{}", first.employee_id, first.date),
                second: format!("{}/{}", record.employee_id, record.date),
            }
            .into());
        }
    }
    Ok(())
}
