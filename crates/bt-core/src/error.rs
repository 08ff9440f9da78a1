//! Engine error taxonomy.
//!
//! Every failure is terminal for the invocation: the engine never retries
//! internally and never produces a partial summary.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors produced by the attendance engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The input contained no valid log records.
    #[error("no valid log records found in input")]
    EmptyInput,

    /// A line failed structural parsing. Carries the 1-based line number
    /// and the offending raw text.
    #[error("malformed record on line {line}: {reason} ({content:?})")]
    MalformedRecord {
        line: usize,
        reason: String,
        content: String,
    },

    /// The decision text matched neither "entry" nor "exit".
    #[error("unclassifiable decision text: {decision:?}")]
    UnclassifiableDecision { decision: String },

    /// The event sequence violated chronological or state-machine
    /// expectations.
    #[error("invalid event sequence: {0}")]
    InvalidSequence(#[from] SequenceViolation),
}

/// The specific way an event sequence was invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceViolation {
    /// The first event was an exit; there is no established starting
    /// presence to work from.
    #[error("first event at {timestamp} is an exit, expected an entry")]
    FirstEventExit { timestamp: NaiveDateTime },

    /// A timestamp moved backward relative to its predecessor.
    #[error("timestamp {current} is earlier than predecessor {previous}")]
    NonMonotonic {
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },

    /// An entry occurred after the day was already closed by an office
    /// exit. A second exit/entry cycle on one calendar day is not modeled.
    #[error("entry at {timestamp} after the day was closed by an office exit")]
    EntryAfterClose { timestamp: NaiveDateTime },

    /// The records mix more than one employee or calendar date.
    #[error("records mix employee-days: {first} vs {second}")]
    MixedGrouping { first: String, second: String },
}
