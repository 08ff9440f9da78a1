//! Single-pass aggregation of swipe events for one employee-day.
//!
//! A small state machine walks the classified events in order, tracking
//! first entry, last office exit, and cafeteria intervals. Timestamps must
//! not move backward; non-monotonic input is rejected, not repaired.

use chrono::NaiveDateTime;

use crate::error::{EngineError, SequenceViolation};
use crate::event::{Direction, SwipeEvent, Zone};

/// A cafeteria visit. Open means the return swipe has not happened yet in
/// the given sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CafeteriaInterval {
    Closed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Open {
        start: NaiveDateTime,
    },
}

impl CafeteriaInterval {
    /// Seconds covered by the interval, with `as_of` standing in for the
    /// end of an open visit.
    fn seconds(&self, as_of: NaiveDateTime) -> i64 {
        match *self {
            Self::Closed { start, end } => (end - start).num_seconds(),
            Self::Open { start } => (as_of - start).num_seconds(),
        }
    }

    /// True if the visit has no closing entry.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Totals for one employee-day after the event sequence is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAggregate {
    /// Timestamp of the first entry.
    pub first_in: NaiveDateTime,
    /// Timestamp of the resolved office exit, if the employee fully left.
    pub last_out: Option<NaiveDateTime>,
    /// Timestamp of the last event in the sequence.
    pub last_event: NaiveDateTime,
    /// Cafeteria visits in order; at most the final one is open.
    pub cafeteria_intervals: Vec<CafeteriaInterval>,
    /// Sum over all intervals, an open one counted up to `last_event`.
    pub cafeteria_seconds: i64,
    /// Presence time minus cafeteria time, clamped to zero.
    pub net_office_seconds: i64,
}

/// Fold an ordered event sequence into day totals.
pub fn aggregate(events: &[SwipeEvent]) -> Result<DayAggregate, EngineError> {
    let Some(first) = events.first() else {
        return Err(EngineError::EmptyInput);
    };
    if first.direction == Direction::Exit {
        return Err(SequenceViolation::FirstEventExit {
            timestamp: first.timestamp,
        }
        .into());
    }

    let first_in = first.timestamp;
    let mut last_out: Option<NaiveDateTime> = None;
    let mut open_start: Option<NaiveDateTime> = None;
    let mut intervals: Vec<CafeteriaInterval> = Vec::new();
    let mut previous = first.timestamp;

    for event in events {
        if event.timestamp < previous {
            return Err(SequenceViolation::NonMonotonic {
                previous,
                current: event.timestamp,
            }
            .into());
        }

        match event.direction {
            Direction::Entry => {
                if last_out.is_some() {
                    return Err(SequenceViolation::EntryAfterClose {
                        timestamp: event.timestamp,
                    }
                    .into());
                }
                // Any entry closes an open cafeteria visit; a plain
                // re-entry with nothing open changes no state.
                if let Some(start) = open_start.take() {
                    intervals.push(CafeteriaInterval::Closed {
                        start,
                        end: event.timestamp,
                    });
                }
            }
            Direction::Exit => match event.zone {
                Zone::Cafeteria => {
                    // Being away is not yet a final exit.
                    if open_start.is_none() {
                        open_start = Some(event.timestamp);
                        last_out = None;
                    }
                }
                Zone::Office => {
                    // A full exit ends any cafeteria visit still open.
                    if let Some(start) = open_start.take() {
                        intervals.push(CafeteriaInterval::Closed {
                            start,
                            end: event.timestamp,
                        });
                    }
                    last_out = Some(event.timestamp);
                }
            },
        }

        previous = event.timestamp;
    }

    let last_event = previous;
    if let Some(start) = open_start {
        intervals.push(CafeteriaInterval::Open { start });
    }

    let cafeteria_seconds: i64 = intervals.iter().map(|i| i.seconds(last_event)).sum();
    let presence_end = last_out.unwrap_or(last_event);
    let net_office_seconds = ((presence_end - first_in).num_seconds() - cafeteria_seconds).max(0);

    Ok(DayAggregate {
        first_in,
        last_out,
        last_event,
        cafeteria_intervals: intervals,
        cafeteria_seconds,
        net_office_seconds,
    })
}
