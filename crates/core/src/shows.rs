//! Past/upcoming classification of shows.

use chrono::Duration;

use crate::types::Timestamp;

/// A show stays "upcoming" for this many hours after it starts.
pub const IN_PROGRESS_GRACE_HOURS: i64 = 3;

/// A show is past once its start time is at least
/// [`IN_PROGRESS_GRACE_HOURS`] behind `now`.
pub fn is_past(start_time: Timestamp, now: Timestamp) -> bool {
    start_time <= now - Duration::hours(IN_PROGRESS_GRACE_HOURS)
}

/// Earliest start time that still counts as upcoming at `now`.
///
/// Repositories bind this to `start_time > $n` when counting upcoming shows.
pub fn upcoming_cutoff(now: Timestamp) -> Timestamp {
    now - Duration::hours(IN_PROGRESS_GRACE_HOURS)
}

/// Split `shows` into `(past, upcoming)`, preserving input order.
pub fn partition_by_time<T>(
    shows: Vec<T>,
    now: Timestamp,
    start_of: impl Fn(&T) -> Timestamp,
) -> (Vec<T>, Vec<T>) {
    shows.into_iter().partition(|show| is_past(start_of(show), now))
}
