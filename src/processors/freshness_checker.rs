use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::utils::constants::TIMESTAMP_FORMAT;

/// Outcome of comparing a station's declared timestamp with the run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Freshness {
    /// Within the window. Future timestamps land here too.
    Fresh,
    Stale { age: Duration },
    /// Date or time could not be read.
    Unreadable,
}

impl Freshness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }
}

/// Accepts a reading when `now - declared <= window`.
///
/// There is no lower bound: a station whose clock runs ahead of ours is still
/// accepted.
#[derive(Debug, Clone)]
pub struct FreshnessChecker {
    window: Duration,
    timezone: Tz,
}

impl FreshnessChecker {
    pub fn new(window: Duration, timezone: Tz) -> Self {
        Self { window, timezone }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Read `dd/mm/yyyy` + `HH:MM` as wall-clock time in the checker's timezone.
    ///
    /// Ambiguous times (the repeated hour when DST ends) resolve to the
    /// standard-time instant. Times inside the spring-forward gap are read with
    /// the offset in force just before the gap.
    pub fn parse_declared(&self, date: &str, time: &str) -> Option<DateTime<Tz>> {
        let text = format!("{} {}", date.trim(), time.trim());
        let naive = NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).ok()?;

        match self.timezone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(_, standard) => Some(standard),
            LocalResult::None => {
                let before_gap = self
                    .timezone
                    .from_local_datetime(&(naive - Duration::hours(3)))
                    .latest()?;
                let offset = before_gap.offset().fix().local_minus_utc();
                let utc = naive - Duration::seconds(i64::from(offset));
                Some(self.timezone.from_utc_datetime(&utc))
            }
        }
    }

    pub fn check(&self, date: &str, time: &str, now: DateTime<Tz>) -> Freshness {
        match self.parse_declared(date, time) {
            Some(declared) => {
                let age = now.signed_duration_since(declared);
                if age <= self.window {
                    Freshness::Fresh
                } else {
                    Freshness::Stale { age }
                }
            }
            None => Freshness::Unreadable,
        }
    }
}
