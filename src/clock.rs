//! Timestamp source for todo items
//!
//! Timestamps are ISO-8601 strings in UTC with millisecond precision, e.g.
//! `2026-10-19T08:30:00.123Z`. The format is fixed-width, so string order
//! and chronological order agree.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of ISO-8601 timestamps.
///
/// Successive calls must never return an earlier instant than a previous call.
pub trait Clock: Send + Sync {
    /// Current timestamp
    fn now(&self) -> String;
}

/// Format a UTC instant the way items store it
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wall clock that refuses to step backwards.
///
/// If the system time moves behind the last value handed out, the last value
/// is returned again.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        let current = Utc::now();
        let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let issued = match *last {
            Some(prev) if prev > current => {
                log::warn!("System clock moved backwards, holding at {}", format_timestamp(prev));
                prev
            }
            _ => current,
        };
        *last = Some(issued);
        format_timestamp(issued)
    }
}

/// Deterministic clock for tests and scripted sessions
///
/// The first call returns `start`; each later call advances by `step`.
/// A zero step yields the same timestamp forever, which is still non-decreasing.
/// Once the next instant is out of range, the last one is returned again.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicI64,
    last: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            step: step.max(Duration::zero()),
            ticks: AtomicI64::new(0),
            last: Mutex::new(start),
        }
    }

    fn instant_at(&self, tick: i64) -> Option<DateTime<Utc>> {
        let tick = i32::try_from(tick).ok()?;
        let offset = self.step.checked_mul(tick)?;
        self.start.checked_add_signed(offset)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> String {
        let tick = self
            .ticks
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |t| Some(t.saturating_add(1)))
            .unwrap_or_else(|t| t);
        let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match self.instant_at(tick) {
            Some(instant) if instant >= *last => *last = instant,
            _ => log::warn!("Stepping clock out of range at tick {}, holding", tick),
        }
        format_timestamp(*last)
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> String {
        (**self).now()
    }
}
