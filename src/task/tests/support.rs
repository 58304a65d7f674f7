//! Test doubles shared by the unit tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that moves forward one second each time it is read.
#[derive(Debug)]
pub(super) struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2030, 1, 1, 0, 0, 0)
                .single()
                .expect("fixed start instant is valid"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(tick)
    }
}
