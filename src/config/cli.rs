use crate::domain::ports::Clock;
use chrono::{DateTime, Utc};

/// Production clock: the wall clock, read per call.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
