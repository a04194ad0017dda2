use chrono::{DateTime, Utc};

/// Source of "now" for lifecycle timestamps and assigned dates.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
