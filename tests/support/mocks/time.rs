// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use pressroom::application::ports::time::Clock;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by the clock mocks.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Advances one minute per `now()` call so tests can tell successive
/// timestamps apart.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl SteppingClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: Mutex::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(fixed_now())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        let now = self.base + Duration::minutes(*ticks);
        *ticks += 1;
        now
    }
}
