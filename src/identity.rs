// Identity and clock capabilities injected into the lifecycle engine

use chrono::{DateTime, NaiveDate, Utc};

/// Supplies the acting party when a caller does not name one
pub trait IdentityProvider: Send + Sync {
    fn current_actor(&self) -> String;
}

/// Fixed identity, typically taken from configuration
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub String);

impl StaticIdentity {
    pub fn new(actor: impl Into<String>) -> Self {
        Self(actor.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_actor(&self) -> String {
        self.0.clone()
    }
}

/// Time source for workflow stamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Workflow dates carry no time of day
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
