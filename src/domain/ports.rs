use chrono::{DateTime, Utc};

/// Source of "now". The engine is generic over this so tests can freeze the
/// instant and re-run a classification deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
