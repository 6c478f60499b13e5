use chrono::NaiveDateTime;

/// Source of the "current time" stamped on reports.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
