//! Identifiers
//!
//! Items and destinations get opaque, time-based string ids.
//! Plan steps get a numeric id that is stable for their whole lifetime.

use std::fmt;

use chrono::Utc;

/// Opaque identifier of a bucket-list item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Opaque identifier of a travel destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Stable identifier of a plan step, unique within its [`crate::BucketList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanId(u64);

impl PlanId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plan-{}", self.0)
    }
}

/// Sequential source of [`PlanId`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanIdCounter {
    next: u64,
}

impl PlanIdCounter {
    pub fn next_id(&mut self) -> PlanId {
        let id = PlanId(self.next);
        self.next += 1;
        id
    }
}

/// Issues millisecond-timestamp ids, strictly increasing per generator.
///
/// Two ids requested within the same millisecond (or after the clock
/// steps backwards) are bumped past the last one handed out. Once
/// `i64::MAX` has been issued or observed no further ids are available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeIdGenerator {
    last: i64,
}

impl TimeIdGenerator {
    /// Next id from the wall clock
    pub fn next_raw(&mut self) -> Option<String> {
        self.next_raw_at(Utc::now().timestamp_millis())
    }

    /// Next id for an explicit clock reading; `None` when the id space is exhausted
    pub fn next_raw_at(&mut self, now_ms: i64) -> Option<String> {
        let value = now_ms.max(self.last.checked_add(1)?);
        self.last = value;
        Some(value.to_string())
    }

    /// Account for an externally supplied id so it is never issued again
    pub fn observe(&mut self, raw: &str) {
        if let Ok(value) = raw.parse::<i64>() {
            self.last = self.last.max(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_ids_strictly_increase() {
        let mut ids = TimeIdGenerator::default();
        assert_eq!(ids.next_raw_at(1_000).as_deref(), Some("1000"));
        assert_eq!(ids.next_raw_at(1_000).as_deref(), Some("1001"));
        // clock went backwards
        assert_eq!(ids.next_raw_at(500).as_deref(), Some("1002"));
        assert_eq!(ids.next_raw_at(5_000).as_deref(), Some("5000"));
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = TimeIdGenerator::default();
        ids.observe("42");
        ids.observe("not-a-number");
        assert_eq!(ids.next_raw_at(10).as_deref(), Some("43"));
    }

    #[test]
    fn test_exhausted_after_max_id() {
        let mut ids = TimeIdGenerator::default();
        ids.observe(&i64::MAX.to_string());
        assert_eq!(ids.next_raw_at(10), None);
        assert_eq!(ids.next_raw(), None);

        let mut ids = TimeIdGenerator::default();
        assert_eq!(ids.next_raw_at(i64::MAX).as_deref(), Some(i64::MAX.to_string().as_str()));
        assert_eq!(ids.next_raw_at(i64::MAX), None);
    }

    #[test]
    fn test_plan_counter() {
        let mut counter = PlanIdCounter::default();
        let a = counter.next_id();
        let b = counter.next_id();
        assert_ne!(a, b);
        assert_eq!(b.get(), a.get() + 1);
    }
}
