//! Entry identifiers and their allocation
//!
//! Entry ids are millisecond timestamps stored as plain integers, matching
//! the persisted `id` field of existing data files and backups. Allocation
//! goes through the [`IdGenerator`] trait so two entries created within the
//! same millisecond still get distinct ids, and so tests can pin ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier for a savings or expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Create an id from a raw millisecond value
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Source of fresh entry ids
pub trait IdGenerator {
    /// Allocate the next unique id
    fn next_id(&mut self) -> EntryId;
}

/// Wall-clock id generator
///
/// Issues the current time in milliseconds, bumped past the previously
/// issued id when two calls land in the same millisecond.
#[derive(Debug, Default)]
pub struct SystemIdGenerator {
    last_issued: i64,
}

impl SystemIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SystemIdGenerator {
    fn next_id(&mut self) -> EntryId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last_issued + 1);
        self.last_issued = id;
        EntryId::from_millis(id)
    }
}

/// Id generator that replays a fixed sequence, for tests
///
/// Panics if more ids are requested than provided.
#[derive(Debug)]
pub struct FixedIdGenerator {
    ids: std::collections::VecDeque<i64>,
}

impl FixedIdGenerator {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&mut self) -> EntryId {
        let millis = self.ids.pop_front().expect("fixed id generator exhausted");
        EntryId::from_millis(millis)
    }
}
