//! Components value object - the unsigned hours/minutes/seconds split
//!
//! The sign of the originating time is discarded: `-1:02:03` and `1:02:03`
//! have the same components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Non-negative decomposition of a time's magnitude
///
/// Serializes as `{"hh": .., "mm": .., "ss": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HmsComponents {
    /// Whole hours, not wrapped at 24
    pub hh: u64,
    /// Minutes, `0..60`
    pub mm: u64,
    /// Seconds, `0..60`
    pub ss: u64,
}

impl HmsComponents {
    /// Split the absolute value of a signed second count.
    pub fn from_total_seconds(total_seconds: i64) -> Self {
        let total = total_seconds.unsigned_abs();
        Self {
            hh: total / SECONDS_PER_HOUR,
            mm: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            ss: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn to_tuple(self) -> (u64, u64, u64) {
        (self.hh, self.mm, self.ss)
    }

    /// Mapping form keyed by `"hh"`, `"mm"` and `"ss"`.
    pub fn to_map(self) -> BTreeMap<&'static str, u64> {
        BTreeMap::from([("hh", self.hh), ("mm", self.mm), ("ss", self.ss)])
    }
}

impl From<HmsComponents> for (u64, u64, u64) {
    fn from(components: HmsComponents) -> Self {
        components.to_tuple()
    }
}
