//! HMS Time Value Object
//!
//! A signed duration with whole-second precision, written as
//! `[-]H:MM:SS`. Hours are unbounded; there is no notion of a day.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::iter;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HmsError, HmsResult};
use crate::parser::{self, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::value;

use super::HmsComponents;

/// HMS time value object
///
/// Wraps a signed count of seconds. Equality and ordering follow that count,
/// so `1:00` and `0:60:00` are equal.
///
/// Build one from text with [`HmsTime::parse`] (or `str::parse`), which
/// validates the input, or from a known count with [`HmsTime::from_seconds`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HmsTime {
    total_seconds: i64,
}

impl HmsTime {
    /// `0:00:00`
    pub const ZERO: HmsTime = HmsTime { total_seconds: 0 };

    /// Parse `[-]H:MM[:SS]`.
    ///
    /// # Example
    /// ```
    /// use hmscalc::HmsTime;
    ///
    /// let t = HmsTime::parse("2:03").unwrap();
    /// assert_eq!(t.to_string(), "2:03:00");
    /// ```
    pub fn parse(input: &str) -> HmsResult<Self> {
        parser::parse_hms(input).map(Self::from_seconds)
    }

    /// Wrap a raw second count. No validation is needed: every `i64` is a
    /// valid time.
    pub const fn from_seconds(total_seconds: i64) -> Self {
        Self { total_seconds }
    }

    /// Parse a dynamically typed value. Anything other than a JSON string
    /// fails with [`HmsError::NotTimeString`].
    pub fn from_value(input: &serde_json::Value) -> HmsResult<Self> {
        match input.as_str() {
            Some(text) => Self::parse(text),
            None => Err(HmsError::NotTimeString {
                type_name: value::type_name(input).to_string(),
            }),
        }
    }

    /// Total of a sequence of times. An empty sequence sums to [`HmsTime::ZERO`].
    pub fn sum<I>(times: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<HmsTime>,
    {
        times
            .into_iter()
            .map(Into::into)
            .fold(Self::ZERO, |acc, t| acc + t)
    }

    /// `self + rhs`, or [`HmsError::Overflow`] when the result leaves the
    /// `i64` range. The `+` operator does not check.
    pub fn checked_add(self, rhs: HmsTime) -> HmsResult<Self> {
        self.total_seconds
            .checked_add(rhs.total_seconds)
            .map(Self::from_seconds)
            .ok_or_else(|| overflow(self, "+", rhs))
    }

    /// `self - rhs`, or [`HmsError::Overflow`] when the result leaves the
    /// `i64` range.
    pub fn checked_sub(self, rhs: HmsTime) -> HmsResult<Self> {
        self.total_seconds
            .checked_sub(rhs.total_seconds)
            .map(Self::from_seconds)
            .ok_or_else(|| overflow(self, "-", rhs))
    }

    /// Like [`HmsTime::sum`] but stops at the first overflowing step.
    ///
    /// # Example
    /// ```
    /// use hmscalc::HmsTime;
    ///
    /// let big = HmsTime::from_seconds(i64::MAX);
    /// assert!(HmsTime::checked_sum([big, HmsTime::from_seconds(1)]).is_err());
    /// assert_eq!(HmsTime::checked_sum([big]).unwrap(), big);
    /// ```
    pub fn checked_sum<I>(times: I) -> HmsResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<HmsTime>,
    {
        times
            .into_iter()
            .map(Into::into)
            .try_fold(Self::ZERO, |acc, t| acc.checked_add(t))
    }

    /// Total of a dynamically typed sequence.
    ///
    /// The input must be an array; each element must be a time string.
    pub fn sum_value(input: &serde_json::Value) -> HmsResult<Self> {
        value::sum(input)
    }

    /// Compare against a dynamically typed value. Returns `None` for
    /// anything that is not a valid time string.
    pub fn compare_value(&self, other: &serde_json::Value) -> Option<Ordering> {
        Self::from_value(other).ok().map(|other| self.cmp(&other))
    }

    pub fn to_seconds(&self) -> i64 {
        self.total_seconds
    }

    pub fn to_minutes(&self) -> f64 {
        self.total_seconds as f64 / SECONDS_PER_MINUTE as f64
    }

    pub fn to_hours(&self) -> f64 {
        self.total_seconds as f64 / SECONDS_PER_HOUR as f64
    }

    /// `(hours, minutes, seconds)` of the absolute value.
    pub fn to_tuple(&self) -> (u64, u64, u64) {
        self.to_components().to_tuple()
    }

    /// Same values as [`HmsTime::to_tuple`] keyed by `"hh"`, `"mm"`, `"ss"`.
    pub fn to_map(&self) -> BTreeMap<&'static str, u64> {
        self.to_components().to_map()
    }

    pub fn to_components(&self) -> HmsComponents {
        HmsComponents::from_total_seconds(self.total_seconds)
    }

    pub fn is_negative(&self) -> bool {
        self.total_seconds < 0
    }
}

fn overflow(left: HmsTime, op: &str, right: HmsTime) -> HmsError {
    HmsError::Overflow {
        expression: format!("{left} {op} {right}"),
    }
}

impl fmt::Display for HmsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let HmsComponents { hh, mm, ss } = self.to_components();
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{hh}:{mm:02}:{ss:02}")
    }
}

impl fmt::Debug for HmsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HmsTime")
            .field(&self.to_string())
            .finish()
    }
}

impl FromStr for HmsTime {
    type Err = HmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HmsTime {
    type Error = HmsError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<&HmsTime> for HmsTime {
    fn from(t: &HmsTime) -> Self {
        *t
    }
}

impl Add for HmsTime {
    type Output = HmsTime;

    fn add(self, rhs: HmsTime) -> HmsTime {
        HmsTime::from_seconds(self.total_seconds + rhs.total_seconds)
    }
}

impl Add<&HmsTime> for &HmsTime {
    type Output = HmsTime;

    fn add(self, rhs: &HmsTime) -> HmsTime {
        *self + *rhs
    }
}

impl Sub for HmsTime {
    type Output = HmsTime;

    fn sub(self, rhs: HmsTime) -> HmsTime {
        HmsTime::from_seconds(self.total_seconds - rhs.total_seconds)
    }
}

impl Sub<&HmsTime> for &HmsTime {
    type Output = HmsTime;

    fn sub(self, rhs: &HmsTime) -> HmsTime {
        *self - *rhs
    }
}

impl iter::Sum for HmsTime {
    fn sum<I: Iterator<Item = HmsTime>>(iter: I) -> Self {
        HmsTime::sum(iter)
    }
}

impl<'a> iter::Sum<&'a HmsTime> for HmsTime {
    fn sum<I: Iterator<Item = &'a HmsTime>>(iter: I) -> Self {
        HmsTime::sum(iter)
    }
}

impl Serialize for HmsTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HmsTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HmsTimeVisitor;

        impl de::Visitor<'_> for HmsTimeVisitor {
            type Value = HmsTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a time string like \"1:30\" or \"-2:05:09\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HmsTime, E> {
                HmsTime::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HmsTimeVisitor)
    }
}
