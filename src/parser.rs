//! Text parser for HMS times
//!
//! Accepts `[-]H+:M[M][:S[S]]` and nothing else. The whole input must match:
//! no surrounding whitespace, no `+` sign, ASCII digits only.
//!
//! Minutes and seconds are not range checked, so `1:99:99` is accepted and
//! simply contributes `99 * 60 + 99` seconds.

use crate::error::{HmsError, HmsResult};

/// Separator between hours, minutes and seconds
const FIELD_SEPARATOR: char = ':';

/// Maximum digits allowed in the minutes and seconds fields
const MAX_MINOR_DIGITS: usize = 2;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Fields of a time string that matched the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHms {
    /// Leading `-` was present
    pub negative: bool,
    pub hours: u64,
    pub minutes: u8,
    /// Zero when the seconds field was omitted
    pub seconds: u8,
}

impl ParsedHms {
    /// Signed total in seconds, or `None` if it does not fit in an `i64`.
    pub fn total_seconds(&self) -> Option<i64> {
        // u64 hours times 3600 plus the minor fields always fits in i128
        let magnitude = i128::from(self.hours) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.seconds);
        i64::try_from(if self.negative { -magnitude } else { magnitude }).ok()
    }
}

/// Match `input` against the grammar and return its fields.
///
/// Returns `None` when the text does not match. Hours that overflow `u64`
/// also yield `None`.
pub fn parse_fields(input: &str) -> Option<ParsedHms> {
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let mut fields = rest.split(FIELD_SEPARATOR);

    let hours = fields.next().filter(|f| is_digits(f, usize::MAX))?;
    let minutes = fields.next().filter(|f| is_digits(f, MAX_MINOR_DIGITS))?;
    let seconds = match fields.next() {
        Some(f) if is_digits(f, MAX_MINOR_DIGITS) => Some(f),
        Some(_) => return None,
        None => None,
    };
    if fields.next().is_some() {
        return None;
    }

    Some(ParsedHms {
        negative,
        hours: hours.parse().ok()?,
        minutes: minutes.parse().ok()?,
        seconds: match seconds {
            Some(s) => s.parse().ok()?,
            None => 0,
        },
    })
}

/// Parse a time string into a signed count of seconds.
///
/// # Example
/// ```
/// use hmscalc::parser::parse_hms;
///
/// assert_eq!(parse_hms("1:02:03").unwrap(), 3723);
/// assert_eq!(parse_hms("-0:30").unwrap(), -1800);
/// assert!(parse_hms("1:2:3:4").is_err());
/// ```
pub fn parse_hms(input: &str) -> HmsResult<i64> {
    parse_fields(input)
        .and_then(|parsed| parsed.total_seconds())
        .ok_or_else(|| HmsError::invalid_format(input))
}

fn is_digits(field: &str, max_len: usize) -> bool {
    !field.is_empty() && field.len() <= max_len && field.bytes().all(|b| b.is_ascii_digit())
}
