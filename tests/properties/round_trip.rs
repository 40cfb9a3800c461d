//! Property tests for parsing and canonical formatting.

use proptest::prelude::*;

use hmscalc::{parse_hms, HmsTime};

/// Totals small enough that hours stay readable but still span many days.
fn total_seconds() -> impl Strategy<Value = i64> {
    -10_000_000i64..=10_000_000
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing the canonical rendering reproduces the value.
    #[test]
    fn property_canonical_form_round_trips(total in total_seconds()) {
        let time = HmsTime::from_seconds(total);
        let rendered = time.to_string();
        let parsed = HmsTime::parse(&rendered).expect("canonical form must parse");
        prop_assert_eq!(parsed, time);
    }

    /// PROPERTY: Round-trip also holds at the edges of the integer range.
    #[test]
    fn property_round_trips_full_range(total in any::<i64>()) {
        let time = HmsTime::from_seconds(total);
        prop_assert_eq!(HmsTime::parse(&time.to_string()).unwrap(), time);
    }

    /// PROPERTY: Any text matching the grammar parses to sign * (h*3600 + m*60 + s).
    #[test]
    fn property_grammar_matches_arithmetic(
        negative in any::<bool>(),
        hours in 0u32..100_000,
        minutes in 0u8..100,
        seconds in proptest::option::of(0u8..100),
        pad_minutes in any::<bool>(),
    ) {
        let mut text = String::new();
        if negative {
            text.push('-');
        }
        text.push_str(&hours.to_string());
        if pad_minutes {
            text.push_str(&format!(":{minutes:02}"));
        } else {
            text.push_str(&format!(":{minutes}"));
        }
        if let Some(seconds) = seconds {
            text.push_str(&format!(":{seconds}"));
        }

        let magnitude = i64::from(hours) * 3600
            + i64::from(minutes) * 60
            + i64::from(seconds.unwrap_or(0));
        let expected = if negative { -magnitude } else { magnitude };

        prop_assert_eq!(parse_hms(&text).unwrap(), expected);
    }

    /// PROPERTY: Components are never negative and rebuild the magnitude.
    #[test]
    fn property_components_rebuild_magnitude(total in total_seconds()) {
        let time = HmsTime::from_seconds(total);
        let (hh, mm, ss) = time.to_tuple();
        prop_assert!(mm < 60 && ss < 60);
        prop_assert_eq!(hh * 3600 + mm * 60 + ss, total.unsigned_abs());
        prop_assert_eq!(time.to_tuple(), HmsTime::from_seconds(-total).to_tuple());

        let map = time.to_map();
        prop_assert_eq!((map["hh"], map["mm"], map["ss"]), (hh, mm, ss));
    }

    /// PROPERTY: The parser never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        let _ = parse_hms(&input);
    }

    /// PROPERTY: Near-miss strings built from the grammar's alphabet either
    /// parse or fail with the offending text in the error.
    #[test]
    fn property_errors_carry_input(input in "[-0-9:]{0,12}") {
        if let Err(err) = HmsTime::parse(&input) {
            prop_assert_eq!(err.to_string(), format!("invalid time format: '{input}'"));
        }
    }
}
