//! Property tests for arithmetic, summation and ordering.

use proptest::prelude::*;

use hmscalc::HmsTime;

fn time() -> impl Strategy<Value = HmsTime> {
    (-1_000_000_000i64..=1_000_000_000).prop_map(HmsTime::from_seconds)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Addition commutes.
    #[test]
    fn property_addition_commutes(a in time(), b in time()) {
        prop_assert_eq!(a + b, b + a);
    }

    /// PROPERTY: Addition associates.
    #[test]
    fn property_addition_associates(a in time(), b in time(), c in time()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    /// PROPERTY: Subtraction undoes addition.
    #[test]
    fn property_subtraction_inverts_addition(a in time(), b in time()) {
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!(a - a, HmsTime::ZERO);
    }

    /// PROPERTY: `sum` equals a left fold of `+`, and matches `Iterator::sum`.
    #[test]
    fn property_sum_matches_fold(times in proptest::collection::vec(time(), 0..16)) {
        let folded = times.iter().fold(HmsTime::ZERO, |acc, t| acc + *t);
        prop_assert_eq!(HmsTime::sum(&times), folded);
        prop_assert_eq!(times.iter().sum::<HmsTime>(), folded);
    }

    /// PROPERTY: Checked arithmetic errors exactly when `i64` arithmetic would.
    #[test]
    fn property_checked_ops_match_i64(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (HmsTime::from_seconds(a), HmsTime::from_seconds(b));
        prop_assert_eq!(
            x.checked_add(y).ok().map(|t| t.to_seconds()),
            a.checked_add(b)
        );
        prop_assert_eq!(
            x.checked_sub(y).ok().map(|t| t.to_seconds()),
            a.checked_sub(b)
        );
    }

    /// PROPERTY: In range, `checked_sum` agrees with `sum`.
    #[test]
    fn property_checked_sum_matches_sum(times in proptest::collection::vec(time(), 0..16)) {
        prop_assert_eq!(HmsTime::checked_sum(&times).ok(), Some(HmsTime::sum(&times)));
    }

    /// PROPERTY: Sum over a single element is that element.
    #[test]
    fn property_sum_single(a in time()) {
        prop_assert_eq!(HmsTime::sum([a]), a);
    }

    /// PROPERTY: Ordering follows the signed second count.
    #[test]
    fn property_ordering_follows_seconds(a in time(), b in time()) {
        prop_assert_eq!(a.cmp(&b), a.to_seconds().cmp(&b.to_seconds()));
        prop_assert_eq!(a == b, a.to_seconds() == b.to_seconds());
        prop_assert_eq!(a < b, a.to_seconds() < b.to_seconds());
    }

    /// PROPERTY: Scalar conversions agree with the second count.
    #[test]
    fn property_scalar_conversions(a in time()) {
        let seconds = a.to_seconds() as f64;
        prop_assert!((a.to_minutes() * 60.0 - seconds).abs() < 1e-3);
        prop_assert!((a.to_hours() * 3600.0 - seconds).abs() < 1e-3);
    }
}
