//! Ordering, equality and hashing of durations by length alone.
//!
//! These work on anything implementing [`ReadableDuration`], so the result never
//! depends on which concrete type holds the length.

use std::cmp::Ordering;

use thiserror::Error;
use tracing::debug;

use crate::duration::{AsReadableDuration, ReadableDuration};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("cannot compare a duration with a missing value")]
    NullArgument,
    #[error("cannot compare a duration with {type_name}, which has no length")]
    TypeMismatch { type_name: &'static str },
}

pub fn compare_length<A, B>(a: &A, b: &B) -> Ordering
where
    A: ReadableDuration + ?Sized,
    B: ReadableDuration + ?Sized,
{
    a.millis().cmp(&b.millis())
}

fn millis_or_zero(d: Option<&dyn ReadableDuration>) -> i64 {
    d.map_or(0, |d| d.millis())
}

/// `b` of `None` is treated as zero length.
pub fn is_equal_length<A: ReadableDuration + ?Sized>(
    a: &A,
    b: Option<&dyn ReadableDuration>,
) -> bool {
    a.millis() == millis_or_zero(b)
}

/// `b` of `None` is treated as zero length.
pub fn is_longer<A: ReadableDuration + ?Sized>(a: &A, b: Option<&dyn ReadableDuration>) -> bool {
    a.millis() > millis_or_zero(b)
}

/// `b` of `None` is treated as zero length.
pub fn is_shorter<A: ReadableDuration + ?Sized>(a: &A, b: Option<&dyn ReadableDuration>) -> bool {
    a.millis() < millis_or_zero(b)
}

/// Like [`compare_length`], but `b` may be missing or may not have a length at all.
/// Both are errors.
pub fn compare_strict<A: ReadableDuration + ?Sized>(
    a: &A,
    b: Option<&dyn AsReadableDuration>,
) -> Result<Ordering, CompareError> {
    let b = b.ok_or_else(|| {
        debug!("strict comparison against a missing value");
        CompareError::NullArgument
    })?;
    let length = b.as_readable_duration().ok_or_else(|| {
        let type_name = b.type_name();
        debug!(type_name, "strict comparison against a value without a length");
        CompareError::TypeMismatch { type_name }
    })?;
    Ok(compare_length(a, length))
}

/// True if `b` has a length and it is the same as `a`'s.
pub fn value_equals<A: ReadableDuration + ?Sized>(a: &A, b: &dyn AsReadableDuration) -> bool {
    b.as_readable_duration()
        .is_some_and(|b| a.millis() == b.millis())
}

/// `(millis ^ (millis >>> 32))` truncated to 32 bits. Every implementation must hash
/// this way so that equal lengths hash equally.
pub fn value_hash<A: ReadableDuration + ?Sized>(a: &A) -> i32 {
    let bits = a.millis() as u64;
    (bits ^ (bits >> 32)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Duration, Period, PeriodType};
    use quickcheck::quickcheck;
    use std::collections::HashSet;

    struct Seconds(i64);

    impl ReadableDuration for Seconds {
        fn millis(&self) -> i64 {
            self.0 * 1_000
        }
    }

    #[test]
    fn ordering_does_not_overflow() {
        let min = Duration::from_millis(i64::MIN);
        let max = Duration::from_millis(i64::MAX);
        assert_eq!(compare_length(&min, &max), Ordering::Less);
        assert_eq!(compare_length(&max, &min), Ordering::Greater);
        assert_eq!(compare_length(&max, &max), Ordering::Equal);
    }

    #[test]
    fn missing_counts_as_zero() {
        let zero = Duration::ZERO;
        let one = Duration::from_millis(1);
        let minus_one = Duration::from_millis(-1);
        assert!(is_equal_length(&zero, None));
        assert!(!is_equal_length(&one, None));
        assert!(is_longer(&one, None));
        assert!(!is_longer(&zero, None));
        assert!(is_shorter(&minus_one, None));
        assert!(!is_shorter(&zero, None));
        assert!(is_equal_length(&Seconds(2), Some(&Duration::from_millis(2_000))));
    }

    #[test]
    fn strict_rejects_missing_value() {
        let d = Duration::from_millis(5);
        assert_eq!(compare_strict(&d, None), Err(CompareError::NullArgument));
    }

    #[test]
    fn strict_rejects_value_without_length() {
        let d = Duration::from_millis(5);
        let period = d.to_period().unwrap();
        match compare_strict(&d, Some(&period)) {
            Err(CompareError::TypeMismatch { type_name }) => {
                assert!(type_name.ends_with("Period"), "{type_name}")
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            compare_strict(&d, Some(&PeriodType::ALL)),
            Err(CompareError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn strict_orders_lengths() {
        let d = Duration::from_millis(2_000);
        assert_eq!(compare_strict(&d, Some(&Seconds(2))), Ok(Ordering::Equal));
        assert_eq!(compare_strict(&d, Some(&Seconds(3))), Ok(Ordering::Less));
        assert_eq!(
            compare_strict(&d, Some(&std::time::Duration::from_millis(1))),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn equality_ignores_implementation() {
        let d = Duration::from_millis(4_000);
        assert!(value_equals(&d, &Seconds(4)));
        assert!(value_equals(&Seconds(4), &d));
        assert!(!value_equals(&d, &Seconds(5)));
        assert_eq!(value_hash(&d), value_hash(&Seconds(4)));
        let period: Period = d.to_period().unwrap();
        assert!(!value_equals(&d, &period));
    }

    #[test]
    fn hash_formula() {
        assert_eq!(value_hash(&Duration::ZERO), 0);
        assert_eq!(value_hash(&Duration::from_millis(1)), 1);
        assert_eq!(value_hash(&Duration::from_millis(1 << 32)), 1);
        assert_eq!(value_hash(&Duration::from_millis(-1)), 0);
        assert_eq!(value_hash(&Duration::from_millis(-2)), 1);
    }

    #[test]
    fn std_hash_agrees_with_equality() {
        let set: HashSet<Duration> = [1_000, 1_000, 2_000]
            .into_iter()
            .map(Duration::from_millis)
            .collect();
        assert_eq!(set.len(), 2);
    }

    quickcheck! {
        fn prop_total_order(a: i64, b: i64, c: i64) -> bool {
            let (a, b, c) = (Duration::from_millis(a), Duration::from_millis(b), Duration::from_millis(c));
            let trichotomy = [a < b, a == b, a > b].iter().filter(|x| **x).count() == 1;
            let transitive = !(a <= b && b <= c) || a <= c;
            trichotomy && transitive
        }

        fn prop_equal_implies_same_hash(millis: i64) -> bool {
            let seconds = Seconds(millis / 1_000);
            let d = Duration::from_millis(seconds.millis());
            value_equals(&d, &seconds) && value_hash(&d) == value_hash(&seconds)
        }

        fn prop_missing_equals_only_zero(millis: i64) -> bool {
            is_equal_length(&Duration::from_millis(millis), None) == (millis == 0)
        }
    }
}
