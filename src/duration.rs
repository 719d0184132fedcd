use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{Bounded, CheckedAdd, CheckedSub, Zero};
use thiserror::Error;

use crate::compare::{self, CompareError};
use crate::convert::{apportion, PeriodOverflow};
use crate::field_type::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::format;
use crate::{Period, PeriodType};

/// Anything that has an exact length in milliseconds.
///
/// Equality, ordering and hashing between durations are defined purely on that
/// length, so two unrelated implementations with the same length compare equal.
pub trait ReadableDuration {
    fn millis(&self) -> i64;

    /// Copies the length into a plain [`Duration`].
    fn to_duration(&self) -> Duration {
        Duration::from_millis(self.millis())
    }

    /// Splits the duration using [`PeriodType::ALL`].
    ///
    /// Years and months stay zero, so a duration of several years comes out as a
    /// large number of weeks. For example, 430 days become 61 weeks and 3 days.
    fn to_period(&self) -> Result<Period, PeriodOverflow> {
        self.to_period_with(PeriodType::ALL)
    }

    /// Splits the duration into the fields supported by `period_type`, using fixed
    /// field lengths. With [`PeriodType::PRECISE_ALL`], 430 days become 1 year,
    /// 2 months and 5 days.
    ///
    /// Anchoring a duration to an instant is needed for calendar-accurate results;
    /// that is not what this does.
    fn to_period_with(&self, period_type: PeriodType) -> Result<Period, PeriodOverflow> {
        apportion(self.millis(), period_type)
    }

    fn compare_length(&self, other: &dyn ReadableDuration) -> Ordering {
        compare::compare_length(self, other)
    }

    /// Orders against an arbitrary value, rejecting a missing value and values that
    /// have no length.
    fn compare_strict(
        &self,
        other: Option<&dyn AsReadableDuration>,
    ) -> Result<Ordering, CompareError> {
        compare::compare_strict(self, other)
    }

    /// `None` counts as zero length.
    fn is_equal_length(&self, other: Option<&dyn ReadableDuration>) -> bool {
        compare::is_equal_length(self, other)
    }

    /// `None` counts as zero length.
    fn is_longer(&self, other: Option<&dyn ReadableDuration>) -> bool {
        compare::is_longer(self, other)
    }

    /// `None` counts as zero length.
    fn is_shorter(&self, other: Option<&dyn ReadableDuration>) -> bool {
        compare::is_shorter(self, other)
    }

    fn value_equals(&self, other: &dyn AsReadableDuration) -> bool {
        compare::value_equals(self, other)
    }

    fn value_hash(&self) -> i32 {
        compare::value_hash(self)
    }

    /// E.g. `P6H3M7S` for 6 hours, 3 minutes and 7 seconds.
    fn to_canonical_text(&self) -> String {
        format::canonical_text(self.millis())
    }
}

/// Operand of the strict comparison and of value equality: a value that may or may
/// not have a millisecond length.
///
/// Every [`ReadableDuration`] has one. Other types implement this to return `None`.
pub trait AsReadableDuration {
    fn as_readable_duration(&self) -> Option<&dyn ReadableDuration>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<D: ReadableDuration> AsReadableDuration for D {
    fn as_readable_duration(&self) -> Option<&dyn ReadableDuration> {
        Some(self)
    }
}

/// An immutable length of time in milliseconds.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Duration {
    millis: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { millis: 0 };

    pub const fn from_millis(millis: i64) -> Self {
        Duration { millis }
    }

    pub fn from_seconds(seconds: i64) -> Option<Self> {
        Self::scaled(seconds, MILLIS_PER_SECOND)
    }

    pub fn standard_minutes(minutes: i64) -> Option<Self> {
        Self::scaled(minutes, MILLIS_PER_MINUTE)
    }

    pub fn standard_hours(hours: i64) -> Option<Self> {
        Self::scaled(hours, MILLIS_PER_HOUR)
    }

    /// Days of exactly 24 hours.
    pub fn standard_days(days: i64) -> Option<Self> {
        Self::scaled(days, MILLIS_PER_DAY)
    }

    fn scaled(count: i64, unit_millis: u64) -> Option<Self> {
        let factor = i64::try_from(unit_millis).ok()?;
        Some(Duration::from_millis(count.checked_mul(factor)?))
    }

    pub const fn millis(&self) -> i64 {
        self.millis
    }

    pub const fn is_negative(&self) -> bool {
        self.millis < 0
    }

    pub fn checked_add(&self, other: &dyn ReadableDuration) -> Option<Self> {
        Some(Duration::from_millis(self.millis.checked_add(other.millis())?))
    }

    pub fn checked_sub(&self, other: &dyn ReadableDuration) -> Option<Self> {
        Some(Duration::from_millis(self.millis.checked_sub(other.millis())?))
    }

    pub fn checked_mul(&self, factor: i64) -> Option<Self> {
        Some(Duration::from_millis(self.millis.checked_mul(factor)?))
    }

    pub fn checked_neg(&self) -> Option<Self> {
        Some(Duration::from_millis(self.millis.checked_neg()?))
    }

    /// `None` for the one value whose negation does not fit.
    pub fn abs(&self) -> Option<Self> {
        Some(Duration::from_millis(self.millis.checked_abs()?))
    }
}

impl ReadableDuration for Duration {
    fn millis(&self) -> i64 {
        self.millis
    }

    fn to_duration(&self) -> Duration {
        *self
    }
}

// Truncated to whole milliseconds, saturating at the largest representable length.
impl ReadableDuration for std::time::Duration {
    fn millis(&self) -> i64 {
        i64::try_from(self.as_millis()).unwrap_or(i64::MAX)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("duration is out of range")]
pub struct DurationOutOfRange;

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationOutOfRange;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let millis = i64::try_from(value.as_millis()).map_err(|_| DurationOutOfRange)?;
        Ok(Duration::from_millis(millis))
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationOutOfRange;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        let millis = u64::try_from(value.millis).map_err(|_| DurationOutOfRange)?;
        Ok(std::time::Duration::from_millis(millis))
    }
}

impl<D: ReadableDuration> PartialEq<D> for Duration {
    fn eq(&self, other: &D) -> bool {
        self.millis == other.millis()
    }
}

impl Eq for Duration {}

impl<D: ReadableDuration> PartialOrd<D> for Duration {
    fn partial_cmp(&self, other: &D) -> Option<Ordering> {
        Some(compare::compare_length(self, other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::compare_length(self, other)
    }
}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(compare::value_hash(self));
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).expect("duration addition overflow")
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).expect("duration subtraction overflow")
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).expect("duration multiplication overflow")
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().expect("duration negation overflow")
    }
}

impl Zero for Duration {
    fn zero() -> Self {
        Duration::ZERO
    }

    fn is_zero(&self) -> bool {
        self.millis == 0
    }
}

impl Bounded for Duration {
    fn min_value() -> Self {
        Duration::from_millis(i64::MIN)
    }

    fn max_value() -> Self {
        Duration::from_millis(i64::MAX)
    }
}

impl CheckedAdd for Duration {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Duration::checked_add(self, v)
    }
}

impl CheckedSub for Duration {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Duration::checked_sub(self, v)
    }
}
