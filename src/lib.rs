//! Exact millisecond durations and their split into calendar-style periods.
//!
//! A [`Duration`] is a plain length of time. [`apportion`] splits it into the fields
//! of a [`PeriodType`] using fixed field lengths (a day is always 24 hours, a month
//! 30 days and a year 365 days), which is what makes the split exact and reversible.

pub use compare::CompareError;
pub use convert::{apportion, PeriodOverflow};
pub use duration::{AsReadableDuration, Duration, DurationOutOfRange, ReadableDuration};
pub use field_type::FieldType;
pub use period::Period;
pub use period_type::PeriodType;

pub mod compare;
mod convert;
mod duration;
mod field_type;
mod format;
mod period;
mod period_type;
