use std::fmt;

pub(crate) const MILLIS_PER_SECOND: u64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
pub(crate) const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;
// Precise (UTC, calendar-agnostic) lengths. A real calendar would make these two variable.
pub(crate) const MILLIS_PER_MONTH: u64 = 30 * MILLIS_PER_DAY;
pub(crate) const MILLIS_PER_YEAR: u64 = 365 * MILLIS_PER_DAY;

pub(crate) const FIELD_COUNT: usize = 8;

/// One of the eight fields a [`Period`](crate::Period) can be split into.
///
/// Variants are declared from the largest unit to the smallest, so the derived
/// ordering puts `Years` first.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl FieldType {
    /// All field types, largest unit first.
    pub const ALL: [FieldType; FIELD_COUNT] = [
        FieldType::Years,
        FieldType::Months,
        FieldType::Weeks,
        FieldType::Days,
        FieldType::Hours,
        FieldType::Minutes,
        FieldType::Seconds,
        FieldType::Millis,
    ];

    /// The fixed length of one unit of this field in milliseconds.
    pub const fn unit_millis(self) -> u64 {
        match self {
            FieldType::Years => MILLIS_PER_YEAR,
            FieldType::Months => MILLIS_PER_MONTH,
            FieldType::Weeks => MILLIS_PER_WEEK,
            FieldType::Days => MILLIS_PER_DAY,
            FieldType::Hours => MILLIS_PER_HOUR,
            FieldType::Minutes => MILLIS_PER_MINUTE,
            FieldType::Seconds => MILLIS_PER_SECOND,
            FieldType::Millis => 1,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Designator letter used in canonical text. Millis has none; they are written
    /// as a fraction of the seconds field.
    pub(crate) const fn designator(self) -> Option<char> {
        match self {
            FieldType::Years => Some('Y'),
            FieldType::Months => Some('M'),
            FieldType::Weeks => Some('W'),
            FieldType::Days => Some('D'),
            FieldType::Hours => Some('H'),
            FieldType::Minutes => Some('M'),
            FieldType::Seconds => Some('S'),
            FieldType::Millis => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::Years => "years",
            FieldType::Months => "months",
            FieldType::Weeks => "weeks",
            FieldType::Days => "days",
            FieldType::Hours => "hours",
            FieldType::Minutes => "minutes",
            FieldType::Seconds => "seconds",
            FieldType::Millis => "millis",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
