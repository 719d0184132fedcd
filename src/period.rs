// "Duration" is only for tracking actual time elapsed, whereas Period is for counting
// calendar slots like "5 months".
//
// One is for counting how far the car has traveled, the other is for counting how
// how many houses it passed on the way. Here the houses all have the same width, so a
// period can always be turned back into the exact duration it came from.

use crate::duration::{AsReadableDuration, ReadableDuration};
use crate::field_type::{FieldType, FIELD_COUNT};
use crate::period_type::PeriodType;
use crate::Duration;

/// A duration split into calendar fields according to a [`PeriodType`].
///
/// Field values are never negative; the sign of the source duration is kept on the
/// period itself. Periods are only produced by [`apportion`](crate::apportion).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Period {
    period_type: PeriodType,
    values: [i32; FIELD_COUNT],
    negative: bool,
}

impl Period {
    pub(crate) fn new(period_type: PeriodType, values: [i32; FIELD_COUNT], negative: bool) -> Self {
        // A zero period has no sign.
        let negative = negative && values.iter().any(|v| *v != 0);
        Period {
            period_type,
            values,
            negative,
        }
    }

    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    pub fn get(&self, field: FieldType) -> i32 {
        self.values[field.index()]
    }

    pub fn years(&self) -> i32 {
        self.get(FieldType::Years)
    }

    pub fn months(&self) -> i32 {
        self.get(FieldType::Months)
    }

    pub fn weeks(&self) -> i32 {
        self.get(FieldType::Weeks)
    }

    pub fn days(&self) -> i32 {
        self.get(FieldType::Days)
    }

    pub fn hours(&self) -> i32 {
        self.get(FieldType::Hours)
    }

    pub fn minutes(&self) -> i32 {
        self.get(FieldType::Minutes)
    }

    pub fn seconds(&self) -> i32 {
        self.get(FieldType::Seconds)
    }

    pub fn millis(&self) -> i32 {
        self.get(FieldType::Millis)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }

    /// Sums the fields back into a duration using the fixed unit lengths.
    ///
    /// Returns `None` only if the total does not fit in an `i64` millisecond count,
    /// which cannot happen for a period produced from a [`Duration`].
    pub fn to_duration(&self) -> Option<Duration> {
        let magnitude: i128 = FieldType::ALL
            .iter()
            .map(|field| i128::from(self.get(*field)) * i128::from(field.unit_millis()))
            .sum();
        let signed = if self.negative { -magnitude } else { magnitude };
        i64::try_from(signed).ok().map(Duration::from_millis)
    }
}

// A period has no exact length of its own, so it never compares as a duration.
impl AsReadableDuration for Period {
    fn as_readable_duration(&self) -> Option<&dyn ReadableDuration> {
        None
    }
}
