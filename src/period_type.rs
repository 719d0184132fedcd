use std::fmt;

use crate::duration::{AsReadableDuration, ReadableDuration};
use crate::field_type::FieldType;

/// Describes which fields a period is split into.
///
/// Every standard type supports `Millis`, so splitting a duration under any of them
/// loses nothing. Fields that are not supported always hold zero, and their range is
/// absorbed by the neighbouring supported fields.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PeriodType {
    name: &'static str,
    #[cfg_attr(feature = "serde", serde(skip))]
    supported: u8,
}

const fn mask(fields: &[FieldType]) -> u8 {
    let mut bits = 0u8;
    let mut i = 0;
    while i < fields.len() {
        bits |= 1 << fields[i].index();
        i += 1;
    }
    bits
}

impl PeriodType {
    /// Weeks, days, hours, minutes, seconds and millis. Years and months stay zero.
    pub const ALL: PeriodType = PeriodType::new(
        "All",
        &[
            FieldType::Weeks,
            FieldType::Days,
            FieldType::Hours,
            FieldType::Minutes,
            FieldType::Seconds,
            FieldType::Millis,
        ],
    );

    /// Every field except weeks, with years of 365 days and months of 30 days.
    pub const PRECISE_ALL: PeriodType = PeriodType::new(
        "PreciseAll",
        &[
            FieldType::Years,
            FieldType::Months,
            FieldType::Days,
            FieldType::Hours,
            FieldType::Minutes,
            FieldType::Seconds,
            FieldType::Millis,
        ],
    );

    pub const YEAR_WEEK_DAY_TIME: PeriodType = PeriodType::new(
        "YearWeekDayTime",
        &[
            FieldType::Years,
            FieldType::Weeks,
            FieldType::Days,
            FieldType::Hours,
            FieldType::Minutes,
            FieldType::Seconds,
            FieldType::Millis,
        ],
    );

    pub const DAY_TIME: PeriodType = PeriodType::new(
        "DayTime",
        &[
            FieldType::Days,
            FieldType::Hours,
            FieldType::Minutes,
            FieldType::Seconds,
            FieldType::Millis,
        ],
    );

    pub const TIME: PeriodType = PeriodType::new(
        "Time",
        &[
            FieldType::Hours,
            FieldType::Minutes,
            FieldType::Seconds,
            FieldType::Millis,
        ],
    );

    pub const MILLIS: PeriodType = PeriodType::new("Millis", &[FieldType::Millis]);

    const STANDARD: [PeriodType; 6] = [
        PeriodType::ALL,
        PeriodType::PRECISE_ALL,
        PeriodType::YEAR_WEEK_DAY_TIME,
        PeriodType::DAY_TIME,
        PeriodType::TIME,
        PeriodType::MILLIS,
    ];

    const fn new(name: &'static str, fields: &[FieldType]) -> Self {
        PeriodType {
            name,
            supported: mask(fields),
        }
    }

    /// All named period types.
    pub fn standard_types() -> &'static [PeriodType] {
        &Self::STANDARD
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_supported(&self, field: FieldType) -> bool {
        self.supported & (1 << field.index()) != 0
    }

    /// Supported fields, largest unit first.
    pub fn fields(&self) -> impl Iterator<Item = FieldType> + '_ {
        FieldType::ALL
            .into_iter()
            .filter(move |field| self.is_supported(*field))
    }

    pub fn size(&self) -> usize {
        self.supported.count_ones() as usize
    }
}

impl Default for PeriodType {
    fn default() -> Self {
        PeriodType::ALL
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeriodType[{}]", self.name)
    }
}

impl AsReadableDuration for PeriodType {
    fn as_readable_duration(&self) -> Option<&dyn ReadableDuration> {
        None
    }
}
