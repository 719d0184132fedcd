use std::fmt::{self, Write};

use crate::convert::split;
use crate::field_type::FieldType;
use crate::{Duration, Period, PeriodType};

/// Writes `P` followed by every non-zero field and its designator, largest first.
///
/// There is no `T` between the date and time parts, so months and minutes are both
/// `M` and only their position tells them apart. Millis are written as a three digit
/// fraction of the seconds. An all-zero value is `P0S`.
fn write_fields<F>(
    f: &mut fmt::Formatter<'_>,
    negative: bool,
    period_type: PeriodType,
    quantity: F,
) -> fmt::Result
where
    F: Fn(FieldType) -> u64,
{
    if negative {
        f.write_char('-')?;
    }
    f.write_char('P')?;

    let mut written = false;
    for field in period_type.fields() {
        let value = quantity(field);
        match field {
            FieldType::Seconds | FieldType::Millis => continue,
            _ if value == 0 => continue,
            _ => {}
        }
        if let Some(designator) = field.designator() {
            write!(f, "{value}{designator}")?;
            written = true;
        }
    }

    // Without a seconds field the millis field may hold whole seconds too.
    let total = quantity(FieldType::Seconds) * 1_000 + quantity(FieldType::Millis);
    let (seconds, millis) = (total / 1_000, total % 1_000);
    if millis != 0 {
        write!(f, "{seconds}.{millis:03}S")
    } else if seconds != 0 || !written {
        write!(f, "{seconds}S")
    } else {
        Ok(())
    }
}

pub(crate) fn canonical_text(millis: i64) -> String {
    Duration::from_millis(millis).to_string()
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period_type = PeriodType::PRECISE_ALL;
        let quantities = split(self.millis().unsigned_abs(), period_type);
        write_fields(f, self.is_negative(), period_type, |field| {
            quantities[field.index()]
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(f, self.is_negative(), self.period_type(), |field| {
            self.get(field) as u64
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apportion, ReadableDuration};

    #[test]
    fn hours_minutes_seconds() {
        let d = Duration::from_millis(21_787_000);
        assert_eq!(d.to_canonical_text(), "P6H3M7S");
        assert_eq!(d.to_string(), "P6H3M7S");
    }

    #[test]
    fn zero() {
        assert_eq!(Duration::ZERO.to_canonical_text(), "P0S");
        assert_eq!(apportion(0, PeriodType::ALL).unwrap().to_string(), "P0S");
    }

    #[test]
    fn years_months_days() {
        let d = Duration::standard_days(430).unwrap();
        assert_eq!(d.to_canonical_text(), "P1Y2M5D");
    }

    #[test]
    fn months_and_minutes_share_a_letter() {
        let d = Duration::standard_days(60)
            .unwrap()
            .checked_add(&Duration::standard_minutes(4).unwrap())
            .unwrap();
        assert_eq!(d.to_canonical_text(), "P2M4M");
    }

    #[test]
    fn millis_are_a_fraction_of_seconds() {
        assert_eq!(Duration::from_millis(7_250).to_canonical_text(), "P7.250S");
        assert_eq!(Duration::from_millis(5).to_canonical_text(), "P0.005S");
        assert_eq!(
            Duration::from_millis(3_600_001).to_canonical_text(),
            "P1H0.001S"
        );
    }

    #[test]
    fn negative_has_leading_sign() {
        assert_eq!(Duration::from_millis(-21_787_000).to_canonical_text(), "-P6H3M7S");
        // Largest magnitude still renders; the precise split cannot overflow.
        assert!(Duration::from_millis(i64::MIN).to_canonical_text().starts_with("-P"));
    }

    #[test]
    fn period_uses_its_own_fields() {
        let period = Duration::standard_days(430).unwrap().to_period().unwrap();
        assert_eq!(period.to_string(), "P61W3D");

        let period = apportion(-2_500, PeriodType::MILLIS).unwrap();
        assert_eq!(period.millis(), 2_500);
        assert_eq!(period.to_string(), "-P2.500S");
    }

    #[test]
    fn std_duration_text() {
        let d = std::time::Duration::from_secs(90);
        assert_eq!(d.to_canonical_text(), "P1M30S");
    }
}
