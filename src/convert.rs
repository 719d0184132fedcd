use num_integer::Integer;
use numcmp::NumCmp;
use thiserror::Error;
use tracing::{debug, trace};

use crate::field_type::{FieldType, FIELD_COUNT};
use crate::period::Period;
use crate::period_type::PeriodType;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{quantity} {field} does not fit in a period field")]
pub struct PeriodOverflow {
    pub field: FieldType,
    pub quantity: u64,
}

/// Greedily splits a magnitude into the supported fields of `period_type`, largest
/// unit first. Unsupported fields are left at zero and do not consume anything.
///
/// Every unit is a whole number of milliseconds and units are visited in strictly
/// decreasing order, so once `Millis` has been visited nothing remains.
pub(crate) fn split(magnitude: u64, period_type: PeriodType) -> [u64; FIELD_COUNT] {
    let mut quantities = [0u64; FIELD_COUNT];
    let mut remaining = magnitude;
    for field in period_type.fields() {
        let (quantity, rest) = remaining.div_rem(&field.unit_millis());
        quantities[field.index()] = quantity;
        remaining = rest;
    }
    debug_assert!(
        remaining == 0 || !period_type.is_supported(FieldType::Millis),
        "apportionment left {remaining}ms behind"
    );
    quantities
}

/// Converts a millisecond count to a period of the given type.
///
/// The sign is carried separately on the period; the fields always hold the split of
/// the absolute value. Fails if any field would exceed `i32::MAX`, in which case no
/// period is produced.
pub fn apportion(millis: i64, period_type: PeriodType) -> Result<Period, PeriodOverflow> {
    trace!(millis, period_type = period_type.name(), "apportioning duration");
    let quantities = split(millis.unsigned_abs(), period_type);

    let mut values = [0i32; FIELD_COUNT];
    for field in FieldType::ALL {
        let quantity = quantities[field.index()];
        if quantity.num_gt(i32::MAX) {
            debug!(millis, %field, quantity, "period field overflow");
            return Err(PeriodOverflow { field, quantity });
        }
        values[field.index()] = quantity as i32;
    }
    Ok(Period::new(period_type, values, millis < 0))
}
