//! Cycle sequence generation.

use crate::cycle::CycleTime;
use crate::error::CalendarError;

/// Generates the chronological sequence of cycles from `start` to `end`
/// inclusive, stepping by `hr_inc` hours.
///
/// The end cycle is included only when it lands exactly on a step.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidIncrement`] if `hr_inc` is zero and
/// [`CalendarError::ReversedInterval`] if `start` is after `end`.
///
/// # Example
///
/// ```ignore
/// let start = CycleTime::from_token(2018022012).unwrap();
/// let end = CycleTime::from_token(2018022100).unwrap();
/// let cycles = cycle_sequence(start, end, 6).unwrap();
/// // 2018022012, 2018022018, 2018022100
/// assert_eq!(cycles.len(), 3);
/// ```
pub fn cycle_sequence(
    start: CycleTime,
    end: CycleTime,
    hr_inc: u32,
) -> Result<Vec<CycleTime>, CalendarError> {
    if hr_inc == 0 {
        return Err(CalendarError::InvalidIncrement { hr_inc });
    }
    if start > end {
        return Err(CalendarError::ReversedInterval {
            start: start.token(),
            end: end.token(),
        });
    }

    let mut cycles = Vec::new();
    let mut current = start;
    while current <= end {
        cycles.push(current);
        current = current.plus_hours(hr_inc)?;
    }
    Ok(cycles)
}
