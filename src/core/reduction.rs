use crate::models::MasterNumber;

/// Sum of the decimal digits of `number`
#[inline]
pub fn digit_sum(mut number: u64) -> u64 {
    let mut sum = 0;
    while number > 0 {
        sum += number % 10;
        number /= 10;
    }
    sum
}

/// Reduce a number to a single digit, stopping early on a master number.
///
/// A master number given as input is returned untouched. Otherwise the
/// digits are summed until the value is at most 9, and the loop stops as
/// soon as an intermediate sum is 11, 22 or 33.
///
/// ```
/// use numerology_search::core::reduce;
///
/// assert_eq!(reduce(29), 11);
/// assert_eq!(reduce(38), 11);
/// assert_eq!(reduce(1999), 1);
/// ```
pub fn reduce(number: u64) -> u32 {
    if let Some(master) = master_value(number) {
        return master;
    }

    let mut value = number;
    while value > 9 {
        value = digit_sum(value);
        if let Some(master) = master_value(value) {
            return master;
        }
    }
    // value <= 9 here
    value as u32
}

#[inline]
fn master_value(value: u64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| MasterNumber::is_master(*v))
}
