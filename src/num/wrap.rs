use tracing::debug;

use super::{InvalidLengthError, NonFiniteError, OffsetError, OffsetOutOfBounds, Range, WrapMode};

/// Returns true if `value` lies between `lower` and `upper`, which may be given in either order.
///
/// With `inclusive` set, the bounds themselves are considered inside.
///
/// # Examples
/// ```
/// # use toolbelt::num::between;
/// assert!(between(5, 10, 5, true));
/// assert!(!between(5, 10, 5, false));
/// assert!(between(0.5, 0.0, 1.0, false));
/// ```
pub fn between<T: PartialOrd + Copy>(value: T, lower: T, upper: T, inclusive: bool) -> bool {
    let (lower, upper) = Range::new(lower, upper).bounds();
    if inclusive {
        value >= lower && value <= upper
    } else {
        value > lower && value < upper
    }
}

/// Clamps `value` into `[low, high]`, which may be given in either order.
///
/// # Examples
/// ```
/// # use toolbelt::num::limit;
/// assert_eq!(limit(7, 0, 4), 4);
/// assert_eq!(limit(-2, 4, 0), 0);
/// assert_eq!(limit(3, 0, 4), 3);
/// assert_eq!(limit(9, 2, 2), 2);
/// ```
pub fn limit<T: PartialOrd + Copy>(value: T, low: T, high: T) -> T {
    let (low, high) = Range::new(low, high).bounds();
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Wraps an integer into `[lower, upper]`, treating the range as cyclic.
///
/// Stepping one past `upper` lands on `lower` and one before `lower` lands on `upper`. The result
/// is periodic with period `upper - lower + 1`.
///
/// # Examples
/// ```
/// # use toolbelt::num::int_wrap;
/// assert_eq!(int_wrap(5, 0, 4), 0);
/// assert_eq!(int_wrap(-1, 0, 4), 4);
/// assert_eq!(int_wrap(-14, 0, 4), 1);
/// assert_eq!(int_wrap(13, 10, 12), 10);
/// ```
pub fn int_wrap(value: i64, lower: i64, upper: i64) -> i64 {
    let (lower, upper) = Range::new(lower, upper).bounds();
    if lower == upper {
        return lower;
    }

    // Widened so that neither the span nor the distance can overflow.
    let (value, low, high) = (i128::from(value), i128::from(lower), i128::from(upper));
    let delta = high - low + 1;

    let wrapped = if value > high {
        (value - high - 1) % delta + low
    } else if value < low {
        high - (low - value - 1) % delta
    } else {
        value
    };

    // The wrapped value lies within [lower, upper], so it always fits.
    wrapped as i64
}

/// Wraps a float into `[lower, upper]`, treating the range as continuous and cyclic (like an angle
/// in `[0, 360]`).
///
/// Values already inside the range are returned unchanged. In a cyclic range both boundaries
/// denote the same point, so when a wrapped result lands exactly on one of them `use_lower`
/// selects which is reported.
///
/// # Errors
/// Returns [`NonFiniteError`] if `value`, `lower` or `upper` is infinite or NaN.
///
/// # Examples
/// ```
/// # use toolbelt::num::num_wrap;
/// assert_eq!(num_wrap(370.0, 0.0, 360.0, true), Ok(10.0));
/// assert_eq!(num_wrap(-90.0, 0.0, 360.0, true), Ok(270.0));
/// assert_eq!(num_wrap(720.0, 0.0, 360.0, true), Ok(0.0));
/// assert_eq!(num_wrap(720.0, 0.0, 360.0, false), Ok(360.0));
/// ```
pub fn num_wrap(value: f64, lower: f64, upper: f64, use_lower: bool) -> Result<f64, NonFiniteError> {
    if !(value.is_finite() && lower.is_finite() && upper.is_finite()) {
        debug!(value, lower, upper, "rejected non-finite float wrap");
        return Err(NonFiniteError);
    }

    let (lower, upper) = Range::new(lower, upper).bounds();
    if lower == upper {
        return Ok(lower);
    }

    if between(value, lower, upper, true) {
        return Ok(value);
    }

    let delta = upper - lower;
    if delta.is_infinite() {
        // Halving is exact at this magnitude and brings the span back into range.
        return num_wrap(value / 2.0, lower / 2.0, upper / 2.0, use_lower).map(|half| half * 2.0);
    }

    // Each operand is reduced before subtracting, so the distance can't overflow.
    let distance = (value.rem_euclid(delta) - lower.rem_euclid(delta)).rem_euclid(delta);
    let wrapped = limit(distance + lower, lower, upper);

    if wrapped == lower || wrapped == upper {
        Ok(if use_lower { lower } else { upper })
    } else {
        Ok(wrapped)
    }
}

/// Maps a possibly negative `offset` into a valid index for a collection with `length` elements,
/// according to `mode`. See [`WrapMode`] for the policies.
///
/// # Errors
/// - [`InvalidLengthError`] if `length` is zero or negative, regardless of `mode`.
/// - [`OffsetOutOfBounds`] if `mode` is [`WrapMode::None`] and `offset` lies outside of
///   `[-length, length - 1]`.
///
/// # Examples
/// ```
/// # use toolbelt::num::{offset_wrap, WrapMode};
/// assert_eq!(offset_wrap(5, -5, WrapMode::None), Ok(0));
/// assert!(offset_wrap(5, 5, WrapMode::None).is_err());
/// assert_eq!(offset_wrap(5, -14, WrapMode::Wrap), Ok(1));
/// assert_eq!(offset_wrap(5, 15, WrapMode::Restrict), Ok(4));
/// assert_eq!(offset_wrap(5, -3, WrapMode::Limit), Ok(0));
/// ```
pub fn offset_wrap(length: i64, offset: i64, mode: WrapMode) -> Result<usize, OffsetError> {
    if length <= 0 {
        debug!(length, offset, %mode, "rejected non-positive length");
        return Err(InvalidLengthError { length }.into());
    }

    let last = length - 1;
    let index = match mode {
        WrapMode::None => {
            if offset < -length || offset > last {
                debug!(length, offset, "rejected out of bounds offset");
                return Err(OffsetOutOfBounds { offset, length }.into());
            }
            from_end(length, offset)
        },
        WrapMode::Wrap => int_wrap(offset, 0, last),
        WrapMode::Restrict => from_end(length, limit(offset, -length, last)),
        WrapMode::Limit => limit(offset, 0, last),
    };

    // Every branch yields an index within [0, length - 1].
    Ok(index as usize)
}

const fn from_end(length: i64, offset: i64) -> i64 {
    if offset < 0 {
        length + offset
    } else {
        offset
    }
}
