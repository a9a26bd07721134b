use super::{NonFiniteError, between, int_wrap, limit, num_wrap};

/// An inclusive pair of ordered bounds.
///
/// Bounds are normalised on construction, so `lower <= upper` always holds for comparable values.
/// Equal bounds collapse the range to a single point.
///
/// # Examples
/// ```
/// # use toolbelt::num::Range;
/// let range = Range::new(10, 2);
/// assert_eq!(range.bounds(), (2, 10));
/// assert!(range.contains(10));
/// assert!(!range.contains_exclusive(10));
/// assert_eq!(range.limit(12), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// Creates a new Range, swapping `a` and `b` if they are given in descending order.
    pub fn new(a: T, b: T) -> Range<T> {
        if b < a {
            Range { lower: b, upper: a }
        } else {
            Range { lower: a, upper: b }
        }
    }

    /// Creates a Range containing only `value`.
    pub const fn point(value: T) -> Range<T> {
        Range { lower: value, upper: value }
    }

    pub const fn lower(&self) -> T {
        self.lower
    }

    pub const fn upper(&self) -> T {
        self.upper
    }

    pub const fn bounds(&self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Returns true if both bounds are equal.
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns true if `value` lies within the Range, including its bounds.
    pub fn contains(&self, value: T) -> bool {
        between(value, self.lower, self.upper, true)
    }

    /// Returns true if `value` lies strictly within the Range.
    pub fn contains_exclusive(&self, value: T) -> bool {
        between(value, self.lower, self.upper, false)
    }

    /// Clamps `value` into the Range.
    pub fn limit(&self, value: T) -> T {
        limit(value, self.lower, self.upper)
    }
}

impl Range<i64> {
    /// Returns the number of integers in the Range. This is at least 1.
    pub fn span(&self) -> u128 {
        u128::from(self.upper.abs_diff(self.lower)) + 1
    }

    /// Wraps `value` into the Range. See [`int_wrap`].
    pub fn wrap(&self, value: i64) -> i64 {
        int_wrap(value, self.lower, self.upper)
    }
}

impl Range<f64> {
    /// Wraps `value` into the Range. See [`num_wrap`].
    ///
    /// # Errors
    /// Returns [`NonFiniteError`] if `value` or either bound is infinite or NaN.
    pub fn wrap(&self, value: f64, use_lower: bool) -> Result<f64, NonFiniteError> {
        num_wrap(value, self.lower, self.upper, use_lower)
    }
}

impl<T: PartialOrd + Copy> From<(T, T)> for Range<T> {
    fn from((a, b): (T, T)) -> Range<T> {
        Range::new(a, b)
    }
}

impl<T: PartialOrd + Copy> From<std::ops::RangeInclusive<T>> for Range<T> {
    fn from(range: std::ops::RangeInclusive<T>) -> Range<T> {
        Range::new(*range.start(), *range.end())
    }
}
