// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A half-open interval `[start, end)` over a primitive integer.
///
/// Used for spans of consecutive plot positions: the bouquet made of plots
/// `3, 4, 5` is `[3, 6)`.
///
/// # Invariants
///
/// `start_inclusive <= end_exclusive`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedOpenInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
}

/// Iterator over the integer points of a `ClosedOpenInterval`.
///
/// # Examples
///
/// ```rust
/// # use posy_core::math::interval::ClosedOpenInterval;
///
/// let span = ClosedOpenInterval::new(2usize, 5);
/// assert_eq!(span.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    current: T,
    end_exclusive: T,
}

impl<T> Iterator for ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end_exclusive {
            return None;
        }
        let point = self.current;
        self.current = self.current + T::one();
        Some(point)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end_exclusive - self.current).to_usize().unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current >= self.end_exclusive {
            return None;
        }
        self.end_exclusive = self.end_exclusive - T::one();
        Some(self.end_exclusive)
    }
}

impl<T> ExactSizeIterator for ClosedOpenIntervalIterator<T> where T: PrimInt {}

impl<T> FusedIterator for ClosedOpenIntervalIterator<T> where T: PrimInt {}

impl<T> ClosedOpenInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use posy_core::math::interval::ClosedOpenInterval;
    ///
    /// let span = ClosedOpenInterval::new(0usize, 2);
    /// assert_eq!(span.len(), 2);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "called `ClosedOpenInterval::new` with start_inclusive > end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates a new `ClosedOpenInterval`, or `None` if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use posy_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::try_new(1i64, 4).is_some());
    /// assert!(ClosedOpenInterval::try_new(4i64, 1).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T) -> Option<Self> {
        (start_inclusive <= end_exclusive).then_some(Self {
            start_inclusive,
            end_exclusive,
        })
    }

    /// Creates the interval `[start, start + len)`, or `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use posy_core::math::interval::ClosedOpenInterval;
    ///
    /// let span = ClosedOpenInterval::with_len(4usize, 3).unwrap();
    /// assert_eq!(span.end(), 7);
    /// assert!(ClosedOpenInterval::with_len(u8::MAX, 1).is_none());
    /// ```
    #[inline]
    pub fn with_len(start_inclusive: T, len: T) -> Option<Self> {
        if len < T::zero() {
            return None;
        }
        let end_exclusive = start_inclusive.checked_add(&len)?;
        Some(Self {
            start_inclusive,
            end_exclusive,
        })
    }

    /// Returns the inclusive start.
    #[inline]
    pub fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end.
    #[inline]
    pub fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns the number of points, `end - start`.
    #[inline]
    pub fn len(&self) -> T {
        self.end_exclusive - self.start_inclusive
    }

    /// Returns `true` if the interval contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use posy_core::math::interval::ClosedOpenInterval;
    ///
    /// let span = ClosedOpenInterval::new(2usize, 4);
    /// assert!(span.contains_point(2));
    /// assert!(!span.contains_point(4));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if both intervals share at least one point.
    /// Touching intervals such as `[0, 2)` and `[2, 4)` do not intersect.
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }

    /// Returns `true` if the intervals share no point.
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        !self.intersects(other)
    }

    /// Returns an iterator over the points of the interval.
    #[inline]
    pub fn iter(&self) -> ClosedOpenIntervalIterator<T> {
        ClosedOpenIntervalIterator {
            current: self.start_inclusive,
            end_exclusive: self.end_exclusive,
        }
    }
}

impl<T> std::fmt::Debug for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> std::fmt::Display for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> IntoIterator for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedOpenIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<ClosedOpenInterval<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    fn from(interval: ClosedOpenInterval<T>) -> Self {
        interval.start_inclusive..interval.end_exclusive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = usize;

    fn iv(s: IntegerType, e: IntegerType) -> ClosedOpenInterval<IntegerType> {
        ClosedOpenInterval::new(s, e)
    }

    #[test]
    fn test_new_and_accessors() {
        let span = iv(3, 7);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(iv(5, 5).is_empty());
    }

    #[test]
    #[should_panic(expected = "start_inclusive > end_exclusive")]
    fn test_new_panics_on_inverted_bounds() {
        let _ = iv(5, 2);
    }

    #[test]
    fn test_with_len() {
        assert_eq!(ClosedOpenInterval::with_len(2usize, 3), Some(iv(2, 5)));
        assert_eq!(ClosedOpenInterval::with_len(0usize, 0), Some(iv(0, 0)));
        assert_eq!(ClosedOpenInterval::with_len(usize::MAX, 1), None);
        assert_eq!(ClosedOpenInterval::with_len(0i32, -1), None);
    }

    #[test]
    fn test_contains_point_respects_open_end() {
        let span = iv(2, 4);
        assert!(!span.contains_point(1));
        assert!(span.contains_point(2));
        assert!(span.contains_point(3));
        assert!(!span.contains_point(4));
    }

    #[test]
    fn test_intersects_and_disjoint() {
        assert!(iv(0, 3).intersects(iv(2, 5)));
        assert!(!iv(0, 2).intersects(iv(2, 4)), "touching spans share no plot");
        assert!(iv(0, 2).disjoint(iv(2, 4)));
        assert!(iv(4, 6).disjoint(iv(0, 2)));
        assert!(iv(0, 10).intersects(iv(3, 4)));
    }

    #[test]
    fn test_iteration_both_ends() {
        let span = iv(1, 5);
        assert_eq!(span.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(span.iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(span.iter().len(), 4);

        let mut it = span.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_range_conversions() {
        let span: ClosedOpenInterval<IntegerType> = (2..6).into();
        assert_eq!(span, iv(2, 6));
        let range: std::ops::Range<IntegerType> = span.into();
        assert_eq!(range, 2..6);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", iv(0, 2)), "[0, 2)");
        assert_eq!(format!("{:?}", iv(4, 6)), "[4, 6)");
    }
}
