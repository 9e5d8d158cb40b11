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

//! # Closed Search Bracket
//!
//! `ClosedBracket<T>` is the state of a lower-bound bisection over a closed
//! integer range `[low, high]`. The caller evaluates a monotone predicate at
//! `midpoint()` and reports the verdict back with `accept` (the midpoint
//! satisfies the predicate, keep `[low, mid]`) or `reject` (it does not, keep
//! `[mid + 1, high]`). Once `is_converged()` holds, `low()` is the smallest
//! value in the original range that satisfies the predicate, provided the
//! predicate held at the original `high`.
//!
//! The stepwise API exists so that a search loop can interleave monitoring and
//! cancellation between evaluations; `lower_bound` is the closed form when
//! nothing needs to happen in between.
//!
//! ## Usage
//!
//! ```rust
//! use posy_core::math::bracket::ClosedBracket;
//!
//! // Smallest x in [0, 100] with x * x >= 50.
//! let x = ClosedBracket::new(0i64, 100).lower_bound(|x| x * x >= 50);
//! assert_eq!(x, 8);
//! ```

use num_traits::PrimInt;

/// A closed integer range `[low, high]` narrowed by lower-bound bisection.
///
/// # Invariants
///
/// `low <= high` at all times.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClosedBracket<T>
where
    T: PrimInt,
{
    low: T,
    high: T,
}

impl<T> ClosedBracket<T>
where
    T: PrimInt,
{
    /// Creates a new bracket `[low, high]`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    #[inline]
    pub fn new(low: T, high: T) -> Self {
        assert!(
            low <= high,
            "called `ClosedBracket::new` with low > high"
        );
        Self { low, high }
    }

    /// Creates a new bracket, or `None` if `low > high`.
    #[inline]
    pub fn try_new(low: T, high: T) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    /// Returns the lower end of the bracket.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the upper end of the bracket.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns `true` once the bracket has collapsed to a single value.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.low == self.high
    }

    /// Returns `floor((low + high) / 2)` without intermediate overflow.
    ///
    /// For `low < high` the result satisfies `low <= mid < high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use posy_core::math::bracket::ClosedBracket;
    ///
    /// assert_eq!(ClosedBracket::new(1i32, 10).midpoint(), 5);
    /// assert_eq!(ClosedBracket::new(-3i32, 0).midpoint(), -2);
    /// assert_eq!(ClosedBracket::new(i32::MAX - 1, i32::MAX).midpoint(), i32::MAX - 1);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        // Shared bits plus half the differing bits; the shift is arithmetic for
        // signed types, which rounds toward negative infinity.
        (self.low & self.high) + ((self.low ^ self.high) >> 1)
    }

    /// Keeps `[low, mid]` after the predicate held at `mid`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `mid` lies outside the bracket.
    #[inline]
    pub fn accept(&mut self, mid: T) {
        debug_assert!(
            self.low <= mid && mid <= self.high,
            "called `ClosedBracket::accept` with a midpoint outside the bracket"
        );
        self.high = mid;
    }

    /// Keeps `[mid + 1, high]` after the predicate failed at `mid`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `mid` is not strictly below `high`.
    #[inline]
    pub fn reject(&mut self, mid: T) {
        debug_assert!(
            self.low <= mid && mid < self.high,
            "called `ClosedBracket::reject` with a midpoint that is not below the upper end"
        );
        self.low = mid + T::one();
    }

    /// Runs the bisection to completion and returns the smallest value in the
    /// bracket for which `predicate` holds.
    ///
    /// The predicate must be monotone (once true, true for every larger value)
    /// and must hold at `high`; otherwise the result is `high`.
    pub fn lower_bound<P>(mut self, mut predicate: P) -> T
    where
        P: FnMut(T) -> bool,
    {
        while !self.is_converged() {
            let mid = self.midpoint();
            if predicate(mid) {
                self.accept(mid);
            } else {
                self.reject(mid);
            }
        }
        self.low
    }
}

impl<T> std::fmt::Display for ClosedBracket<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_new_and_accessors() {
        let b = ClosedBracket::<IntegerType>::new(3, 9);
        assert_eq!(b.low(), 3);
        assert_eq!(b.high(), 9);
        assert!(!b.is_converged());
        assert!(ClosedBracket::<IntegerType>::new(4, 4).is_converged());
    }

    #[test]
    #[should_panic(expected = "low > high")]
    fn test_new_panics_on_inverted_bracket() {
        let _ = ClosedBracket::<IntegerType>::new(9, 3);
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedBracket::<IntegerType>::try_new(1, 1).is_some());
        assert!(ClosedBracket::<IntegerType>::try_new(2, 1).is_none());
    }

    #[test]
    fn test_midpoint_is_floor_average() {
        for low in -20..20 {
            for high in low..20 {
                let b = ClosedBracket::<IntegerType>::new(low, high);
                assert_eq!(b.midpoint(), (low + high).div_euclid(2), "[{low}, {high}]");
            }
        }
    }

    #[test]
    fn test_midpoint_does_not_overflow() {
        let b = ClosedBracket::new(i32::MAX - 2, i32::MAX);
        assert_eq!(b.midpoint(), i32::MAX - 1);
        let b = ClosedBracket::new(i32::MIN, i32::MAX);
        assert_eq!(b.midpoint(), -1);
        let b = ClosedBracket::new(u8::MAX - 1, u8::MAX);
        assert_eq!(b.midpoint(), u8::MAX - 1);
    }

    #[test]
    fn test_accept_and_reject_narrow() {
        let mut b = ClosedBracket::<IntegerType>::new(1, 10);
        let mid = b.midpoint();
        assert_eq!(mid, 5);
        b.reject(mid);
        assert_eq!(b, ClosedBracket::new(6, 10));
        let mid = b.midpoint();
        assert_eq!(mid, 8);
        b.accept(mid);
        assert_eq!(b, ClosedBracket::new(6, 8));
    }

    #[test]
    fn test_lower_bound_finds_first_true() {
        for threshold in 0..=16 {
            let x = ClosedBracket::<IntegerType>::new(0, 16).lower_bound(|x| x >= threshold);
            assert_eq!(x, threshold);
        }
    }

    #[test]
    fn test_lower_bound_counts_evaluations() {
        let mut evaluations = 0;
        let x = ClosedBracket::<IntegerType>::new(0, 1023).lower_bound(|x| {
            evaluations += 1;
            x >= 700
        });
        assert_eq!(x, 700);
        assert_eq!(evaluations, 10);
    }

    #[test]
    fn test_lower_bound_on_single_point_never_evaluates() {
        let x = ClosedBracket::<IntegerType>::new(7, 7).lower_bound(|_| panic!("not evaluated"));
        assert_eq!(x, 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ClosedBracket::<IntegerType>::new(1, 10)), "[1, 10]");
    }
}
