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

//! The garden row.
//!
//! A `Garden<T>` is an ordered sequence of bloom days, one per plot. Plot `i`
//! can be picked on any day `d` with `bloom_day(i) <= d`. Two plots are
//! adjacent when their indices differ by one; the row does not wrap around.
//!
//! Construction validates the row once, so everything downstream may assume a
//! non-empty row of non-negative days and read the cached earliest and latest
//! bloom without rescanning.

use crate::index::PlotIndex;
use num_traits::{PrimInt, Signed};
use posy_core::math::bracket::ClosedBracket;

/// Why a sequence of bloom days was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GardenError<T> {
    /// The garden has no plots.
    Empty,
    /// A plot blooms on a negative day.
    NegativeBloomDay {
        /// The offending plot.
        plot: PlotIndex,
        /// Its bloom day.
        day: T,
    },
}

impl<T> std::fmt::Display for GardenError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "garden must contain at least one plot"),
            Self::NegativeBloomDay { plot, day } => {
                write!(f, "plot {} blooms on negative day {}", plot.get(), day)
            }
        }
    }
}

impl<T> std::error::Error for GardenError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// A validated row of plots and their bloom days.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Garden<T>
where
    T: PrimInt + Signed,
{
    bloom_days: Vec<T>,
    earliest_bloom: T,
    latest_bloom: T,
}

impl<T> Garden<T>
where
    T: PrimInt + Signed,
{
    /// Builds a garden from bloom days in plot order.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Empty` for an empty row and
    /// `GardenError::NegativeBloomDay` for the first plot with a negative day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use posy_model::garden::{Garden, GardenError};
    ///
    /// let garden = Garden::new(vec![1i64, 10, 3, 10, 2]).unwrap();
    /// assert_eq!(garden.num_plots(), 5);
    /// assert_eq!(garden.earliest_bloom(), 1);
    /// assert_eq!(garden.latest_bloom(), 10);
    ///
    /// assert_eq!(Garden::<i64>::new(vec![]), Err(GardenError::Empty));
    /// ```
    pub fn new(bloom_days: Vec<T>) -> Result<Self, GardenError<T>> {
        let first = *bloom_days.first().ok_or(GardenError::Empty)?;

        let mut earliest_bloom = first;
        let mut latest_bloom = first;
        for (i, &day) in bloom_days.iter().enumerate() {
            if day.is_negative() {
                return Err(GardenError::NegativeBloomDay {
                    plot: PlotIndex::new(i),
                    day,
                });
            }
            earliest_bloom = earliest_bloom.min(day);
            latest_bloom = latest_bloom.max(day);
        }

        Ok(Self {
            bloom_days,
            earliest_bloom,
            latest_bloom,
        })
    }

    /// Builds a garden by copying a slice of bloom days.
    ///
    /// # Errors
    ///
    /// Same as [`Garden::new`].
    #[inline]
    pub fn from_slice(bloom_days: &[T]) -> Result<Self, GardenError<T>> {
        Self::new(bloom_days.to_vec())
    }

    /// Returns the number of plots in the row.
    #[inline]
    pub fn num_plots(&self) -> usize {
        self.bloom_days.len()
    }

    /// Returns the bloom days in plot order.
    #[inline]
    pub fn bloom_days(&self) -> &[T] {
        &self.bloom_days
    }

    /// Returns the bloom day of a single plot.
    ///
    /// # Panics
    ///
    /// Panics if `plot` is out of bounds.
    #[inline]
    pub fn bloom_day(&self, plot: PlotIndex) -> T {
        let index = plot.get();
        debug_assert!(
            index < self.num_plots(),
            "called `Garden::bloom_day` with plot index out of bounds: the len is {} but the index is {}",
            self.num_plots(),
            index
        );

        self.bloom_days[index]
    }

    /// Returns the smallest bloom day in the row.
    #[inline]
    pub fn earliest_bloom(&self) -> T {
        self.earliest_bloom
    }

    /// Returns the largest bloom day in the row. Every plot has bloomed by then.
    #[inline]
    pub fn latest_bloom(&self) -> T {
        self.latest_bloom
    }

    /// Returns the closed range of days worth searching,
    /// `[earliest_bloom, latest_bloom]`.
    #[inline]
    pub fn season(&self) -> ClosedBracket<T> {
        ClosedBracket::new(self.earliest_bloom, self.latest_bloom)
    }

    /// Returns `true` if `plot` has bloomed by `day`.
    #[inline]
    pub fn is_bloomed(&self, plot: PlotIndex, day: T) -> bool {
        self.bloom_day(plot) <= day
    }

    /// Returns the number of plots that have bloomed by `day`, adjacent or not.
    #[inline]
    pub fn num_bloomed(&self, day: T) -> usize {
        self.bloom_days.iter().filter(|&&d| d <= day).count()
    }
}

impl<T> std::fmt::Debug for Garden<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Garden")
            .field("num_plots", &self.num_plots())
            .field("earliest_bloom", &self.earliest_bloom)
            .field("latest_bloom", &self.latest_bloom)
            .finish()
    }
}

impl<T> std::fmt::Display for Garden<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Garden(plots: {}, blooms: [{}, {}])",
            self.num_plots(),
            self.earliest_bloom,
            self.latest_bloom
        )
    }
}

impl<T> TryFrom<Vec<T>> for Garden<T>
where
    T: PrimInt + Signed,
{
    type Error = GardenError<T>;

    fn try_from(bloom_days: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(bloom_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn pi(i: usize) -> PlotIndex {
        PlotIndex::new(i)
    }

    #[test]
    fn test_new_caches_bounds() {
        let garden = Garden::<IntegerType>::new(vec![1, 10, 2, 9, 3, 8, 4, 7, 5, 6]).unwrap();
        assert_eq!(garden.num_plots(), 10);
        assert_eq!(garden.earliest_bloom(), 1);
        assert_eq!(garden.latest_bloom(), 10);
        assert_eq!(garden.season(), ClosedBracket::new(1, 10));
    }

    #[test]
    fn test_single_plot() {
        let garden = Garden::<IntegerType>::new(vec![7]).unwrap();
        assert_eq!(garden.earliest_bloom(), 7);
        assert_eq!(garden.latest_bloom(), 7);
        assert!(garden.season().is_converged());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Garden::<IntegerType>::new(vec![]), Err(GardenError::Empty));
    }

    #[test]
    fn test_rejects_first_negative_day() {
        let err = Garden::<IntegerType>::new(vec![3, -1, -5]).unwrap_err();
        assert_eq!(
            err,
            GardenError::NegativeBloomDay {
                plot: pi(1),
                day: -1
            }
        );
        assert_eq!(format!("{}", err), "plot 1 blooms on negative day -1");
    }

    #[test]
    fn test_zero_day_is_valid() {
        let garden = Garden::<IntegerType>::new(vec![0, 0, 4]).unwrap();
        assert_eq!(garden.earliest_bloom(), 0);
        assert_eq!(garden.num_bloomed(0), 2);
    }

    #[test]
    fn test_bloom_queries() {
        let garden = Garden::<IntegerType>::from_slice(&[1, 10, 3, 10, 2]).unwrap();
        assert_eq!(garden.bloom_day(pi(2)), 3);
        assert!(garden.is_bloomed(pi(0), 1));
        assert!(!garden.is_bloomed(pi(1), 9));
        assert_eq!(garden.num_bloomed(3), 3);
        assert_eq!(garden.num_bloomed(10), 5);
        assert_eq!(garden.num_bloomed(0), 0);
    }

    #[test]
    fn test_try_from_vec() {
        let garden: Garden<i32> = vec![5, 6].try_into().unwrap();
        assert_eq!(garden.bloom_days(), &[5, 6]);
    }

    #[test]
    fn test_display() {
        let garden = Garden::<IntegerType>::new(vec![4, 2, 9]).unwrap();
        assert_eq!(format!("{}", garden), "Garden(plots: 3, blooms: [2, 9])");
    }
}
