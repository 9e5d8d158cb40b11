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

//! The answer to a bouquet request.
//!
//! A `Harvest<T>` records the day on which the bouquets are picked and, for
//! each bouquet, the half-open span of plots it consumes. Spans are stored in
//! left-to-right order and never overlap.

use crate::{
    garden::Garden,
    index::{BouquetIndex, PlotIndex},
    request::BouquetRequest,
};
use num_traits::{PrimInt, Signed};
use posy_core::math::interval::ClosedOpenInterval;

/// A harvest that does not satisfy its garden and request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestViolation {
    /// The harvest holds a different number of bouquets than requested.
    BouquetCount { expected: usize, found: usize },
    /// A bouquet span does not hold exactly `flowers_per_bouquet` plots.
    BouquetSize {
        bouquet: BouquetIndex,
        expected: usize,
        found: usize,
    },
    /// A bouquet span reaches past the end of the row.
    OutOfBounds { bouquet: BouquetIndex },
    /// A bouquet starts before the previous one ends.
    Overlap { bouquet: BouquetIndex },
    /// A picked plot has not bloomed by the harvest day.
    NotBloomed { plot: PlotIndex },
}

impl std::fmt::Display for HarvestViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BouquetCount { expected, found } => {
                write!(f, "expected {} bouquets, found {}", expected, found)
            }
            Self::BouquetSize {
                bouquet,
                expected,
                found,
            } => write!(
                f,
                "bouquet {} holds {} flowers instead of {}",
                bouquet.get(),
                found,
                expected
            ),
            Self::OutOfBounds { bouquet } => {
                write!(f, "bouquet {} reaches past the last plot", bouquet.get())
            }
            Self::Overlap { bouquet } => {
                write!(f, "bouquet {} overlaps its predecessor", bouquet.get())
            }
            Self::NotBloomed { plot } => {
                write!(f, "plot {} has not bloomed on the harvest day", plot.get())
            }
        }
    }
}

impl std::error::Error for HarvestViolation {}

/// The day and plot spans of a set of bouquets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Harvest<T> {
    day: T,
    bouquets: Vec<ClosedOpenInterval<usize>>,
}

impl<T> Harvest<T>
where
    T: PrimInt + Signed,
{
    /// Creates a harvest from a day and bouquet spans.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the spans are not sorted and disjoint.
    #[inline]
    pub fn new(day: T, bouquets: Vec<ClosedOpenInterval<usize>>) -> Self {
        debug_assert!(
            bouquets.windows(2).all(|w| w[0].end() <= w[1].start()),
            "called `Harvest::new` with bouquet spans that are not sorted and disjoint"
        );

        Self { day, bouquets }
    }

    /// The day on which every picked plot has bloomed.
    #[inline]
    pub fn day(&self) -> T {
        self.day
    }

    /// Number of bouquets in the harvest.
    #[inline]
    pub fn num_bouquets(&self) -> usize {
        self.bouquets.len()
    }

    /// All bouquet spans, left to right.
    #[inline]
    pub fn bouquets(&self) -> &[ClosedOpenInterval<usize>] {
        &self.bouquets
    }

    /// The plot span of a single bouquet.
    ///
    /// # Panics
    ///
    /// Panics if `bouquet` is out of bounds.
    #[inline]
    pub fn bouquet(&self, bouquet: BouquetIndex) -> ClosedOpenInterval<usize> {
        let index = bouquet.get();
        debug_assert!(
            index < self.num_bouquets(),
            "called `Harvest::bouquet` with bouquet index out of bounds: the len is {} but the index is {}",
            self.num_bouquets(),
            index
        );

        self.bouquets[index]
    }

    /// Every picked plot, left to right.
    pub fn picked_plots(&self) -> impl Iterator<Item = PlotIndex> + '_ {
        self.bouquets
            .iter()
            .flat_map(|span| span.iter().map(PlotIndex::new))
    }

    /// Checks the harvest against the garden it was picked from and the
    /// request it answers.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking bouquet count, then each
    /// bouquet in order for size, bounds, overlap and bloom.
    pub fn validate(
        &self,
        garden: &Garden<T>,
        request: &BouquetRequest,
    ) -> Result<(), HarvestViolation> {
        if self.num_bouquets() != request.bouquets() {
            return Err(HarvestViolation::BouquetCount {
                expected: request.bouquets(),
                found: self.num_bouquets(),
            });
        }

        let mut previous_end = 0usize;
        for (i, span) in self.bouquets.iter().enumerate() {
            let bouquet = BouquetIndex::new(i);
            if span.len() != request.flowers_per_bouquet() {
                return Err(HarvestViolation::BouquetSize {
                    bouquet,
                    expected: request.flowers_per_bouquet(),
                    found: span.len(),
                });
            }
            if span.end() > garden.num_plots() {
                return Err(HarvestViolation::OutOfBounds { bouquet });
            }
            if i > 0 && span.start() < previous_end {
                return Err(HarvestViolation::Overlap { bouquet });
            }
            if let Some(plot) = span
                .iter()
                .map(PlotIndex::new)
                .find(|&plot| !garden.is_bloomed(plot, self.day))
            {
                return Err(HarvestViolation::NotBloomed { plot });
            }
            previous_end = span.end();
        }

        Ok(())
    }
}

impl<T> std::fmt::Display for Harvest<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Harvest Summary")?;
        writeln!(f, "   Day: {}", self.day)?;
        writeln!(f)?;

        if self.bouquets.is_empty() {
            writeln!(f, "   (No bouquets picked)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<12}", "Bouquet", "Plots")?;
        writeln!(f, "   {:-<10}-+-{:-<12}", "", "")?;
        for (i, span) in self.bouquets.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<12}", i, span.to_string())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn span(s: usize, e: usize) -> ClosedOpenInterval<usize> {
        ClosedOpenInterval::new(s, e)
    }

    fn garden(days: &[IntegerType]) -> Garden<IntegerType> {
        Garden::from_slice(days).unwrap()
    }

    fn request(m: usize, k: usize) -> BouquetRequest {
        BouquetRequest::new(m, k).unwrap()
    }

    #[test]
    fn test_accessors() {
        let harvest = Harvest::<IntegerType>::new(9, vec![span(0, 2), span(2, 4)]);
        assert_eq!(harvest.day(), 9);
        assert_eq!(harvest.num_bouquets(), 2);
        assert_eq!(harvest.bouquet(BouquetIndex::new(1)), span(2, 4));
        let plots: Vec<usize> = harvest.picked_plots().map(|p| p.get()).collect();
        assert_eq!(plots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_validate_accepts_worked_example() {
        let g = garden(&[1, 10, 2, 9, 3, 8, 4, 7, 5, 6]);
        let harvest = Harvest::new(9, vec![span(2, 4), span(4, 6), span(6, 8), span(8, 10)]);
        assert_eq!(harvest.validate(&g, &request(4, 2)), Ok(()));
    }

    #[test]
    fn test_validate_rejects_wrong_count() {
        let g = garden(&[1, 1, 1]);
        let harvest = Harvest::new(1, vec![span(0, 1)]);
        assert_eq!(
            harvest.validate(&g, &request(2, 1)),
            Err(HarvestViolation::BouquetCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_wrong_size() {
        let g = garden(&[1, 1, 1]);
        let harvest = Harvest::new(1, vec![span(0, 3)]);
        assert!(matches!(
            harvest.validate(&g, &request(1, 2)),
            Err(HarvestViolation::BouquetSize { found: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_bounds() {
        let g = garden(&[1, 1]);
        let harvest = Harvest::new(1, vec![span(1, 3)]);
        assert!(matches!(
            harvest.validate(&g, &request(1, 2)),
            Err(HarvestViolation::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unbloomed_plot() {
        let g = garden(&[1, 10, 3]);
        let harvest = Harvest::new(3, vec![span(0, 2)]);
        assert_eq!(
            harvest.validate(&g, &request(1, 2)),
            Err(HarvestViolation::NotBloomed {
                plot: PlotIndex::new(1)
            })
        );
    }

    #[test]
    fn test_display_lists_bouquets() {
        let harvest = Harvest::<IntegerType>::new(3, vec![span(0, 1), span(2, 3)]);
        let rendered = format!("{}", harvest);
        assert!(rendered.contains("Day: 3"));
        assert!(rendered.contains("[0, 1)"));
        assert!(rendered.contains("[2, 3)"));
    }
}
