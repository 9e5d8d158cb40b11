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

//! # Feasibility Scan
//!
//! Decides whether `bouquets` bouquets of `flowers_per_bouquet` adjacent
//! flowers can be picked on a given day.
//!
//! The scan walks the row once, left to right, keeping the length of the
//! current run of bloomed plots. A plot that has not bloomed breaks the run.
//! When the run reaches `flowers_per_bouquet`, a bouquet is formed and the run
//! restarts from zero, so bouquets never share a plot and a run of length
//! `2k` yields two bouquets while a run of `k + 1 ..= 2k - 1` yields one. The
//! scan stops as soon as enough bouquets exist.
//!
//! Taking each bouquet as early as possible is optimal: any set of disjoint
//! spans can be shifted left onto the greedy ones without losing a bouquet.
//! Feasibility is therefore monotone in the day, since a later day only turns
//! more plots into bloom, which is what makes the bisection valid.

use num_traits::{PrimInt, Signed};
use posy_core::math::interval::ClosedOpenInterval;
use posy_model::{garden::Garden, harvest::Harvest, request::BouquetRequest};

/// What a single scan found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanReport {
    /// Whether at least the requested number of bouquets was formed.
    pub feasible: bool,
    /// Bouquets formed before the scan stopped.
    pub bouquets_formed: usize,
    /// Plots visited before the scan stopped.
    pub plots_scanned: usize,
}

/// Scans `bloom_days` for `bouquets` bouquets of `flowers_per_bouquet`
/// adjacent plots that have bloomed by `day`.
///
/// With `flowers_per_bouquet == 0` no bouquet is ever formed; with
/// `bouquets == 0` the scan is trivially feasible and visits nothing.
#[inline]
pub fn scan<T>(bloom_days: &[T], day: T, bouquets: usize, flowers_per_bouquet: usize) -> ScanReport
where
    T: PrimInt,
{
    let mut run_length = 0usize;
    let mut bouquets_formed = 0usize;
    let mut plots_scanned = 0usize;

    for &bloom_day in bloom_days {
        if bouquets_formed >= bouquets {
            break;
        }
        plots_scanned += 1;
        run_length += 1;
        if bloom_day > day {
            run_length = 0;
        } else if run_length == flowers_per_bouquet {
            bouquets_formed += 1;
            run_length = 0;
        }
    }

    ScanReport {
        feasible: bouquets_formed >= bouquets,
        bouquets_formed,
        plots_scanned,
    }
}

/// Returns `true` if `bouquets` bouquets of `flowers_per_bouquet` adjacent
/// plots bloomed by `day` exist.
///
/// # Examples
///
/// ```rust
/// # use posy_search::feasibility::feasible_by_day;
///
/// let days = [1i64, 10, 2, 9, 3, 8, 4, 7, 5, 6];
/// assert!(feasible_by_day(&days, 9, 4, 2));
/// assert!(!feasible_by_day(&days, 8, 4, 2));
/// ```
#[inline]
pub fn feasible_by_day<T>(bloom_days: &[T], day: T, bouquets: usize, flowers_per_bouquet: usize) -> bool
where
    T: PrimInt,
{
    scan(bloom_days, day, bouquets, flowers_per_bouquet).feasible
}

/// Counts every bouquet the greedy scan forms by `day`, without stopping early.
///
/// # Examples
///
/// ```rust
/// # use posy_search::feasibility::count_bouquets;
///
/// // One run of five bloomed plots: two pairs, the fifth plot is left over.
/// assert_eq!(count_bouquets(&[1i32, 1, 1, 1, 1], 1, 2), 2);
/// ```
#[inline]
pub fn count_bouquets<T>(bloom_days: &[T], day: T, flowers_per_bouquet: usize) -> usize
where
    T: PrimInt,
{
    scan(bloom_days, day, usize::MAX, flowers_per_bouquet).bouquets_formed
}

/// Returns the spans of the first `bouquets` bouquets the greedy scan forms by
/// `day`, or `None` if fewer exist.
///
/// # Examples
///
/// ```rust
/// # use posy_search::feasibility::harvest_spans;
/// # use posy_core::math::interval::ClosedOpenInterval;
///
/// let spans = harvest_spans(&[1i64, 10, 3, 10, 2], 3, 3, 1).unwrap();
/// assert_eq!(spans, vec![
///     ClosedOpenInterval::new(0, 1),
///     ClosedOpenInterval::new(2, 3),
///     ClosedOpenInterval::new(4, 5),
/// ]);
/// ```
pub fn harvest_spans<T>(
    bloom_days: &[T],
    day: T,
    bouquets: usize,
    flowers_per_bouquet: usize,
) -> Option<Vec<ClosedOpenInterval<usize>>>
where
    T: PrimInt,
{
    let mut spans = Vec::with_capacity(bouquets.min(bloom_days.len()));
    let mut run_length = 0usize;

    for (plot, &bloom_day) in bloom_days.iter().enumerate() {
        if spans.len() >= bouquets {
            break;
        }
        run_length += 1;
        if bloom_day > day {
            run_length = 0;
        } else if run_length == flowers_per_bouquet {
            let end = plot + 1;
            spans.push(ClosedOpenInterval::new(end - flowers_per_bouquet, end));
            run_length = 0;
        }
    }

    (spans.len() >= bouquets).then_some(spans)
}

/// The feasibility scan bound to one garden and request.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityOracle<'a, T>
where
    T: PrimInt + Signed,
{
    garden: &'a Garden<T>,
    request: &'a BouquetRequest,
}

impl<'a, T> FeasibilityOracle<'a, T>
where
    T: PrimInt + Signed,
{
    /// Binds the scan to `garden` and `request`.
    #[inline]
    pub fn new(garden: &'a Garden<T>, request: &'a BouquetRequest) -> Self {
        Self { garden, request }
    }

    /// The garden being scanned.
    #[inline]
    pub fn garden(&self) -> &'a Garden<T> {
        self.garden
    }

    /// The request being answered.
    #[inline]
    pub fn request(&self) -> &'a BouquetRequest {
        self.request
    }

    /// Runs the scan for `day`.
    #[inline]
    pub fn probe(&self, day: T) -> ScanReport {
        scan(
            self.garden.bloom_days(),
            day,
            self.request.bouquets(),
            self.request.flowers_per_bouquet(),
        )
    }

    /// Returns `true` if the request can be met on `day`.
    #[inline]
    pub fn is_feasible(&self, day: T) -> bool {
        self.probe(day).feasible
    }

    /// Picks the bouquets for `day`, or `None` if the request cannot be met.
    #[inline]
    pub fn harvest(&self, day: T) -> Option<Harvest<T>> {
        harvest_spans(
            self.garden.bloom_days(),
            day,
            self.request.bouquets(),
            self.request.flowers_per_bouquet(),
        )
        .map(|spans| Harvest::new(day, spans))
    }
}
