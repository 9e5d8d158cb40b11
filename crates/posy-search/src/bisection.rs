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

//! # Bisection
//!
//! Finds the earliest day on which the requested bouquets can be picked.
//!
//! The answer, when it exists, is a bloom day, so it lies in the season
//! `[earliest_bloom, latest_bloom]`. On the latest bloom every plot has
//! bloomed, so once the row holds `m * k` plots at all the upper end of the
//! season is feasible, and feasibility is monotone in the day. A lower-bound
//! bisection over the season therefore converges on the earliest feasible
//! day after `ceil(log2(width + 1))` scans.
//!
//! `min_days` is the closed form. `BisectionSearch` runs the same loop one
//! probe at a time, reporting each probe to a `SearchMonitor` and honoring its
//! termination requests.

use crate::{
    feasibility::FeasibilityOracle,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::SolverOutcome,
    stats::SearchStatistics,
};
use num_traits::{PrimInt, Signed};
use posy_model::{garden::Garden, request::BouquetRequest};

/// Returns the earliest day on which `request` can be met from `garden`,
/// or `None` if the row is too short for it.
///
/// # Examples
///
/// ```rust
/// # use posy_search::bisection::min_days;
/// # use posy_model::{garden::Garden, request::BouquetRequest};
///
/// let garden = Garden::from_slice(&[1i64, 10, 2, 9, 3, 8, 4, 7, 5, 6]).unwrap();
/// let request = BouquetRequest::new(4, 2).unwrap();
/// assert_eq!(min_days(&garden, &request), Some(9));
/// ```
pub fn min_days<T>(garden: &Garden<T>, request: &BouquetRequest) -> Option<T>
where
    T: PrimInt + Signed,
{
    if !request.fits_in(garden.num_plots()) {
        return None;
    }

    let oracle = FeasibilityOracle::new(garden, request);
    Some(garden.season().lower_bound(|day| oracle.is_feasible(day)))
}

/// The monitored bisection engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSearch<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> BisectionSearch<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `BisectionSearch`.
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }

    /// Runs the bisection under `monitor`.
    ///
    /// The monitor is asked for a command before every probe. If it requests
    /// termination, the harvest at the current upper end of the bracket is
    /// returned as `Feasible`, since that day has not been ruled out as the
    /// answer but is known to work.
    pub fn solve<M>(
        &mut self,
        garden: &Garden<T>,
        request: &BouquetRequest,
        monitor: &mut M,
    ) -> SolverOutcome<T>
    where
        M: SearchMonitor<T> + ?Sized,
    {
        let start = std::time::Instant::now();
        let mut statistics = SearchStatistics::default();

        monitor.on_enter_search(garden, request);

        if !request.fits_in(garden.num_plots()) {
            statistics.solve_duration = start.elapsed();
            monitor.on_exit_search(&statistics);
            return SolverOutcome::infeasible(statistics);
        }

        let oracle = FeasibilityOracle::new(garden, request);
        let mut bracket = garden.season();
        let mut abort_reason = None;

        while !bracket.is_converged() {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                abort_reason = Some(reason);
                break;
            }

            let mid = bracket.midpoint();
            let report = oracle.probe(mid);
            statistics.record_probe(report.plots_scanned);
            monitor.on_probe(mid, report.feasible, &statistics);

            if report.feasible {
                bracket.accept(mid);
            } else {
                bracket.reject(mid);
            }
        }

        // Reconstructing the bouquets is one more scan, not counted as a probe.
        let outcome_day = bracket.high();
        let harvest = oracle.harvest(outcome_day);
        statistics.solve_duration = start.elapsed();
        monitor.on_exit_search(&statistics);

        match (harvest, abort_reason) {
            (Some(harvest), None) => SolverOutcome::optimal(harvest, statistics),
            (Some(harvest), Some(reason)) => SolverOutcome::feasible(harvest, reason, statistics),
            (None, reason) => SolverOutcome::unknown(
                reason.unwrap_or_else(|| "upper end of the season is not feasible".to_string()),
                statistics,
            ),
        }
    }
}
