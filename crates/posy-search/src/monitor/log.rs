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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use num_traits::{PrimInt, Signed};
use posy_model::{garden::Garden, request::BouquetRequest};
use std::time::Instant;

/// Emits `tracing` events for the lifecycle of a search.
///
/// Entry and exit are logged at `info`, every probe at `debug`.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_feasible_day: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            last_feasible_day: None,
        }
    }

    /// The smallest day a probe has found feasible so far.
    #[inline]
    pub fn last_feasible_day(&self) -> Option<T> {
        self.last_feasible_day
    }
}

impl<T> Default for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor")
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, garden: &Garden<T>, request: &BouquetRequest) {
        self.start_time = Instant::now();
        self.last_feasible_day = None;
        tracing::info!(
            plots = garden.num_plots(),
            bouquets = request.bouquets(),
            flowers_per_bouquet = request.flowers_per_bouquet(),
            earliest_bloom = %garden.earliest_bloom(),
            latest_bloom = %garden.latest_bloom(),
            "search started"
        );
    }

    fn on_probe(&mut self, day: T, feasible: bool, statistics: &SearchStatistics) {
        if feasible {
            self.last_feasible_day = Some(match self.last_feasible_day {
                Some(best) => best.min(day),
                None => day,
            });
        }
        tracing::debug!(
            probe = statistics.probes,
            day = %day,
            feasible,
            plots_scanned = statistics.plots_scanned,
            "probe"
        );
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        tracing::info!(
            probes = statistics.probes,
            plots_scanned = statistics.plots_scanned,
            elapsed_secs = self.start_time.elapsed().as_secs_f64(),
            best_day = ?self.last_feasible_day,
            "search finished"
        );
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
