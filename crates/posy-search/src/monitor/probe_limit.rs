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

/// Stops the search once `probe_limit` feasibility probes have run.
///
/// The bisection over a season of width `w` needs at most `ceil(log2(w + 1))`
/// probes, so a limit at or above that never triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeLimitMonitor<T> {
    probe_limit: u64,
    probes: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> ProbeLimitMonitor<T> {
    /// Creates a monitor that stops the search after `probe_limit` probes.
    #[inline]
    pub fn new(probe_limit: u64) -> Self {
        Self {
            probe_limit,
            probes: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// The configured maximum number of probes.
    #[inline]
    pub fn probe_limit(&self) -> u64 {
        self.probe_limit
    }

    /// Probes observed so far.
    #[inline]
    pub fn probes(&self) -> u64 {
        self.probes
    }
}

impl<T> SearchMonitor<T> for ProbeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "ProbeLimitMonitor"
    }

    fn on_enter_search(&mut self, _garden: &Garden<T>, _request: &BouquetRequest) {
        self.probes = 0;
    }

    #[inline(always)]
    fn on_probe(&mut self, _day: T, _feasible: bool, _statistics: &SearchStatistics) {
        self.probes = self.probes.saturating_add(1);
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.probes >= self.probe_limit {
            return SearchCommand::Terminate("probe limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_terminates_after_limit() {
        let mut mon = ProbeLimitMonitor::<IntegerType>::new(2);
        let stats = SearchStatistics::default();

        assert_eq!(mon.search_command(), SearchCommand::Continue);
        mon.on_probe(5, true, &stats);
        assert_eq!(mon.search_command(), SearchCommand::Continue);
        mon.on_probe(3, false, &stats);
        assert_eq!(
            mon.search_command(),
            SearchCommand::Terminate("probe limit reached".to_string())
        );
    }

    #[test]
    fn test_zero_limit_terminates_before_first_probe() {
        let mon = ProbeLimitMonitor::<IntegerType>::new(0);
        assert!(matches!(mon.search_command(), SearchCommand::Terminate(_)));
    }

    #[test]
    fn test_on_enter_search_resets_counter() {
        let mut mon = ProbeLimitMonitor::<IntegerType>::new(1);
        mon.on_probe(1, true, &SearchStatistics::default());
        assert_eq!(mon.probes(), 1);

        let garden = Garden::from_slice(&[1]).unwrap();
        let request = BouquetRequest::new(1, 1).unwrap();
        mon.on_enter_search(&garden, &request);
        assert_eq!(mon.probes(), 0);
        assert_eq!(mon.search_command(), SearchCommand::Continue);
    }
}
