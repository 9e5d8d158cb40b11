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

//! # Configurable Solver
//!
//! Wraps the bisection in a monitor stack assembled from a builder:
//!
//! - an optional wall-clock budget (`TimeLimitMonitor`),
//! - an optional budget on feasibility probes (`ProbeLimitMonitor`),
//! - an optional external stop flag (`InterruptMonitor`),
//! - optional `tracing` output (`LogMonitor`),
//! - any number of caller-supplied monitors.
//!
//! A budget or interrupt that fires before convergence still yields a valid
//! harvest, reported as `SolverResult::Feasible`.
//!
//! ## Usage
//!
//! ```rust
//! use posy_model::loading::InstanceLoader;
//! use posy_solver::solver::SolverBuilder;
//! use std::time::Duration;
//!
//! let instance = InstanceLoader::<i64>::new()
//!     .from_str("10 4 2\n1 10 2 9 3 8 4 7 5 6\n")
//!     .unwrap();
//!
//! let mut solver = SolverBuilder::<i64>::new()
//!     .with_time_limit(Duration::from_secs(1))
//!     .build();
//!
//! let outcome = solver.solve(&instance);
//! assert_eq!(outcome.min_day(), Some(9));
//! ```

use posy_model::{garden::Garden, loading::Instance, request::BouquetRequest};
use posy_search::{
    bisection::BisectionSearch,
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor, log::LogMonitor,
        probe_limit::ProbeLimitMonitor, search_monitor::SearchMonitor,
        time_limit::TimeLimitMonitor,
    },
    num::DayNumeric,
    result::SolverOutcome,
};
use std::sync::atomic::AtomicBool;

pub struct Solver<'a, T> {
    monitor: CompositeMonitor<'a, T>,
    time_limit: Option<std::time::Duration>,
    probe_limit: Option<u64>,
    logging: bool,
}

impl<'a, T> std::fmt::Debug for Solver<'a, T>
where
    T: DayNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("monitor", &self.monitor)
            .field("time_limit", &self.time_limit)
            .field("probe_limit", &self.probe_limit)
            .field("logging", &self.logging)
            .finish()
    }
}

impl<'a, T> Solver<'a, T>
where
    T: DayNumeric + 'a,
{
    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    #[inline]
    pub fn has_time_limit(&self) -> bool {
        self.time_limit.is_some()
    }

    #[inline]
    pub fn probe_limit(&self) -> Option<u64> {
        self.probe_limit
    }

    #[inline]
    pub fn has_probe_limit(&self) -> bool {
        self.probe_limit.is_some()
    }

    #[inline]
    pub fn logging(&self) -> bool {
        self.logging
    }

    /// Number of monitors in the stack.
    #[inline]
    pub fn num_monitors(&self) -> usize {
        self.monitor.len()
    }

    /// Solves a loaded instance.
    #[inline]
    pub fn solve(&mut self, instance: &Instance<T>) -> SolverOutcome<T> {
        self.solve_with(&instance.garden, &instance.request)
    }

    /// Solves `request` against `garden`.
    pub fn solve_with(&mut self, garden: &Garden<T>, request: &BouquetRequest) -> SolverOutcome<T> {
        tracing::debug!(monitors = %self.monitor, %request, "solving");
        let outcome = BisectionSearch::new().solve(garden, request, &mut self.monitor);
        tracing::debug!(result = %outcome.result(), reason = %outcome.termination_reason(), "solved");
        outcome
    }
}

pub struct SolverBuilder<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
    interrupt: Option<&'a AtomicBool>,
    time_limit: Option<std::time::Duration>,
    probe_limit: Option<u64>,
    logging: bool,
}

impl<'a, T> Default for SolverBuilder<'a, T>
where
    T: DayNumeric + 'a,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SolverBuilder<'a, T>
where
    T: DayNumeric + 'a,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
            interrupt: None,
            time_limit: None,
            probe_limit: None,
            logging: false,
        }
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_probe_limit(mut self, limit: u64) -> Self {
        self.probe_limit = Some(limit);
        self
    }

    /// Stops the search once `flag` is set, from any thread.
    #[inline]
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Emits `tracing` events for entry, every probe and exit.
    #[inline]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    #[inline]
    pub fn add_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
        self
    }

    pub fn build(self) -> Solver<'a, T> {
        let mut monitor = CompositeMonitor::with_capacity(self.monitors.len() + 4);

        if self.logging {
            monitor.add_monitor(LogMonitor::<T>::new());
        }
        if let Some(flag) = self.interrupt {
            monitor.add_monitor(InterruptMonitor::<T>::new(flag));
        }
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::<T>::new(limit));
        }
        if let Some(limit) = self.probe_limit {
            monitor.add_monitor(ProbeLimitMonitor::<T>::new(limit));
        }
        for m in self.monitors {
            monitor.add_monitor_boxed(m);
        }

        Solver {
            monitor,
            time_limit: self.time_limit,
            probe_limit: self.probe_limit,
            logging: self.logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posy_model::loading::InstanceLoader;
    use posy_search::{
        monitor::search_monitor::SearchCommand,
        result::{SolverResult, TerminationReason},
        stats::SearchStatistics,
    };
    use std::{cell::Cell, rc::Rc, sync::atomic::Ordering, time::Duration};

    type IntegerType = i64;

    fn worked_example() -> Instance<IntegerType> {
        InstanceLoader::<IntegerType>::new()
            .from_str("10 4 2\n1 10 2 9 3 8 4 7 5 6\n")
            .unwrap()
    }

    struct CountingMonitor {
        probes: Rc<Cell<u64>>,
    }

    impl SearchMonitor<IntegerType> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_search(&mut self, _garden: &Garden<IntegerType>, _request: &BouquetRequest) {}
        fn on_probe(&mut self, _day: IntegerType, _feasible: bool, _statistics: &SearchStatistics) {
            self.probes.set(self.probes.get() + 1);
        }
        fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}
        fn search_command(&self) -> SearchCommand {
            SearchCommand::Continue
        }
    }

    #[test]
    fn test_default_solver_is_optimal() {
        let mut solver = SolverBuilder::<IntegerType>::new().build();
        assert_eq!(solver.num_monitors(), 0);

        let outcome = solver.solve(&worked_example());
        assert_eq!(outcome.min_day(), Some(9));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_builder_configuration() {
        let flag = AtomicBool::new(false);
        let solver = SolverBuilder::<IntegerType>::new()
            .with_time_limit(Duration::from_secs(5))
            .with_probe_limit(10)
            .with_interrupt(&flag)
            .with_logging(true)
            .build();

        assert_eq!(solver.time_limit(), Some(Duration::from_secs(5)));
        assert_eq!(solver.probe_limit(), Some(10));
        assert!(solver.has_time_limit());
        assert!(solver.has_probe_limit());
        assert!(solver.logging());
        assert_eq!(solver.num_monitors(), 4);
    }

    #[test]
    fn test_generous_limits_do_not_change_answer() {
        let flag = AtomicBool::new(false);
        let mut solver = SolverBuilder::<IntegerType>::new()
            .with_time_limit(Duration::from_secs(60))
            .with_probe_limit(64)
            .with_interrupt(&flag)
            .with_logging(true)
            .build();

        assert_eq!(solver.solve(&worked_example()).min_day(), Some(9));
    }

    #[test]
    fn test_probe_limit_yields_feasible_upper_bound() {
        let instance = worked_example();
        let mut solver = SolverBuilder::<IntegerType>::new()
            .with_probe_limit(1)
            .build();

        let outcome = solver.solve(&instance);
        match outcome.result() {
            SolverResult::Feasible(harvest) => {
                assert!(harvest.day() >= 9);
                assert_eq!(harvest.validate(&instance.garden, &instance.request), Ok(()));
            }
            other => panic!("expected Feasible, got {:?}", other),
        }
    }

    #[test]
    fn test_interrupt_stops_search() {
        let flag = AtomicBool::new(false);
        let mut solver = SolverBuilder::<IntegerType>::new()
            .with_interrupt(&flag)
            .build();

        flag.store(true, Ordering::Relaxed);
        let outcome = solver.solve(&worked_example());
        assert!(outcome.is_feasible());
        assert_eq!(outcome.statistics().probes, 0);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("interrupted".to_string())
        );
    }

    #[test]
    fn test_solver_is_reusable() {
        let mut solver = SolverBuilder::<IntegerType>::new()
            .with_probe_limit(64)
            .build();
        let instance = worked_example();
        let first = solver.solve(&instance);
        let second = solver.solve(&instance);
        assert_eq!(first.result(), second.result());
    }

    #[test]
    fn test_custom_monitor_sees_every_probe() {
        let probes = Rc::new(Cell::new(0));
        let mut solver = SolverBuilder::<IntegerType>::new()
            .add_monitor(CountingMonitor {
                probes: probes.clone(),
            })
            .build();

        let outcome = solver.solve(&worked_example());
        assert_eq!(probes.get(), outcome.statistics().probes);
        assert!(probes.get() > 0);
    }

    #[test]
    fn test_infeasible_instance() {
        let garden = Garden::from_slice(&[1, 10, 3, 10, 2]).unwrap();
        let request = BouquetRequest::new(3, 2).unwrap();
        let mut solver = SolverBuilder::<IntegerType>::new().build();
        let outcome = solver.solve_with(&garden, &request);
        assert!(outcome.is_infeasible());
    }
}
