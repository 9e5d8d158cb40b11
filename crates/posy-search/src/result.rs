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

use crate::stats::SearchStatistics;
use num_traits::{PrimInt, Signed};
use posy_model::harvest::Harvest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// The garden has fewer plots than the request consumes.
    Infeasible,
    /// The harvest day is proven to be the earliest possible.
    Optimal(Harvest<T>),
    /// The search was stopped early; the harvest is valid but its day is
    /// only an upper bound on the earliest possible one.
    Feasible(Harvest<T>),
    /// The search terminated without a harvest and without a proof.
    Unknown,
}

impl<T> SolverResult<T>
where
    T: PrimInt + Signed,
{
    /// The harvest, if one was found.
    #[inline]
    pub fn harvest(&self) -> Option<&Harvest<T>> {
        match self {
            SolverResult::Optimal(harvest) | SolverResult::Feasible(harvest) => Some(harvest),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }

    /// The harvest day, if one was found.
    #[inline]
    pub fn day(&self) -> Option<T> {
        self.harvest().map(Harvest::day)
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(harvest) => write!(f, "Optimal(day={})", harvest.day()),
            SolverResult::Feasible(harvest) => write!(f, "Feasible(day={})", harvest.day()),
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The bisection converged on the earliest feasible day.
    OptimalityProven,
    /// The request can never be met by this garden.
    InfeasibilityProven,
    /// A monitor stopped the search. The string is the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T> {
    result: SolverResult<T>,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(
        result: SolverResult<T>,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn optimal(harvest: Harvest<T>, statistics: SearchStatistics) -> Self {
        Self::new(
            SolverResult::Optimal(harvest),
            TerminationReason::OptimalityProven,
            statistics,
        )
    }

    #[inline]
    pub fn feasible(
        harvest: Harvest<T>,
        reason: impl Into<String>,
        statistics: SearchStatistics,
    ) -> Self {
        Self::new(
            SolverResult::Feasible(harvest),
            TerminationReason::Aborted(reason.into()),
            statistics,
        )
    }

    #[inline]
    pub fn infeasible(statistics: SearchStatistics) -> Self {
        Self::new(
            SolverResult::Infeasible,
            TerminationReason::InfeasibilityProven,
            statistics,
        )
    }

    #[inline]
    pub fn unknown(reason: impl Into<String>, statistics: SearchStatistics) -> Self {
        Self::new(
            SolverResult::Unknown,
            TerminationReason::Aborted(reason.into()),
            statistics,
        )
    }

    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_result(self) -> SolverResult<T> {
        self.result
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SolverResult::Infeasible)
    }

    #[inline]
    pub fn has_harvest(&self) -> bool {
        self.result.harvest().is_some()
    }

    /// The proven earliest day, `None` unless the outcome is optimal.
    #[inline]
    pub fn min_day(&self) -> Option<T> {
        match &self.result {
            SolverResult::Optimal(harvest) => Some(harvest.day()),
            _ => None,
        }
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posy_core::math::interval::ClosedOpenInterval;

    type IntegerType = i64;

    fn harvest(day: IntegerType) -> Harvest<IntegerType> {
        Harvest::new(day, vec![ClosedOpenInterval::new(0, 1)])
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = SolverOutcome::optimal(harvest(3), SearchStatistics::default());
        assert!(outcome.is_optimal());
        assert!(!outcome.is_feasible());
        assert!(outcome.has_harvest());
        assert_eq!(outcome.min_day(), Some(3));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_feasible_outcome_has_no_min_day() {
        let outcome = SolverOutcome::feasible(harvest(7), "probe limit", SearchStatistics::default());
        assert!(outcome.is_feasible());
        assert_eq!(outcome.min_day(), None);
        assert_eq!(outcome.result().day(), Some(7));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("probe limit".to_string())
        );
    }

    #[test]
    fn test_infeasible_outcome() {
        let outcome = SolverOutcome::<IntegerType>::infeasible(SearchStatistics::default());
        assert!(outcome.is_infeasible());
        assert!(!outcome.has_harvest());
        assert_eq!(outcome.result().day(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SolverResult::Optimal(harvest(9))), "Optimal(day=9)");
        assert_eq!(format!("{}", SolverResult::<IntegerType>::Infeasible), "Infeasible");
        assert_eq!(
            format!("{}", TerminationReason::Aborted("time limit reached".into())),
            "Aborted: time limit reached"
        );

        let outcome = SolverOutcome::optimal(harvest(9), SearchStatistics::default());
        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Result: Optimal(day=9)"));
        assert!(rendered.contains("Termination: Optimality Proven"));
        assert!(rendered.contains("Probes: 0"));
    }
}
